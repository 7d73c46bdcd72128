use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Направление серверной сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }

    pub fn code(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Видимость мягко удалённых записей.
///
/// `Null` - только живые записи (значение по умолчанию на сервере).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeletedVisibility {
    #[default]
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "all")]
    All,
    #[serde(rename = "only")]
    Only,
}

impl DeletedVisibility {
    pub fn code(self) -> &'static str {
        match self {
            DeletedVisibility::Null => "null",
            DeletedVisibility::All => "all",
            DeletedVisibility::Only => "only",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DeletedVisibility::Null => "Без удалённых",
            DeletedVisibility::All => "Все записи",
            DeletedVisibility::Only => "Только удалённые",
        }
    }

    pub fn all() -> Vec<DeletedVisibility> {
        vec![
            DeletedVisibility::Null,
            DeletedVisibility::All,
            DeletedVisibility::Only,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "null" => Some(DeletedVisibility::Null),
            "all" => Some(DeletedVisibility::All),
            "only" => Some(DeletedVisibility::Only),
            _ => None,
        }
    }
}

/// Диапазон дат `[from, to]` в формате `YYYY-MM-DD` (допускается хвост со временем).
///
/// Либо обе границы пустые, либо обе заполнены корректными датами.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange(pub String, pub String);

impl DateRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self(from.into(), to.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty() && self.1.trim().is_empty()
    }

    pub fn is_valid(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        parse_iso_date(&self.0).is_some() && parse_iso_date(&self.1).is_some()
    }
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value
        .trim()
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Числовой диапазон `[min, max]` строками, как его вводит пользователь.
/// Порядок границ проверяет сервер.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumericRange(pub String, pub String);

impl NumericRange {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self(min.into(), max.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty() && self.1.trim().is_empty()
    }
}

/// Поле серверной сортировки конкретной коллекции
pub trait SortKey: Copy + PartialEq + Default + Send + Sync + 'static {
    /// Ключ, который уходит на сервер в `sort_by`
    fn key(self) -> &'static str;

    /// Подпись на кнопке сортировки
    fn label(self) -> &'static str;

    fn all() -> &'static [Self];
}

/// Снимок фильтра коллекции.
///
/// `S` - перечисление полей сортировки, `X` - поля, специфичные для сущности.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter<S, X> {
    pub query: String,
    pub sort_by: S,
    pub sort_direction: SortDirection,
    pub created: DateRange,
    pub updated: DateRange,
    pub extra: X,
    pub deleted: DeletedVisibility,
}

impl<S: SortKey, X> Filter<S, X> {
    /// Проблемы, из-за которых запрос не стоит отправлять
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !self.created.is_valid() {
            problems.push("Некорректный период создания".to_string());
        }
        if !self.updated.is_valid() {
            problems.push("Некорректный период изменения".to_string());
        }
        problems
    }

    /// Количество активных фильтров для бейджа панели
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.query.trim().is_empty() {
            count += 1;
        }
        if !self.created.is_empty() {
            count += 1;
        }
        if !self.updated.is_empty() {
            count += 1;
        }
        if self.deleted != DeletedVisibility::Null {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    enum TestSort {
        #[default]
        Name,
        CreatedAt,
    }

    impl SortKey for TestSort {
        fn key(self) -> &'static str {
            match self {
                TestSort::Name => "name",
                TestSort::CreatedAt => "created_at",
            }
        }

        fn label(self) -> &'static str {
            match self {
                TestSort::Name => "Имя",
                TestSort::CreatedAt => "Создан",
            }
        }

        fn all() -> &'static [Self] {
            &[TestSort::Name, TestSort::CreatedAt]
        }
    }

    #[test]
    fn test_date_range_validity() {
        assert!(DateRange::default().is_valid());
        assert!(DateRange::new("2024-01-01", "2024-01-31").is_valid());
        assert!(DateRange::new("2024-01-01T00:00:00Z", "2024-01-31 23:59").is_valid());
        assert!(!DateRange::new("2024-01-01", "").is_valid());
        assert!(!DateRange::new("01.01.2024", "2024-01-31").is_valid());
    }

    #[test]
    fn test_default_filter() {
        let filter: Filter<TestSort, ()> = Filter::default();
        assert_eq!(filter.query, "");
        assert_eq!(filter.sort_by, TestSort::Name);
        assert_eq!(filter.sort_direction, SortDirection::Asc);
        assert_eq!(filter.deleted, DeletedVisibility::Null);
        assert!(filter.validate().is_empty());
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn test_validate_reports_each_bad_range() {
        let filter: Filter<TestSort, ()> = Filter {
            created: DateRange::new("2024-01-01", ""),
            updated: DateRange::new("x", "y"),
            ..Default::default()
        };
        assert_eq!(filter.validate().len(), 2);
    }

    #[test]
    fn test_sort_direction_toggles() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    }

    #[test]
    fn test_deleted_visibility_wire_format() {
        assert_eq!(
            serde_json::to_string(&DeletedVisibility::Null).unwrap(),
            "\"null\""
        );
        assert_eq!(
            serde_json::from_str::<DeletedVisibility>("\"only\"").unwrap(),
            DeletedVisibility::Only
        );
    }
}
