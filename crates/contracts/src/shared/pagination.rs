use serde::{Deserialize, Serialize};

/// Метаданные страницы, как их отдаёт сервер.
///
/// `from` - порядковый номер первой записи страницы (1-based),
/// для пустой страницы сервер присылает `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    pub last_page: u64,
    pub current_page: u64,
}

impl PageMetadata {
    /// Есть ли следующая страница для "Показать ещё"
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Страница, на которой окажется текущая первая запись после смены размера страницы
    pub fn page_after_resize(&self, new_page_size: u64) -> u64 {
        match self.from {
            Some(from) if from > 0 && new_page_size > 0 => from.div_ceil(new_page_size),
            _ => 1,
        }
    }
}

/// Успешный ответ коллекционного эндпоинта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMetadata,
}

/// Прикладная ошибка, приходит с HTTP 200
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "errorMessages")]
    pub error_messages: Vec<String>,
}

/// Любой ответ коллекционного эндпоинта.
///
/// Страница проверяется первой: бэкенд иногда кладёт пустой
/// `errorMessages` рядом с `data`/`meta`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    Page(ListResponse<T>),
    Error(ErrorEnvelope),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(from: Option<u64>, current_page: u64, last_page: u64) -> PageMetadata {
        PageMetadata {
            total: 100,
            from,
            last_page,
            current_page,
        }
    }

    #[test]
    fn test_page_after_resize_keeps_first_item_visible() {
        assert_eq!(meta(Some(11), 2, 10).page_after_resize(25), 1);
        assert_eq!(meta(Some(51), 6, 10).page_after_resize(25), 3);
        assert_eq!(meta(Some(50), 2, 2).page_after_resize(25), 2);
    }

    #[test]
    fn test_page_after_resize_empty_page() {
        assert_eq!(meta(None, 1, 1).page_after_resize(25), 1);
        assert_eq!(meta(Some(0), 1, 1).page_after_resize(25), 1);
    }

    #[test]
    fn test_has_more() {
        assert!(meta(Some(1), 1, 3).has_more());
        assert!(!meta(Some(21), 3, 3).has_more());
    }

    #[test]
    fn test_envelope_page() {
        let raw = r#"{"data":[1,2,3],"meta":{"total":3,"from":1,"last_page":1,"current_page":1}}"#;
        let parsed: ApiEnvelope<i64> = serde_json::from_str(raw).unwrap();
        match parsed {
            ApiEnvelope::Page(page) => {
                assert_eq!(page.data, vec![1, 2, 3]);
                assert_eq!(page.meta.from, Some(1));
            }
            ApiEnvelope::Error(_) => panic!("expected page"),
        }
    }

    #[test]
    fn test_envelope_error_and_null_from() {
        let raw = r#"{"errorMessages":["Нет доступа"]}"#;
        let parsed: ApiEnvelope<i64> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed,
            ApiEnvelope::Error(ErrorEnvelope {
                error_messages: vec!["Нет доступа".to_string()]
            })
        );

        let raw = r#"{"data":[],"meta":{"total":0,"from":null,"last_page":1,"current_page":1}}"#;
        let parsed: ApiEnvelope<i64> = serde_json::from_str(raw).unwrap();
        assert!(matches!(parsed, ApiEnvelope::Page(p) if p.meta.from.is_none()));
    }

    #[test]
    fn test_envelope_page_with_empty_error_list() {
        let raw = r#"{"data":[1,2],"meta":{"total":2,"from":1,"last_page":1,"current_page":1},"errorMessages":[]}"#;
        let parsed: ApiEnvelope<i64> = serde_json::from_str(raw).unwrap();
        assert!(matches!(parsed, ApiEnvelope::Page(p) if p.data == vec![1, 2]));
    }
}
