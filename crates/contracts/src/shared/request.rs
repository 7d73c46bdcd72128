use serde::{Deserialize, Serialize};

use super::filter::{DateRange, DeletedVisibility, Filter, SortDirection, SortKey};

/// Тело запроса к коллекционному эндпоинту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRequest<X> {
    pub tenant_id: i64,
    pub page: u64,
    pub per_page: u64,
    pub sort_by: String,
    pub sort_direction: SortDirection,
    pub query: String,
    pub filters: RequestFilters<X>,
}

/// Фильтры запроса: общие диапазоны + поля конкретной сущности (плоско)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestFilters<X> {
    #[serde(default, skip_serializing_if = "DateRange::is_empty")]
    pub created_at: DateRange,
    #[serde(default, skip_serializing_if = "DateRange::is_empty")]
    pub updated_at: DateRange,
    #[serde(default)]
    pub deleted: DeletedVisibility,
    #[serde(flatten)]
    pub extra: X,
}

impl<X: Clone> CollectionRequest<X> {
    /// Собрать запрос из снимка фильтра и параметров пагинации
    pub fn compose<S: SortKey>(
        tenant_id: i64,
        filter: &Filter<S, X>,
        page: u64,
        per_page: u64,
    ) -> Self {
        Self {
            tenant_id,
            page: page.max(1),
            per_page,
            sort_by: filter.sort_by.key().to_string(),
            sort_direction: filter.sort_direction,
            query: filter.query.trim().to_string(),
            filters: RequestFilters {
                created_at: filter.created.clone(),
                updated_at: filter.updated.clone(),
                deleted: filter.deleted,
                extra: filter.extra.clone(),
            },
        }
    }
}

/// Групповое действие над выделенными записями
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRequest {
    pub tenant_id: i64,
    pub ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::NumericRange;

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    enum Sort {
        #[default]
        Name,
    }

    impl SortKey for Sort {
        fn key(self) -> &'static str {
            "name"
        }

        fn label(self) -> &'static str {
            "Имя"
        }

        fn all() -> &'static [Self] {
            &[Sort::Name]
        }
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct Extra {
        #[serde(skip_serializing_if = "NumericRange::is_empty")]
        balance: NumericRange,
    }

    #[test]
    fn test_compose_request_body() {
        let filter: Filter<Sort, Extra> = Filter {
            query: "  ivanov ".to_string(),
            created: DateRange::new("2024-01-01", "2024-02-01"),
            extra: Extra {
                balance: NumericRange::new("10", "500"),
            },
            ..Default::default()
        };

        let request = CollectionRequest::compose(7, &filter, 3, 25);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["tenant_id"], 7);
        assert_eq!(body["page"], 3);
        assert_eq!(body["per_page"], 25);
        assert_eq!(body["sort_by"], "name");
        assert_eq!(body["sort_direction"], "asc");
        assert_eq!(body["query"], "ivanov");
        assert_eq!(
            body["filters"]["created_at"],
            serde_json::json!(["2024-01-01", "2024-02-01"])
        );
        assert!(body["filters"].get("updated_at").is_none());
        assert_eq!(body["filters"]["deleted"], "null");
        assert_eq!(body["filters"]["balance"], serde_json::json!(["10", "500"]));
    }

    #[test]
    fn test_compose_clamps_page() {
        let filter: Filter<Sort, Extra> = Filter::default();
        let request = CollectionRequest::compose(1, &filter, 0, 10);
        assert_eq!(request.page, 1);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body["filters"].get("balance").is_none());
    }
}
