use crate::domain::common::RecordMetadata;
use crate::shared::filter::{Filter, NumericRange, SortKey};
use serde::{Deserialize, Serialize};

/// Клиент сервисного центра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Баланс лицевого счёта
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSortBy {
    #[default]
    Name,
    Balance,
    CreatedAt,
    UpdatedAt,
}

impl SortKey for CustomerSortBy {
    fn key(self) -> &'static str {
        match self {
            CustomerSortBy::Name => "name",
            CustomerSortBy::Balance => "balance",
            CustomerSortBy::CreatedAt => "created_at",
            CustomerSortBy::UpdatedAt => "updated_at",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CustomerSortBy::Name => "Имя",
            CustomerSortBy::Balance => "Баланс",
            CustomerSortBy::CreatedAt => "Дата создания",
            CustomerSortBy::UpdatedAt => "Дата изменения",
        }
    }

    fn all() -> &'static [Self] {
        &[
            CustomerSortBy::Name,
            CustomerSortBy::Balance,
            CustomerSortBy::CreatedAt,
            CustomerSortBy::UpdatedAt,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerFilterExtra {
    #[serde(default, skip_serializing_if = "NumericRange::is_empty")]
    pub balance: NumericRange,
}

pub type CustomerFilter = Filter<CustomerSortBy, CustomerFilterExtra>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_from_server_json() {
        let raw = r#"{
            "id": 5,
            "name": "Иванов Иван",
            "phone": "+7 900 000-00-00",
            "balance": 1500.5,
            "created_at": "2024-03-15T14:02:26Z",
            "updated_at": "2024-03-15T14:02:26Z"
        }"#;
        let customer: Customer = serde_json::from_str(raw).unwrap();
        assert_eq!(customer.id, 5);
        assert_eq!(customer.email, None);
        assert!(!customer.metadata.is_deleted());
    }

    #[test]
    fn test_default_filter_sorts_by_name() {
        let filter = CustomerFilter::default();
        assert_eq!(filter.sort_by.key(), "name");
        assert!(filter.extra.balance.is_empty());
    }
}
