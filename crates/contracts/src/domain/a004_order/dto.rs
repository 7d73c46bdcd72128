use crate::domain::common::RecordMetadata;
use crate::shared::filter::{Filter, NumericRange, SortKey};
use serde::{Deserialize, Serialize};

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    InProgress,
    Done,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Done => "done",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::New => "Новый",
            OrderStatus::InProgress => "В работе",
            OrderStatus::Done => "Выполнен",
            OrderStatus::Cancelled => "Отменён",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::New,
            OrderStatus::InProgress,
            OrderStatus::Done,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub number: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub worker_name: Option<String>,
    pub total: f64,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSortBy {
    #[default]
    CreatedAt,
    Number,
    Total,
    Status,
}

impl SortKey for OrderSortBy {
    fn key(self) -> &'static str {
        match self {
            OrderSortBy::CreatedAt => "created_at",
            OrderSortBy::Number => "number",
            OrderSortBy::Total => "total",
            OrderSortBy::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            OrderSortBy::CreatedAt => "Дата создания",
            OrderSortBy::Number => "Номер",
            OrderSortBy::Total => "Сумма",
            OrderSortBy::Status => "Статус",
        }
    }

    fn all() -> &'static [Self] {
        &[
            OrderSortBy::CreatedAt,
            OrderSortBy::Number,
            OrderSortBy::Total,
            OrderSortBy::Status,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderFilterExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "NumericRange::is_empty")]
    pub total: NumericRange,
}

pub type OrderFilter = Filter<OrderSortBy, OrderFilterExtra>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
        }
    }
}
