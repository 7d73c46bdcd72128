use crate::domain::common::RecordMetadata;
use crate::shared::filter::{Filter, NumericRange, SortKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Приход",
            TransactionKind::Expense => "Расход",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// Движение денег по кассе / лицевому счёту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl Transaction {
    /// Сумма со знаком: расход отрицательный
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionSortBy {
    #[default]
    CreatedAt,
    Amount,
}

impl SortKey for TransactionSortBy {
    fn key(self) -> &'static str {
        match self {
            TransactionSortBy::CreatedAt => "created_at",
            TransactionSortBy::Amount => "amount",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TransactionSortBy::CreatedAt => "Дата",
            TransactionSortBy::Amount => "Сумма",
        }
    }

    fn all() -> &'static [Self] {
        &[TransactionSortBy::CreatedAt, TransactionSortBy::Amount]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionFilterExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(default, skip_serializing_if = "NumericRange::is_empty")]
    pub amount: NumericRange,
}

pub type TransactionFilter = Filter<TransactionSortBy, TransactionFilterExtra>;
