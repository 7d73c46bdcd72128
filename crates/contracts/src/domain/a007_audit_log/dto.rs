use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::filter::{Filter, SortKey};

/// Запись журнала действий пользователей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub actor_name: String,
    /// Например "customer.updated"
    pub action: String,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditSortBy {
    #[default]
    CreatedAt,
    Actor,
    Action,
}

impl SortKey for AuditSortBy {
    fn key(self) -> &'static str {
        match self {
            AuditSortBy::CreatedAt => "created_at",
            AuditSortBy::Actor => "actor_name",
            AuditSortBy::Action => "action",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AuditSortBy::CreatedAt => "Дата",
            AuditSortBy::Actor => "Пользователь",
            AuditSortBy::Action => "Действие",
        }
    }

    fn all() -> &'static [Self] {
        &[AuditSortBy::CreatedAt, AuditSortBy::Actor, AuditSortBy::Action]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuditFilterExtra {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,
}

pub type AuditFilter = Filter<AuditSortBy, AuditFilterExtra>;
