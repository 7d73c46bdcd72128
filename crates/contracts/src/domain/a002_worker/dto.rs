use crate::domain::common::RecordMetadata;
use crate::shared::filter::{Filter, SortKey};
use serde::{Deserialize, Serialize};

/// Сотрудник (мастер, администратор)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerSortBy {
    #[default]
    Name,
    Position,
    CreatedAt,
}

impl SortKey for WorkerSortBy {
    fn key(self) -> &'static str {
        match self {
            WorkerSortBy::Name => "name",
            WorkerSortBy::Position => "position",
            WorkerSortBy::CreatedAt => "created_at",
        }
    }

    fn label(self) -> &'static str {
        match self {
            WorkerSortBy::Name => "Имя",
            WorkerSortBy::Position => "Должность",
            WorkerSortBy::CreatedAt => "Дата создания",
        }
    }

    fn all() -> &'static [Self] {
        &[
            WorkerSortBy::Name,
            WorkerSortBy::Position,
            WorkerSortBy::CreatedAt,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkerFilterExtra {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
    #[serde(default)]
    pub active_only: bool,
}

pub type WorkerFilter = Filter<WorkerSortBy, WorkerFilterExtra>;

/// Приглашение сотрудника в организацию
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvitationRequest {
    pub tenant_id: i64,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
}
