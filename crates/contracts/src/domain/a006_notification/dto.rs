use crate::domain::common::RecordMetadata;
use crate::shared::filter::{Filter, SortKey};
use serde::{Deserialize, Serialize};

/// Серверное уведомление для пользователя консоли
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationSortBy {
    #[default]
    CreatedAt,
    Title,
}

impl SortKey for NotificationSortBy {
    fn key(self) -> &'static str {
        match self {
            NotificationSortBy::CreatedAt => "created_at",
            NotificationSortBy::Title => "title",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NotificationSortBy::CreatedAt => "Дата",
            NotificationSortBy::Title => "Заголовок",
        }
    }

    fn all() -> &'static [Self] {
        &[NotificationSortBy::CreatedAt, NotificationSortBy::Title]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationFilterExtra {
    #[serde(default)]
    pub unread_only: bool,
}

pub type NotificationFilter = Filter<NotificationSortBy, NotificationFilterExtra>;
