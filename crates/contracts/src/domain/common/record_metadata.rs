use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные жизненного цикла записи (как их отдаёт сервер)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Дата создания записи
    pub created_at: DateTime<Utc>,
    /// Дата последнего обновления
    pub updated_at: DateTime<Utc>,
    /// Мягкое удаление (soft delete)
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl RecordMetadata {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Метка изменения записи: растёт при обновлении и удалении
    pub fn revision(&self) -> i64 {
        let updated = self.updated_at.timestamp_millis();
        self.deleted_at
            .map_or(updated, |deleted| updated.max(deleted.timestamp_millis()))
    }
}
