//! Записи журнала неизменяемые: без мягкого удаления и даты правки.

use contracts::domain::a007_audit_log::{AuditEntry, AuditFilterExtra, AuditSortBy};

use crate::shared::collection::CollectionItem;
use crate::shared::state::FilterStore;

pub type AuditFilterStore = FilterStore<AuditSortBy, AuditFilterExtra>;

pub fn create_filter() -> AuditFilterStore {
    AuditFilterStore::with_defaults()
}

impl CollectionItem for AuditEntry {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> String {
        format!("{}: {}", self.actor_name, self.action)
    }
}

impl FilterStore<AuditSortBy, AuditFilterExtra> {
    pub fn change_action(&self, action: String) {
        self.update_extra(|x| x.action = action.trim().to_string());
    }
}

/// "customer" + 42 -> "customer #42"
pub fn entity_label(entry: &AuditEntry) -> String {
    match (&entry.entity_type, entry.entity_id) {
        (Some(kind), Some(id)) => format!("{} #{}", kind, id),
        (Some(kind), None) => kind.clone(),
        (None, Some(id)) => format!("#{}", id),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_labels() {
        let entry: AuditEntry = serde_json::from_str(
            r#"{"id":1,"actor_name":"admin","action":"customer.updated",
                "entity_type":"customer","entity_id":42,"created_at":"2024-03-15T14:02:26Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.name(), "admin: customer.updated");
        assert_eq!(entity_label(&entry), "customer #42");
    }

    #[test]
    fn test_action_is_trimmed() {
        let filter = create_filter();
        filter.change_action("  order.deleted ".to_string());
        assert_eq!(filter.snapshot().extra.action, "order.deleted");
    }
}
