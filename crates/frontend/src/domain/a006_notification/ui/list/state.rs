use contracts::domain::a006_notification::{
    Notification, NotificationFilterExtra, NotificationSortBy,
};

use crate::shared::collection::CollectionItem;
use crate::shared::state::FilterStore;

pub type NotificationFilterStore = FilterStore<NotificationSortBy, NotificationFilterExtra>;

pub fn create_filter() -> NotificationFilterStore {
    NotificationFilterStore::with_defaults()
}

impl CollectionItem for Notification {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> String {
        self.title.clone()
    }

    // прочтение может не трогать updated_at
    fn revision(&self) -> i64 {
        self.metadata.revision() * 2 + i64::from(self.is_read)
    }
}

impl FilterStore<NotificationSortBy, NotificationFilterExtra> {
    pub fn change_unread_only(&self, unread_only: bool) {
        self.update_extra(|x| x.unread_only = unread_only);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_only_counts_as_extra() {
        let filter = create_filter();
        filter.change_unread_only(true);
        assert!(filter.snapshot().extra.unread_only);
        // бейдж панели считает только общие поля
        assert_eq!(filter.with(|f| f.active_count()), 0);
    }

    #[test]
    fn test_read_flag_changes_revision() {
        let mut n: Notification = serde_json::from_str(
            r#"{"id":1,"title":"Заказ готов",
                "created_at":"2024-03-15T14:02:26Z","updated_at":"2024-03-15T14:02:26Z"}"#,
        )
        .unwrap();
        let unread = n.revision();
        n.is_read = true;
        assert_ne!(n.revision(), unread);
    }
}
