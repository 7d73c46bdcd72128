use contracts::domain::a004_order::{Order, OrderFilterExtra, OrderSortBy, OrderStatus};
use contracts::shared::NumericRange;

use crate::shared::collection::CollectionItem;
use crate::shared::state::FilterStore;

pub type OrderFilterStore = FilterStore<OrderSortBy, OrderFilterExtra>;

pub fn create_filter() -> OrderFilterStore {
    OrderFilterStore::with_defaults()
}

impl CollectionItem for Order {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> String {
        format!("Заказ №{}", self.number)
    }

    fn revision(&self) -> i64 {
        self.metadata.revision()
    }
}

impl FilterStore<OrderSortBy, OrderFilterExtra> {
    pub fn change_status(&self, status: Option<OrderStatus>) {
        self.update_extra(|x| x.status = status);
    }

    pub fn change_total_range(&self, range: NumericRange) {
        self.update_extra(|x| x.total = range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_clears_with_unknown_code() {
        let filter = create_filter();
        filter.change_status(OrderStatus::from_code("done"));
        assert_eq!(filter.snapshot().extra.status, Some(OrderStatus::Done));

        filter.change_status(OrderStatus::from_code(""));
        assert_eq!(filter.snapshot().extra.status, None);
    }

    #[test]
    fn test_order_selection_label() {
        let order: Order = serde_json::from_str(
            r#"{"id":3,"number":"A-17","status":"in_progress","total":1200.0,
                "created_at":"2024-03-15T14:02:26Z","updated_at":"2024-03-15T14:02:26Z"}"#,
        )
        .unwrap();
        assert_eq!(order.selection_entry().name, "Заказ №A-17");
    }
}
