use contracts::domain::a005_transaction::{
    Transaction, TransactionFilterExtra, TransactionKind, TransactionSortBy,
};
use contracts::shared::NumericRange;

use crate::shared::collection::CollectionItem;
use crate::shared::state::FilterStore;

pub type TransactionFilterStore = FilterStore<TransactionSortBy, TransactionFilterExtra>;

pub const KINDS: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

pub fn create_filter() -> TransactionFilterStore {
    TransactionFilterStore::with_defaults()
}

impl CollectionItem for Transaction {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> String {
        if self.description.is_empty() {
            format!("{} #{}", self.kind.display_name(), self.id)
        } else {
            self.description.clone()
        }
    }

    fn revision(&self) -> i64 {
        self.metadata.revision()
    }
}

impl FilterStore<TransactionSortBy, TransactionFilterExtra> {
    pub fn change_kind(&self, kind: Option<TransactionKind>) {
        self.update_extra(|x| x.kind = kind);
    }

    pub fn change_amount_range(&self, range: NumericRange) {
        self.update_extra(|x| x.amount = range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(raw: &str) -> Transaction {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_name_falls_back_to_kind() {
        let expense = tx(r#"{"id":9,"kind":"expense","amount":250.0,
            "created_at":"2024-03-15T14:02:26Z","updated_at":"2024-03-15T14:02:26Z"}"#);
        assert_eq!(expense.name(), "Расход #9");
        assert_eq!(expense.signed_amount(), -250.0);

        let income = tx(r#"{"id":10,"kind":"income","amount":100.0,"description":"Оплата",
            "created_at":"2024-03-15T14:02:26Z","updated_at":"2024-03-15T14:02:26Z"}"#);
        assert_eq!(income.name(), "Оплата");
    }

    #[test]
    fn test_kind_filter() {
        let filter = create_filter();
        filter.change_kind(Some(TransactionKind::Income));
        filter.change_amount_range(NumericRange::new("", "1000"));
        let snapshot = filter.snapshot();
        assert_eq!(snapshot.extra.kind, Some(TransactionKind::Income));
        assert_eq!(snapshot.extra.amount, NumericRange::new("", "1000"));
    }
}
