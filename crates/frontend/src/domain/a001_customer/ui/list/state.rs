use contracts::domain::a001_customer::{Customer, CustomerFilterExtra, CustomerSortBy};
use contracts::shared::NumericRange;

use crate::shared::collection::CollectionItem;
use crate::shared::state::FilterStore;

pub type CustomerFilterStore = FilterStore<CustomerSortBy, CustomerFilterExtra>;

pub fn create_filter() -> CustomerFilterStore {
    CustomerFilterStore::with_defaults()
}

impl CollectionItem for Customer {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn revision(&self) -> i64 {
        self.metadata.revision()
    }
}

impl FilterStore<CustomerSortBy, CustomerFilterExtra> {
    pub fn change_balance_range(&self, range: NumericRange) {
        self.update_extra(|x| x.balance = range);
    }
}
