pub mod state;

use contracts::domain::a001_customer::Customer;
use contracts::shared::NumericRange;
use leptos::prelude::*;

use self::state::create_filter;
use crate::shared::collection::use_collection_controller;
use crate::shared::components::ui::{AmountBadge, DeletedBadge};
use crate::shared::components::{CollectionScreen, NumericRangeInput};
use crate::shared::date_utils::format_timestamp;
use crate::shared::details_page::use_open_details;

fn customer_card(customer: &Customer) -> AnyView {
    let name = customer.name.clone();
    let deleted = customer.metadata.is_deleted();
    let balance = customer.balance;
    let created = format_timestamp(&customer.metadata.created_at);
    let contacts = [customer.phone.clone(), customer.email.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <div class="card card--customer">
            <div class="card__title">
                {name}
                " "
                <DeletedBadge deleted=deleted />
            </div>
            <div class="card__subtitle">{contacts}</div>
            <div class="card__meta">
                <AmountBadge value=balance />
                <span class="card__date">{created}</span>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let filter = create_filter();
    let controller = use_collection_controller("/api/customers", filter).with_url_mirror();
    let balance = Signal::derive(move || filter.with(|f| f.extra.balance.clone()));

    let extra_filters = move || {
        view! {
            <NumericRangeInput
                label="Баланс"
                value=balance
                on_change=Callback::new(move |r: NumericRange| filter.change_balance_range(r))
            />
        }
    };

    view! {
        <CollectionScreen
            title="Клиенты"
            controller=controller
            render_item=customer_card
            on_open={use_open_details::<Customer>("customers")}
            extra_filters=extra_filters
        />
    }
}
