pub mod state;

use contracts::domain::a005_transaction::{Transaction, TransactionKind};
use contracts::shared::NumericRange;
use leptos::prelude::*;

use self::state::{create_filter, KINDS};
use crate::shared::collection::{use_collection_controller, CollectionItem};
use crate::shared::components::ui::{AmountBadge, DeletedBadge};
use crate::shared::components::{CollectionScreen, NumericRangeInput};
use crate::shared::date_utils::format_timestamp;
use crate::shared::details_page::use_open_details;

fn transaction_card(tx: &Transaction) -> AnyView {
    let subtitle = match (&tx.customer_name, tx.order_id) {
        (Some(customer), Some(order)) => format!("{} · заказ #{}", customer, order),
        (Some(customer), None) => customer.clone(),
        (None, Some(order)) => format!("Заказ #{}", order),
        (None, None) => String::new(),
    };
    let title = tx.name();
    let deleted = tx.metadata.is_deleted();
    let amount = tx.signed_amount();
    let created = format_timestamp(&tx.metadata.created_at);

    view! {
        <div class="card card--transaction">
            <div class="card__title">
                {title}
                " "
                <DeletedBadge deleted=deleted />
            </div>
            <div class="card__subtitle">{subtitle}</div>
            <div class="card__meta">
                <AmountBadge value=amount />
                <span class="card__date">{created}</span>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn TransactionList() -> impl IntoView {
    let filter = create_filter();
    let controller = use_collection_controller("/api/transactions", filter).with_url_mirror();
    let amount = Signal::derive(move || filter.with(|f| f.extra.amount.clone()));
    let kind = move || filter.with(|f| f.extra.kind.map(|k| k.code()).unwrap_or_default().to_string());

    let extra_filters = move || {
        view! {
            <label class="filter-field">
                <span>"Тип"</span>
                <select
                    prop:value=kind
                    on:change=move |ev| {
                        filter.change_kind(TransactionKind::from_code(&event_target_value(&ev)))
                    }
                >
                    <option value="">"Все"</option>
                    {KINDS.into_iter().map(|k| view! {
                        <option value=k.code()>{k.display_name()}</option>
                    }).collect_view()}
                </select>
            </label>
            <NumericRangeInput
                label="Сумма"
                value=amount
                on_change=Callback::new(move |r: NumericRange| filter.change_amount_range(r))
            />
        }
    };

    view! {
        <CollectionScreen
            title="Транзакции"
            controller=controller
            render_item=transaction_card
            on_open={use_open_details::<Transaction>("transactions")}
            extra_filters=extra_filters
        />
    }
}
