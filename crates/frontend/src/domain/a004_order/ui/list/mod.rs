pub mod state;

use contracts::domain::a004_order::{Order, OrderStatus};
use contracts::shared::NumericRange;
use leptos::prelude::*;
use thaw::*;

use self::state::create_filter;
use crate::shared::collection::use_collection_controller;
use crate::shared::components::ui::DeletedBadge;
use crate::shared::components::{CollectionScreen, NumericRangeInput};
use crate::shared::date_utils::{format_money, format_timestamp};
use crate::shared::details_page::use_open_details;

pub fn status_color(status: OrderStatus) -> BadgeColor {
    match status {
        OrderStatus::New => BadgeColor::Informative,
        OrderStatus::InProgress => BadgeColor::Warning,
        OrderStatus::Done => BadgeColor::Success,
        OrderStatus::Cancelled => BadgeColor::Subtle,
    }
}

fn order_card(order: &Order) -> AnyView {
    let number = format!("№{}", order.number);
    let status_label = order.status.display_name();
    let color = status_color(order.status);
    let deleted = order.metadata.is_deleted();
    let total = format_money(order.total);
    let created = format_timestamp(&order.metadata.created_at);
    let parties = [order.customer_name.clone(), order.worker_name.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" → ");

    view! {
        <div class="card card--order">
            <div class="card__title">
                {number}
                " "
                <Badge appearance=BadgeAppearance::Tint color=color>
                    {status_label}
                </Badge>
                " "
                <DeletedBadge deleted=deleted />
            </div>
            <div class="card__subtitle">{parties}</div>
            <div class="card__meta">
                <strong>{total}</strong>
                <span class="card__date">{created}</span>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn OrderList() -> impl IntoView {
    let filter = create_filter();
    let controller = use_collection_controller("/api/orders", filter).with_url_mirror();
    let total = Signal::derive(move || filter.with(|f| f.extra.total.clone()));
    let status = move || {
        filter.with(|f| f.extra.status.map(|s| s.code()).unwrap_or_default().to_string())
    };

    let extra_filters = move || {
        view! {
            <label class="filter-field">
                <span>"Статус"</span>
                <select
                    prop:value=status
                    on:change=move |ev| {
                        filter.change_status(OrderStatus::from_code(&event_target_value(&ev)))
                    }
                >
                    <option value="">"Все"</option>
                    {OrderStatus::all().into_iter().map(|s| view! {
                        <option value=s.code()>{s.display_name()}</option>
                    }).collect_view()}
                </select>
            </label>
            <NumericRangeInput
                label="Сумма"
                value=total
                on_change=Callback::new(move |r: NumericRange| filter.change_total_range(r))
            />
        }
    };

    view! {
        <CollectionScreen
            title="Заказы"
            controller=controller
            render_item=order_card
            on_open={use_open_details::<Order>("orders")}
            extra_filters=extra_filters
        />
    }
}
