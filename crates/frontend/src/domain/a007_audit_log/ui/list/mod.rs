//! Журнал действий. Общие фильтры по датам скрыты.

pub mod state;

use contracts::domain::a007_audit_log::AuditEntry;
use leptos::prelude::*;

use self::state::{create_filter, entity_label};
use crate::shared::collection::use_collection_controller;
use crate::shared::components::CollectionScreen;
use crate::shared::date_utils::format_timestamp;
use crate::shared::details_page::use_open_details;

fn audit_card(entry: &AuditEntry) -> AnyView {
    let action = entry.action.clone();
    let actor = entry.actor_name.clone();
    let entity = entity_label(entry);
    let created = format_timestamp(&entry.created_at);
    view! {
        <div class="card card--audit">
            <div class="card__title">
                <code>{action}</code>
            </div>
            <div class="card__subtitle">{actor}</div>
            <div class="card__meta">
                <span>{entity}</span>
                <span class="card__date">{created}</span>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn AuditLogList() -> impl IntoView {
    let filter = create_filter();
    let controller = use_collection_controller("/api/audit-log", filter).with_url_mirror();
    let action = Signal::derive(move || filter.with(|f| f.extra.action.clone()));

    let extra_filters = move || {
        view! {
            <label class="filter-field">
                <span>"Действие"</span>
                <input
                    type="text"
                    placeholder="customer.updated"
                    prop:value=move || action.get()
                    on:change=move |ev| filter.change_action(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <CollectionScreen
            title="Журнал действий"
            controller=controller
            render_item=audit_card
            on_open={use_open_details::<AuditEntry>("audit")}
            date_filters=false
            extra_filters=extra_filters
        />
    }
}
