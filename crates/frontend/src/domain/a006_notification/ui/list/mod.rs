pub mod state;

use contracts::domain::a006_notification::Notification;
use leptos::prelude::*;
use thaw::*;

use self::state::create_filter;
use crate::shared::collection::use_collection_controller;
use crate::shared::components::CollectionScreen;
use crate::shared::date_utils::format_timestamp;
use crate::shared::details_page::use_open_details;

fn notification_card(n: &Notification) -> AnyView {
    let is_read = n.is_read;
    let title = n.title.clone();
    let body = n.body.clone();
    let created = format_timestamp(&n.metadata.created_at);
    view! {
        <div class=if is_read { "card card--notification" } else { "card card--notification card--unread" }>
            <div class="card__title">
                {title}
                " "
                <Show when=move || !is_read>
                    <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>"Новое"</Badge>
                </Show>
            </div>
            <div class="card__body">{body}</div>
            <div class="card__meta">
                <span class="card__date">{created}</span>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn NotificationList() -> impl IntoView {
    let filter = create_filter();
    let controller = use_collection_controller("/api/notifications", filter).with_url_mirror();
    let unread_only = Signal::derive(move || filter.with(|f| f.extra.unread_only));

    let extra_filters = move || {
        view! {
            <label class="filter-field">
                <input
                    type="checkbox"
                    prop:checked=move || unread_only.get()
                    on:change=move |ev| filter.change_unread_only(event_target_checked(&ev))
                />
                <span>"Только непрочитанные"</span>
            </label>
        }
    };

    view! {
        <CollectionScreen
            title="Уведомления"
            controller=controller
            render_item=notification_card
            on_open={use_open_details::<Notification>("notifications")}
            extra_filters=extra_filters
        />
    }
}
