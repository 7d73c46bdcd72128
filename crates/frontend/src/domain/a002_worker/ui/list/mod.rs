pub mod state;

use contracts::domain::a002_worker::Worker;
use leptos::prelude::*;
use thaw::*;

use self::state::{build_invitation, create_filter};
use crate::config::AppConfig;
use crate::shared::api_utils::{api_base, check_envelope, ApiClient};
use crate::shared::collection::use_collection_controller;
use crate::shared::components::ui::DeletedBadge;
use crate::shared::components::CollectionScreen;
use crate::shared::details_page::use_open_details;
use crate::shared::icons::icon;
use crate::shared::notifications::{report_error, use_notifications, Notifier};
use crate::system::auth::use_session;

fn worker_card(worker: &Worker) -> AnyView {
    let name = worker.name.clone();
    let deleted = worker.metadata.is_deleted();
    let position = worker.position.clone().unwrap_or_else(|| "—".to_string());
    let contacts = [worker.phone.clone(), worker.email.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    let is_active = worker.is_active;

    view! {
        <div class="card card--worker">
            <div class="card__title">
                {name}
                " "
                <DeletedBadge deleted=deleted />
                <Show when=move || !is_active>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Не активен"</Badge>
                </Show>
            </div>
            <div class="card__subtitle">{position}</div>
            <div class="card__meta">{contacts}</div>
        </div>
    }
    .into_any()
}

/// Форма приглашения сотрудника
#[component]
fn InviteForm(on_sent: Callback<()>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let session = use_session();
    let client = ApiClient::new(api_base(&config.api), &session);
    let notifications = use_notifications();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let position = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let submit = move |_| {
        if sending.get_untracked() {
            return;
        }
        let request = match build_invitation(
            client.tenant_id(),
            &name.get_untracked(),
            &email.get_untracked(),
            &position.get_untracked(),
        ) {
            Ok(request) => request,
            Err(e) => {
                report_error(&notifications, &e);
                return;
            }
        };
        let client = client.clone();
        sending.set(true);
        leptos::task::spawn_local(async move {
            let result = match client.post_json("/api/workers/invite", &request).await {
                Ok(body) => check_envelope(&body),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    notifications.send_success(format!("Приглашение отправлено: {}", request.email));
                    name.set(String::new());
                    email.set(String::new());
                    position.set(String::new());
                    on_sent.run(());
                }
                Err(e) => report_error(&notifications, &e),
            }
            sending.set(false);
        });
    };

    view! {
        <div class="invite-form" style="display: flex; gap: 8px; align-items: center; flex-wrap: wrap; margin-bottom: 12px;">
            {icon("user-plus")}
            <input type="text" placeholder="Имя" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev)) />
            <input type="email" placeholder="Email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev)) />
            <input type="text" placeholder="Должность" prop:value=move || position.get() on:input=move |ev| position.set(event_target_value(&ev)) />
            <Button
                appearance=ButtonAppearance::Primary
                on_click=submit
                disabled=Signal::derive(move || sending.get())
            >
                "Пригласить"
            </Button>
        </div>
    }
}

#[component]
pub fn WorkerList() -> impl IntoView {
    let filter = create_filter();
    let controller = use_collection_controller("/api/workers", filter).with_url_mirror();
    let ctrl = controller.clone();
    let on_sent = Callback::new(move |_: ()| ctrl.reload());

    let position = Signal::derive(move || filter.with(|f| f.extra.position.clone()));
    let active_only = Signal::derive(move || filter.with(|f| f.extra.active_only));

    let header = move || view! { <InviteForm on_sent=on_sent /> };
    let extra_filters = move || {
        view! {
            <label class="filter-field">
                <span>"Должность"</span>
                <input
                    type="text"
                    prop:value=move || position.get()
                    on:change=move |ev| filter.change_position(event_target_value(&ev))
                />
            </label>
            <label class="filter-field">
                <input
                    type="checkbox"
                    prop:checked=move || active_only.get()
                    on:change=move |ev| filter.change_active_only(event_target_checked(&ev))
                />
                <span>"Только активные"</span>
            </label>
        }
    };

    view! {
        <CollectionScreen
            title="Сотрудники"
            controller=controller
            render_item=worker_card
            on_open={use_open_details::<Worker>("workers")}
            header=header
            extra_filters=extra_filters
        />
    }
}
