use std::sync::Arc;

use leptos::prelude::*;
use thaw::*;

use crate::config::AppConfig;
use crate::routes::AppRoutes;
use crate::shared::notifications::NotificationCenter;
use crate::shared::state::Preferences;
use crate::shared::storage::BrowserStorage;
use crate::system::auth::storage::load_session;

#[component]
fn NoSession() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <MessageBar intent=MessageBarIntent::Warning>
                "Сессия не найдена. Войдите в систему через портал организации."
            </MessageBar>
        </div>
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = load_session(&BrowserStorage);
    let authenticated = session.is_authenticated();
    log::info!(
        "console started: tenant={}, authenticated={}",
        session.tenant_id,
        authenticated
    );

    provide_context(Preferences::new(Arc::new(BrowserStorage), &config.ui));
    provide_context(NotificationCenter::new(config.ui.toast_duration_ms));
    provide_context(session);
    provide_context(config);

    view! {
        <ConfigProvider>
            <Show when=move || authenticated fallback=|| view! { <NoSession /> }>
                <AppRoutes />
            </Show>
        </ConfigProvider>
    }
}
