//! Верхняя панель: название консоли, организация, выход.

use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::storage::BrowserStorage;
use crate::system::auth::storage::clear_session;
use crate::system::auth::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();
    let tenant = format!("Организация #{}", session.tenant_id);

    let logout = move |_| {
        clear_session(&BrowserStorage);
        log::info!("session cleared");
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"CRM Console"</span>
            </div>
            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{tenant}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Выход">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
