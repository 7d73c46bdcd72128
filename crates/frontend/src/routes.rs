use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_worker::ui::list::WorkerList;
use crate::domain::a003_catalog::ui::list::CatalogPage;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_transaction::ui::list::TransactionList;
use crate::domain::a006_notification::ui::list::NotificationList;
use crate::domain::a007_audit_log::ui::list::AuditLogList;
use crate::layout::Shell;
use crate::shared::details_page::DetailsPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Страница не найдена"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/customers" /> } />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/workers") view=WorkerList />
                    <Route path=path!("/catalog/:kind") view=CatalogPage />
                    <Route path=path!("/orders") view=OrderList />
                    <Route path=path!("/transactions") view=TransactionList />
                    <Route path=path!("/notifications") view=NotificationList />
                    <Route path=path!("/audit") view=AuditLogList />
                    <Route path=path!("/details/:section/:id") view=DetailsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
