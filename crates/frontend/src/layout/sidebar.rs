//! Боковое меню: группы разделов консоли

use contracts::enums::CatalogKind;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(String, &'static str, &'static str)>, // (href, label, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    let catalog = CatalogKind::all()
        .into_iter()
        .map(|kind| {
            let icon_name = match kind {
                CatalogKind::Product => "products",
                CatalogKind::Service => "services",
            };
            (format!("/catalog/{}", kind.code()), kind.display_name(), icon_name)
        })
        .collect::<Vec<_>>();

    vec![
        MenuGroup {
            label: "Справочники",
            items: [
                vec![
                    ("/customers".to_string(), "Клиенты", "customers"),
                    ("/workers".to_string(), "Сотрудники", "workers"),
                ],
                catalog,
            ]
            .concat(),
        },
        MenuGroup {
            label: "Документы",
            items: vec![
                ("/orders".to_string(), "Заказы", "orders"),
                ("/transactions".to_string(), "Транзакции", "transactions"),
            ],
        },
        MenuGroup {
            label: "Сервис",
            items: vec![
                ("/notifications".to_string(), "Уведомления", "notifications"),
                ("/audit".to_string(), "Журнал действий", "audit"),
            ],
        },
    ]
}

/// Пункт активен на своём пути и на вложенных (`/catalog/product/...`)
fn is_active(current: &str, href: &str) -> bool {
    current == href
        || current
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{group.label}</div>
                    {group.items.into_iter().map(|(href, label, icon_name)| {
                        let href_for_active = href.clone();
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    pathname.with(|p| is_active(p, &href_for_active))
                                }
                            >
                                <A href=href>
                                    <span class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </span>
                                </A>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}
