use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::state::Crumb;

/// След спуска по категориям. Клик по корню отдаёт `None`, по предку - его id
#[component]
pub fn BreadcrumbBar(
    #[prop(into)] trail: Signal<Vec<Crumb>>,
    root_label: &'static str,
    on_select: Callback<Option<i64>>,
) -> impl IntoView {
    view! {
        <nav class="breadcrumbs" style="display: flex; align-items: center; gap: 4px; flex-wrap: wrap;">
            <button class="breadcrumbs__item" on:click=move |_| on_select.run(None)>
                {icon("home")}
                <span>{root_label}</span>
            </button>
            <For
                each=move || trail.get()
                key=|crumb| crumb.id
                children=move |crumb| {
                    let id = crumb.id;
                    let is_last = move || trail.with(|t| t.last().map(|c| c.id) == Some(id));
                    view! {
                        <span class="breadcrumbs__sep">{icon("chevron-right")}</span>
                        <button
                            class=move || if is_last() { "breadcrumbs__item breadcrumbs__item--current" } else { "breadcrumbs__item" }
                            disabled=is_last
                            on:click=move |_| on_select.run(Some(id))
                        >
                            {crumb.name}
                        </button>
                    }
                }
            />
        </nav>
    }
}
