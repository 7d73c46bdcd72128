use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - серверная пагинация (страницы с 1)
#[component]
pub fn PaginationControls(
    /// Current page (1-based, как у сервера)
    #[prop(into)]
    current_page: Signal<u64>,

    /// Last page number
    #[prop(into)]
    last_page: Signal<u64>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u64>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,

    /// Available page size options
    page_size_options: Vec<u32>,

    /// Блокировка на время загрузки
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let last = move || last_page.get().max(1);
    let at_first = move || disabled.get() || current_page.get() <= 1;
    let at_last = move || disabled.get() || current_page.get() >= last();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", current_page.get().max(1), last(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page < last_page.get_untracked() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last_page.get_untracked().max(1))
                disabled=at_last
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(val);
                    }
                }
                prop:value=move || page_size.get().to_string()
                disabled=move || disabled.get()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
