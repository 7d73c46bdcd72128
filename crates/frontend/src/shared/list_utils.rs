/// Утилиты для экранов-коллекций (поиск, индикатор сортировки)
use contracts::shared::SortDirection;
use leptos::prelude::*;

use super::icons::icon;
use super::timing::Debounced;

/// Получить индикатор сортировки для кнопки направления
pub fn sort_indicator(direction: SortDirection) -> &'static str {
    if direction.is_ascending() {
        "▲"
    } else {
        "▼"
    }
}

/// Компонент поиска с debounce и кнопкой очистки.
///
/// Серия нажатий схлопывается в один `on_change` с последним значением
/// после `delay_ms` тишины. Очистка срабатывает сразу.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Окно тишины, мс
    delay_ms: u32,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    let debounced = Debounced::new(delay_ms, on_change);

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debounced.cancel();
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" style="position: relative; display: inline-flex; align-items: center;">
            <span style="position: absolute; left: 8px; color: #999; display: inline-flex;">
                {icon("search")}
            </span>
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 260px; padding: 6px 32px 6px 32px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    input_value.set(val.clone());
                    debounced.call(val);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                    on:click=clear_filter
                    title="Очистить"
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
