use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::timing::Throttled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

pub const MIN_GRID_COLUMNS: u32 = 1;
pub const MAX_GRID_COLUMNS: u32 = 6;

/// Переключатель список/сетка и ползунок числа колонок.
///
/// Во время перетаскивания запись настройки ограничена `throttle_ms`,
/// финальное значение (`change`) пишется всегда.
#[component]
pub fn ViewModeSwitch(
    mode: RwSignal<ViewMode>,
    #[prop(into)] columns: Signal<u32>,
    on_columns_change: Callback<u32>,
    throttle_ms: u32,
) -> impl IntoView {
    let throttled = Throttled::new(throttle_ms, on_columns_change);
    let parse = |raw: String| {
        raw.parse::<u32>()
            .ok()
            .map(|v| v.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS))
    };

    let button_class = move |target: ViewMode| {
        if mode.get() == target {
            "view-mode__btn view-mode__btn--active"
        } else {
            "view-mode__btn"
        }
    };

    view! {
        <div class="view-mode" style="display: inline-flex; align-items: center; gap: 6px;">
            <button
                class=move || button_class(ViewMode::List)
                title="Список"
                on:click=move |_| mode.set(ViewMode::List)
            >
                {icon("list")}
            </button>
            <button
                class=move || button_class(ViewMode::Grid)
                title="Сетка"
                on:click=move |_| mode.set(ViewMode::Grid)
            >
                {icon("grid")}
            </button>
            <Show when=move || mode.get() == ViewMode::Grid>
                <input
                    type="range"
                    class="view-mode__slider"
                    min=MIN_GRID_COLUMNS.to_string()
                    max=MAX_GRID_COLUMNS.to_string()
                    prop:value=move || columns.get().to_string()
                    on:input=move |ev| {
                        if let Some(value) = parse(event_target_value(&ev)) {
                            throttled.call(value);
                        }
                    }
                    on:change=move |ev| {
                        if let Some(value) = parse(event_target_value(&ev)) {
                            on_columns_change.run(value);
                        }
                    }
                />
                <span class="view-mode__columns">{move || columns.get()}</span>
            </Show>
        </div>
    }
}
