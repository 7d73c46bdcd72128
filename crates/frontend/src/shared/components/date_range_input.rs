use contracts::shared::DateRange;
use leptos::prelude::*;

/// Пара полей `date` для диапазона. Изменение одной границы отдаёт весь диапазон
#[component]
pub fn DateRangeInput(
    label: &'static str,
    #[prop(into)] value: Signal<DateRange>,
    on_change: Callback<DateRange>,
) -> impl IntoView {
    let invalid = move || !value.with(|r| r.is_valid());

    view! {
        <div class="date-range-input" style="display: flex; align-items: center; gap: 6px;">
            <span class="date-range-input__label">{label}</span>
            <input
                type="date"
                class=move || if invalid() { "date-input date-input--invalid" } else { "date-input" }
                prop:value=move || value.with(|r| r.0.clone())
                on:change=move |ev| {
                    let from = event_target_value(&ev);
                    let to = value.with_untracked(|r| r.1.clone());
                    on_change.run(DateRange::new(from, to));
                }
            />
            <span>"—"</span>
            <input
                type="date"
                class=move || if invalid() { "date-input date-input--invalid" } else { "date-input" }
                prop:value=move || value.with(|r| r.1.clone())
                on:change=move |ev| {
                    let from = value.with_untracked(|r| r.0.clone());
                    let to = event_target_value(&ev);
                    on_change.run(DateRange::new(from, to));
                }
            />
            <button
                class="date-range-input__clear"
                title="Сбросить период"
                on:click=move |_| on_change.run(DateRange::default())
            >
                "×"
            </button>
        </div>
    }
}
