use contracts::shared::NumericRange;
use leptos::prelude::*;

/// Поля "от/до" для суммы. Порядок границ не проверяется
#[component]
pub fn NumericRangeInput(
    label: &'static str,
    #[prop(into)] value: Signal<NumericRange>,
    on_change: Callback<NumericRange>,
) -> impl IntoView {
    view! {
        <div class="numeric-range-input" style="display: flex; align-items: center; gap: 6px;">
            <span>{label}</span>
            <input
                type="number"
                placeholder="от"
                style="width: 100px;"
                prop:value=move || value.with(|r| r.0.clone())
                on:change=move |ev| {
                    let max = value.with_untracked(|r| r.1.clone());
                    on_change.run(NumericRange::new(event_target_value(&ev), max));
                }
            />
            <input
                type="number"
                placeholder="до"
                style="width: 100px;"
                prop:value=move || value.with(|r| r.1.clone())
                on:change=move |ev| {
                    let min = value.with_untracked(|r| r.0.clone());
                    on_change.run(NumericRange::new(min, event_target_value(&ev)));
                }
            />
        </div>
    }
}
