use leptos::prelude::*;

/// Чекбокс выбора строки/карточки.
///
/// Клик на чекбокс не вызывает клик на строку (stop_propagation).
/// Состояние не хранит: `checked` вычисляется снаружи из списка выбора.
#[component]
pub fn SelectionCheckbox(
    /// Сигнал состояния чекбокса
    #[prop(into)]
    checked: Signal<bool>,
    /// Callback вызывается при клике
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <span
            class="collection__checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |_| on_toggle.run(())
            />
        </span>
    }
}
