use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::state::SelectionList;

/// Панель режима выбора: вход/выход, счётчик, групповое удаление
#[component]
pub fn SelectionBar(selection: SelectionList, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <div class="selection-bar" style="display: inline-flex; align-items: center; gap: 8px;">
            <Show
                when=move || selection.is_active()
                fallback=move || view! {
                    <button class="selection-bar__btn" title="Выбрать записи" on:click=move |_| selection.enter()>
                        {icon("check-square")}
                        <span>"Выбрать"</span>
                    </button>
                }
            >
                <span class="selection-bar__count">{move || format!("Выбрано: {}", selection.len())}</span>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_delete.run(())
                    disabled=Signal::derive(move || selection.is_empty())
                >
                    {icon("trash")}
                    " Удалить"
                </Button>
                <button class="selection-bar__btn" on:click=move |_| selection.exit()>
                    "Отмена"
                </button>
            </Show>
        </div>
    }
}
