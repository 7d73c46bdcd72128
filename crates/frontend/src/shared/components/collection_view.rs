use leptos::prelude::*;

use super::table_checkbox::SelectionCheckbox;
use super::view_mode_switch::ViewMode;
use crate::shared::collection::CollectionItem;
use crate::shared::state::SelectionList;

/// Стиль контейнера для режима отображения
pub fn container_style(mode: ViewMode, columns: u32) -> String {
    match mode {
        ViewMode::List => "display: flex; flex-direction: column; gap: 6px;".to_string(),
        ViewMode::Grid => format!(
            "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: 12px;",
            columns.max(1)
        ),
    }
}

/// Список или сетка элементов коллекции.
///
/// Сам ничего не хранит: отметка выбора вычисляется из `selection`,
/// клик по строке в режиме выбора переключает её, иначе уходит в `on_open`.
#[component]
pub fn CollectionView<T>(
    #[prop(into)] items: Signal<Vec<T>>,
    #[prop(into)] mode: Signal<ViewMode>,
    #[prop(into)] columns: Signal<u32>,
    selection: SelectionList,
    on_open: Callback<T>,
    render_item: fn(&T) -> AnyView,
    #[prop(optional, into)] loading: Signal<bool>,
) -> impl IntoView
where
    T: CollectionItem,
{
    view! {
        <div class="collection" style:opacity=move || if loading.get() { "0.6" } else { "1" }>
            <Show when=move || items.with(|list| list.is_empty()) && !loading.get()>
                <div class="collection__empty">"Нет записей"</div>
            </Show>
            <div
                class=move || match mode.get() {
                    ViewMode::List => "collection__list",
                    ViewMode::Grid => "collection__grid",
                }
                style=move || container_style(mode.get(), columns.get())
            >
                <For
                    each=move || items.get().into_iter().enumerate()
                    key=|(index, item)| (*index, item.id(), item.revision())
                    children=move |(_, item)| {
                        let id = item.id();
                        let entry = item.selection_entry();
                        let checked = Signal::derive(move || selection.contains(id));
                        let on_toggle = Callback::new(move |_: ()| selection.toggle(entry.clone()));
                        let body = render_item(&item);
                        view! {
                            <div
                                class=move || {
                                    if checked.get() {
                                        "collection__item collection__item--selected"
                                    } else {
                                        "collection__item"
                                    }
                                }
                                style="display: flex; align-items: center; gap: 8px; cursor: pointer;"
                                on:click=move |_| {
                                    if selection.is_active_untracked() {
                                        on_toggle.run(());
                                    } else {
                                        on_open.run(item.clone());
                                    }
                                }
                            >
                                <span style:display=move || if selection.is_active() { "inline-flex" } else { "none" }>
                                    <SelectionCheckbox checked=checked on_toggle=on_toggle />
                                </span>
                                <div class="collection__body" style="flex: 1; min-width: 0;">
                                    {body}
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_style() {
        assert!(container_style(ViewMode::List, 4).contains("flex-direction: column"));
        assert!(container_style(ViewMode::Grid, 4).contains("repeat(4,"));
        assert!(container_style(ViewMode::Grid, 0).contains("repeat(1,"));
    }
}
