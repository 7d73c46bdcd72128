use contracts::shared::{DateRange, DeletedVisibility, SortKey};
use leptos::prelude::*;
use serde::Serialize;
use thaw::*;

use super::collection_view::CollectionView;
use super::date_range_input::DateRangeInput;
use super::filter_panel::FilterPanel;
use super::pagination_controls::PaginationControls;
use super::selection_bar::SelectionBar;
use super::view_mode_switch::{ViewMode, ViewModeSwitch};
use crate::config::AppConfig;
use crate::shared::collection::url_state::read_page_from_location;
use crate::shared::collection::{CollectionController, CollectionItem};
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, SearchInput};
use crate::shared::state::use_preferences;

/// Экран-коллекция: фильтры, пагинация, список/сетка, режим выбора.
///
/// Любое изменение фильтра перезагружает первую страницу; при открытии
/// берётся страница из адреса, если контроллер его зеркалит.
#[component]
pub fn CollectionScreen<T, S, X>(
    title: &'static str,
    controller: CollectionController<T, S, X>,
    render_item: fn(&T) -> AnyView,
    on_open: Callback<T>,
    /// Поля фильтра конкретной сущности
    #[prop(optional, into)]
    extra_filters: Option<ViewFn>,
    /// Над списком (крошки, кнопки экрана)
    #[prop(optional, into)]
    header: Option<ViewFn>,
    #[prop(default = true)] date_filters: bool,
) -> impl IntoView
where
    T: CollectionItem,
    S: SortKey,
    X: Clone + Serialize + Send + Sync + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let preferences = use_preferences();
    let grid_columns = preferences.grid_columns.clone();

    let mode = RwSignal::new(ViewMode::List);
    let expanded = RwSignal::new(false);
    let filter = controller.filter;
    let selection = controller.selection;
    let items = controller.fetcher.items_signal();
    let meta = controller.fetcher.meta_signal();
    let loading = controller.fetcher.loading_signal();

    let initial_page = if controller.mirrors_url() {
        read_page_from_location()
    } else {
        None
    };
    let ctrl = controller.clone();
    Effect::new(move |prev: Option<()>| {
        filter.with(|_| ());
        let page = match prev {
            None => initial_page.unwrap_or(1),
            Some(()) => 1,
        };
        ctrl.load_page(page);
    });

    let ctrl = controller.clone();
    let on_page_change = Callback::new(move |page: u64| ctrl.load_page(page));
    let ctrl = controller.clone();
    let on_page_size_change = Callback::new(move |size: u32| ctrl.change_page_size(size));
    let ctrl = controller.clone();
    let on_delete = Callback::new(move |_: ()| ctrl.bulk_delete());
    let ctrl = controller.clone();
    let on_reload = move |_| ctrl.reload();
    let ctrl = controller.clone();
    let on_show_more = move |_| ctrl.show_more();
    let on_columns_change = Callback::new(move |value: u32| grid_columns.set(value));

    let page_size = preferences.page_size.signal();
    let columns = preferences.grid_columns.signal();
    let page_size_options = config.ui.page_size_options.clone();
    let throttle_ms = config.ui.slider_throttle_ms;
    let debounce_ms = config.ui.search_debounce_ms;

    let active_count = Signal::derive(move || filter.with(|f| f.active_count()));
    let query = Signal::derive(move || filter.with(|f| f.query.clone()));
    let created = Signal::derive(move || filter.with(|f| f.created.clone()));
    let updated = Signal::derive(move || filter.with(|f| f.updated.clone()));

    let toolbar = move || {
        let page_size_options = page_size_options.clone();
        view! {
            <PaginationControls
                current_page=Signal::derive(move || meta.get().map(|m| m.current_page).unwrap_or(1))
                last_page=Signal::derive(move || meta.get().map(|m| m.last_page).unwrap_or(1))
                total_count=Signal::derive(move || meta.get().map(|m| m.total).unwrap_or(0))
                page_size=page_size
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
                page_size_options=page_size_options
                disabled=loading
            />
            <ViewModeSwitch
                mode=mode
                columns=columns
                on_columns_change=on_columns_change
                throttle_ms=throttle_ms
            />
            <SelectionBar selection=selection on_delete=on_delete />
        }
    };

    let filter_content = move || {
        let extra = extra_filters.clone();
        view! {
            <div class="filter-panel-content__row" style="display: flex; flex-wrap: wrap; gap: 12px; align-items: center;">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |q: String| filter.change_query(q))
                    delay_ms=debounce_ms
                />
                <div class="filter-field filter-field__sort">
                    <span>"Сортировка"</span>
                    {S::all().iter().map(|key| {
                        let key = *key;
                        let active = move || filter.with(|f| f.sort_by == key);
                        view! {
                            <button
                                class=move || if active() { "sort-chip sort-chip--active" } else { "sort-chip" }
                                title="Повторный клик меняет направление"
                                on:click=move |_| filter.toggle_sort(key)
                            >
                                {key.label()}
                                <Show when=active>
                                    " "{move || sort_indicator(filter.with(|f| f.sort_direction))}
                                </Show>
                            </button>
                        }
                    }).collect_view()}
                </div>
                <label class="filter-field">
                    <span>"Удалённые"</span>
                    <select
                        on:change=move |ev| {
                            if let Some(deleted) = DeletedVisibility::from_code(&event_target_value(&ev)) {
                                filter.change_deleted(deleted);
                            }
                        }
                        prop:value=move || filter.with(|f| f.deleted.code().to_string())
                    >
                        {DeletedVisibility::all().into_iter().map(|d| view! {
                            <option value=d.code()>{d.display_name()}</option>
                        }).collect_view()}
                    </select>
                </label>
            </div>
            <Show when=move || date_filters>
                <div class="filter-panel-content__row" style="display: flex; flex-wrap: wrap; gap: 12px;">
                    <DateRangeInput
                        label="Создано"
                        value=created
                        on_change=Callback::new(move |r: DateRange| filter.change_created_range(r))
                    />
                    <DateRangeInput
                        label="Изменено"
                        value=updated
                        on_change=Callback::new(move |r: DateRange| filter.change_updated_range(r))
                    />
                </div>
            </Show>
            {extra.map(|fields| view! {
                <div class="filter-panel-content__row" style="display: flex; flex-wrap: wrap; gap: 12px;">
                    {fields.run()}
                </div>
            })}
        }
    };

    view! {
        <div class="page collection-screen">
            <div class="page__header" style="display: flex; align-items: center; justify-content: space-between; gap: 12px;">
                <h1 class="page__title">{title}</h1>
                <Button appearance=ButtonAppearance::Secondary on_click=on_reload disabled=loading>
                    {icon("refresh")}
                    " Обновить"
                </Button>
            </div>
            {header.map(|header| header.run())}
            <FilterPanel
                is_expanded=expanded
                active_filters_count=active_count
                toolbar=toolbar
                filter_content=filter_content
            />
            <CollectionView
                items=items
                mode=mode
                columns=columns
                selection=selection
                on_open=on_open
                render_item=render_item
                loading=loading
            />
            <Show when=move || meta.get().map(|m| m.has_more()).unwrap_or(false)>
                <div class="collection__more" style="display: flex; justify-content: center; margin-top: 12px;">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_show_more.clone()
                        disabled=loading
                    >
                        "Показать ещё"
                    </Button>
                </div>
            </Show>
        </div>
    }
}
