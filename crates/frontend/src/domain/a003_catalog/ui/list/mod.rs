//! Каталог товаров и услуг: дерево категорий с крошками над списком позиций.

pub mod state;

use contracts::domain::a003_catalog::{CatalogItem, Category, CategoryFilterExtra, CategorySortBy};
use contracts::enums::CatalogKind;
use contracts::shared::NumericRange;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

use self::state::{create_filters, scope_to};
use crate::shared::collection::{use_collection_controller, CollectionController};
use crate::shared::components::ui::DeletedBadge;
use crate::shared::components::{
    BreadcrumbBar, CollectionScreen, CollectionView, NumericRangeInput, ViewMode,
};
use crate::shared::date_utils::format_money;
use crate::shared::details_page::use_open_details;
use crate::shared::icons::icon;
use crate::shared::state::{breadcrumbs, Crumb};

type CategoryController = CollectionController<Category, CategorySortBy, CategoryFilterExtra>;

fn catalog_card(item: &CatalogItem) -> AnyView {
    let details = match item.kind {
        CatalogKind::Product => match item.stock {
            Some(stock) => format!("Остаток: {}", stock),
            None => "Остаток не учитывается".to_string(),
        },
        CatalogKind::Service => match item.duration_minutes {
            Some(minutes) => format!("Длительность: {} мин", minutes),
            None => String::new(),
        },
    };
    let name = item.name.clone();
    let deleted = item.metadata.is_deleted();
    let sku = item.sku.clone().unwrap_or_default();
    let price = format_money(item.price);

    view! {
        <div class="card card--catalog">
            <div class="card__title">
                {name}
                " "
                <DeletedBadge deleted=deleted />
            </div>
            <div class="card__subtitle">{sku}</div>
            <div class="card__meta">
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {price}
                </Badge>
                <span>{details}</span>
            </div>
        </div>
    }
    .into_any()
}

fn category_card(category: &Category) -> AnyView {
    let name = category.name.clone();
    let counters = format!(
        "Подкатегорий: {} · Позиций: {}",
        category.children_count, category.items_count
    );
    view! {
        <div class="card card--category" style="display: flex; align-items: center; gap: 8px;">
            {icon("folder-closed")}
            <div>
                <div class="card__title">{name}</div>
                <div class="card__subtitle">{counters}</div>
            </div>
        </div>
    }
    .into_any()
}

/// Категории текущего уровня + крошки
#[component]
fn CategoryStrip(
    kind: CatalogKind,
    controller: CategoryController,
    trail: RwSignal<Vec<Crumb>>,
) -> impl IntoView {
    let filter = controller.filter;
    let ctrl = controller.clone();
    Effect::new(move |_| {
        filter.with(|_| ());
        ctrl.load_page(1);
    });

    let on_open = Callback::new(move |category: Category| {
        trail.update(|t| *t = breadcrumbs::push(t, Crumb::new(category.id, category.name)));
    });
    let on_select = Callback::new(move |id: Option<i64>| {
        trail.update(|t| *t = breadcrumbs::truncate_to(t, id));
    });

    let items = controller.fetcher.items_signal();
    let meta = controller.fetcher.meta_signal();
    let loading = controller.fetcher.loading_signal();
    let ctrl = controller.clone();
    let on_more = move |_| ctrl.show_more();

    view! {
        <div class="category-strip" style="margin-bottom: 12px;">
            <BreadcrumbBar trail=trail root_label=kind.display_name() on_select=on_select />
            <CollectionView
                items=items
                mode=ViewMode::Grid
                columns=4u32
                selection=controller.selection
                on_open=on_open
                render_item=category_card
                loading=loading
            />
            <Show when=move || meta.get().map(|m| m.has_more()).unwrap_or(false)>
                <button class="category-strip__more" on:click=on_more.clone()>
                    "Ещё категории"
                </button>
            </Show>
        </div>
    }
}

#[component]
pub fn CatalogBrowser(kind: CatalogKind) -> impl IntoView {
    let trail = RwSignal::new(Vec::<Crumb>::new());

    let (category_filter, filter) = create_filters();
    let categories = use_collection_controller(kind.categories_path(), category_filter);
    let controller = use_collection_controller(kind.items_path(), filter).with_url_mirror();

    // на старте оба фильтра уже в корне
    Effect::new(move |prev: Option<Option<i64>>| {
        let current = trail.with(|t| breadcrumbs::current(t));
        if prev.map_or(true, |p| p == current) {
            return current;
        }
        scope_to(&category_filter, &filter, current);
        current
    });

    let price = Signal::derive(move || filter.with(|f| f.extra.price.clone()));

    let header = move || {
        view! { <CategoryStrip kind=kind controller=categories.clone() trail=trail /> }
    };
    let extra_filters = move || {
        view! {
            <NumericRangeInput
                label="Цена"
                value=price
                on_change=Callback::new(move |r: NumericRange| filter.change_price_range(r))
            />
        }
    };

    view! {
        <CollectionScreen
            title=kind.display_name()
            controller=controller
            render_item=catalog_card
            on_open={use_open_details::<CatalogItem>(kind.code())}
            header=header
            extra_filters=extra_filters
        />
    }
}

/// `/catalog/:kind`
#[component]
pub fn CatalogPage() -> impl IntoView {
    let params = use_params_map();
    let kind = Memo::new(move |_| {
        params.with(|p| p.get("kind").and_then(|code| CatalogKind::from_code(&code)))
    });

    move || match kind.get() {
        Some(kind) => view! { <CatalogBrowser kind=kind /> }.into_any(),
        None => view! { <div class="page">"Раздел каталога не найден"</div> }.into_any(),
    }
}
