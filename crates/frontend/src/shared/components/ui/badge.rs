use leptos::prelude::*;
use thaw::*;

/// Метка мягко удалённой записи
#[component]
pub fn DeletedBadge(#[prop(into)] deleted: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || deleted.get()>
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Удалено"</Badge>
        </Show>
    }
}

/// Цвет бейджа суммы по знаку
pub fn amount_color(value: f64) -> BadgeColor {
    if value < 0.0 {
        BadgeColor::Danger
    } else if value > 0.0 {
        BadgeColor::Success
    } else {
        BadgeColor::Subtle
    }
}

/// Сумма со знаком в цветном бейдже
#[component]
pub fn AmountBadge(value: f64) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=amount_color(value)>
            {crate::shared::date_utils::format_money(value)}
        </Badge>
    }
}
