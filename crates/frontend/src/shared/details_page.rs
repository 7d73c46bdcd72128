//! Карточка записи: `GET {path}/{id}`, поля в виде таблицы ключ/значение.

use contracts::enums::CatalogKind;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use log::debug;

use super::api_utils::{api_base, check_envelope, ApiClient};
use super::collection::CollectionItem;
use super::errors::ApiError;
use super::notifications::{report_error, use_notifications, Notifier};
use crate::config::AppConfig;
use crate::system::auth::use_session;

/// Раздел маршрута -> путь API
pub fn section_path(section: &str) -> Option<&'static str> {
    match section {
        "customers" => Some("/api/customers"),
        "workers" => Some("/api/workers"),
        "orders" => Some("/api/orders"),
        "transactions" => Some("/api/transactions"),
        "notifications" => Some("/api/notifications"),
        "audit" => Some("/api/audit-log"),
        other => CatalogKind::from_code(other).map(|kind| kind.items_path()),
    }
}

/// Поля записи в порядке ответа; вложенные объекты - через точку
pub fn flatten_fields(value: &serde_json::Value) -> Vec<(String, String)> {
    let record = match value.get("data") {
        Some(data) if data.is_object() => data,
        _ => value,
    };
    let mut fields = Vec::new();
    collect_fields("", record, &mut fields);
    fields
}

fn collect_fields(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, nested) in map {
                let name = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_fields(&name, nested, out);
            }
        }
        serde_json::Value::Null => out.push((prefix.to_string(), "—".to_string())),
        serde_json::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

/// Переход на карточку записи раздела
pub fn use_open_details<T: CollectionItem>(section: &'static str) -> Callback<T> {
    let navigate = StoredValue::new(use_navigate());
    Callback::new(move |item: T| {
        let url = format!("/details/{}/{}", section, item.id());
        navigate.with_value(|nav| nav(&url, Default::default()));
    })
}

async fn fetch_record(client: &ApiClient, path: &str, id: &str) -> Result<serde_json::Value, ApiError> {
    let body = client.get(&format!("{}/{}", path, id)).await?;
    check_envelope(&body)?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[component]
pub fn DetailsPage() -> impl IntoView {
    let params = use_params_map();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = ApiClient::new(api_base(&config.api), &use_session());
    let notifications = use_notifications();

    let fields = RwSignal::new(Vec::<(String, String)>::new());
    let loading = RwSignal::new(false);

    Effect::new(move |_| {
        let section = params.with(|p| p.get("section").unwrap_or_default());
        let id = params.with(|p| p.get("id").unwrap_or_default());
        let Some(path) = section_path(&section) else {
            notifications.send_error(format!("Неизвестный раздел: {}", section));
            return;
        };
        let client = client.clone();
        loading.set(true);
        leptos::task::spawn_local(async move {
            debug!("Loading record {}/{}", path, id);
            match fetch_record(&client, path, &id).await {
                Ok(value) => fields.set(flatten_fields(&value)),
                Err(e) => report_error(&notifications, &e),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="page details-page">
            <div class="page__header">
                <h1 class="page__title">
                    {move || format!("Запись #{}", params.with(|p| p.get("id").unwrap_or_default()))}
                </h1>
            </div>
            <div class="page__content">
                <Show when=move || loading.get()>
                    <div class="details-page__loading">"Загрузка..."</div>
                </Show>
                <table class="table details-page__table">
                    <tbody>
                        <For
                            each=move || fields.get()
                            key=|(name, _)| name.clone()
                            children=|(name, value)| view! {
                                <tr>
                                    <th class="table__cell">{name}</th>
                                    <td class="table__cell">{value}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_path() {
        assert_eq!(section_path("customers"), Some("/api/customers"));
        assert_eq!(section_path("services"), Some("/api/services"));
        assert_eq!(section_path("unknown"), None);
    }

    #[test]
    fn test_flatten_fields() {
        let value = serde_json::json!({
            "data": {
                "id": 3,
                "name": "Иванов",
                "email": null,
                "address": {"city": "Казань"}
            }
        });
        let fields = flatten_fields(&value);
        assert!(fields.contains(&("id".to_string(), "3".to_string())));
        assert!(fields.contains(&("name".to_string(), "Иванов".to_string())));
        assert!(fields.contains(&("email".to_string(), "—".to_string())));
        assert!(fields.contains(&("address.city".to_string(), "Казань".to_string())));
    }
}
