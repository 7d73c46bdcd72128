//! Номер страницы экрана в строке адреса (`?page=N`).

use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListQueryState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

/// Разобрать `location.search`; мусор и `page=0` считаются отсутствием страницы
pub fn parse_list_query(search: &str) -> ListQueryState {
    let state: ListQueryState =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    ListQueryState {
        page: state.page.filter(|page| *page > 0),
    }
}

/// Строка запроса для страницы; первая страница не пишется
pub fn page_query(page: u64) -> String {
    if page <= 1 {
        return String::new();
    }
    let query = serde_qs::to_string(&ListQueryState { page: Some(page) }).unwrap_or_default();
    format!("?{}", query)
}

pub fn read_page_from_location() -> Option<u64> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_list_query(&search).page
}

pub fn write_page_to_location(page: u64) {
    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    let current_search = location.search().unwrap_or_default();
    let new_search = page_query(page);
    // Only update URL if it actually changed
    if current_search == new_search {
        return;
    }
    let path = location.pathname().unwrap_or_default();
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{}{}", path, new_search)),
        );
    }
}
