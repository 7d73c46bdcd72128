//! Конфигурация консоли.
//!
//! Порядок поиска: `/config.toml` рядом с приложением (тот же origin),
//! иначе встроенная конфигурация по умолчанию.

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Полный адрес API. Пустая строка - тот же хост, что и у консоли, на `port`
    pub base_url: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
    pub grid_columns: u32,
    pub search_debounce_ms: u32,
    pub slider_throttle_ms: u32,
    pub toast_duration_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: 24,
            page_size_options: vec![12, 24, 48, 96],
            grid_columns: 3,
            search_debounce_ms: 400,
            slider_throttle_ms: 150,
            toast_duration_ms: 4000,
        }
    }
}

impl UiConfig {
    /// Нулевой размер страницы или число колонок заменяется значением по умолчанию
    fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if self.page_size == 0 {
            warn!("ui.page_size = 0, using {}", defaults.page_size);
            self.page_size = defaults.page_size;
        }
        if self.grid_columns == 0 {
            warn!("ui.grid_columns = 0, using {}", defaults.grid_columns);
            self.grid_columns = defaults.grid_columns;
        }
        self.page_size_options.retain(|size| *size > 0);
        if self.page_size_options.is_empty() {
            self.page_size_options = defaults.page_size_options;
        }
        self
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[ui]
page_size = 24
page_size_options = [12, 24, 48, 96]
grid_columns = 3
search_debounce_ms = 400
slider_throttle_ms = 150
toast_duration_ms = 4000
"#;

pub fn parse_config(raw: &str) -> Result<AppConfig, toml::de::Error> {
    let config: AppConfig = toml::from_str(raw)?;
    Ok(AppConfig {
        ui: config.ui.normalized(),
        ..config
    })
}

pub fn default_config() -> AppConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

/// Load configuration for the running console
pub async fn load_config() -> AppConfig {
    let response = gloo_net::http::Request::get("/config.toml").send().await;
    match response {
        Ok(resp) if resp.ok() => match resp.text().await {
            Ok(text) => match parse_config(&text) {
                Ok(config) => {
                    info!("Loading config from /config.toml");
                    return config;
                }
                Err(e) => warn!("config.toml is invalid, falling back to defaults: {}", e),
            },
            Err(e) => warn!("Failed to read config.toml: {}", e),
        },
        Ok(resp) => info!("config.toml not found (HTTP {})", resp.status()),
        Err(e) => warn!("Failed to request config.toml: {}", e),
    }

    info!("Using default embedded configuration");
    default_config()
}
