//! API utilities for frontend-backend communication
//!
//! Builds API URLs and sends JSON requests with the session credentials.

use contracts::shared::ErrorEnvelope;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;

use super::errors::ApiError;
use crate::config::ApiConfig;
use crate::system::auth::Session;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured, otherwise the current window host
/// on `api.port`.
pub fn api_base(config: &ApiConfig) -> String {
    if !config.base_url.is_empty() {
        return config.base_url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// Map a non-2xx response body to an error.
///
/// The backend sometimes sends its error envelope with a 4xx status, prefer it when present.
pub fn error_for_status(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthenticated;
    }
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error_messages.is_empty() => {
            ApiError::Application(envelope.error_messages)
        }
        _ => ApiError::Http(status),
    }
}

/// Credentials + base URL; everything a request needs besides its body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    auth_header: Option<String>,
    tenant_id: i64,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: &Session) -> Self {
        Self {
            base_url: base_url.into(),
            auth_header: session.auth_header(),
            tenant_id: session.tenant_id,
        }
    }

    pub fn tenant_id(&self) -> i64 {
        self.tenant_id
    }

    /// Build a full API URL from a path ("/api/...")
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.auth_header {
            Some(header) => builder.header("Authorization", header),
            None => builder,
        }
    }

    /// POST JSON, return the raw 2xx body
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await
    }

    /// GET, return the raw 2xx body
    pub async fn get(&self, path: &str) -> Result<String, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !(200..300).contains(&status) {
        return Err(error_for_status(status, &text));
    }
    Ok(text)
}

/// Разобрать тело 2xx ответа, учитывая конверт ошибки с HTTP 200
pub fn check_envelope(body: &str) -> Result<(), ApiError> {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error_messages.is_empty() => {
            Err(ApiError::Application(envelope.error_messages))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status_prefers_envelope() {
        assert_eq!(
            error_for_status(422, r#"{"errorMessages":["Неверный телефон"]}"#),
            ApiError::Application(vec!["Неверный телефон".to_string()])
        );
        assert_eq!(error_for_status(500, "<html>"), ApiError::Http(500));
        assert_eq!(error_for_status(401, ""), ApiError::Unauthenticated);
    }

    #[test]
    fn test_configured_base_url_is_used_verbatim() {
        let config = ApiConfig {
            base_url: "https://crm.example.com/".to_string(),
            port: 3000,
        };
        assert_eq!(api_base(&config), "https://crm.example.com");
    }

    #[test]
    fn test_client_url_and_tenant() {
        let session = Session {
            tenant_id: 42,
            access_token: Some("t".to_string()),
        };
        let client = ApiClient::new("http://localhost:3000", &session);
        assert_eq!(client.url("/api/customers"), "http://localhost:3000/api/customers");
        assert_eq!(client.tenant_id(), 42);
    }

    #[test]
    fn test_check_envelope() {
        assert!(check_envelope(r#"{"ok":true}"#).is_ok());
        assert!(check_envelope("").is_ok());
        assert!(check_envelope(r#"{"errorMessages":["x"]}"#).is_err());
    }
}
