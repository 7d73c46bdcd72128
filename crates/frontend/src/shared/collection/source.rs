use std::future::Future;
use std::pin::Pin;

use contracts::shared::{ApiEnvelope, ListResponse};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{check_envelope, ApiClient};
use crate::shared::errors::ApiError;

/// Object-safe boxed future used by [`CollectionSource`].
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Откуда коллекция берёт страницы.
///
/// Тело запроса уже собрано (`CollectionRequest` в JSON), источник только
/// доставляет его и разбирает ответ.
pub trait CollectionSource<T>: Send + Sync {
    fn fetch_page<'a>(
        &'a self,
        request: &'a serde_json::Value,
    ) -> SourceFuture<'a, Result<ListResponse<T>, ApiError>>;
}

/// Разобрать ответ коллекционного эндпоинта (страница или конверт ошибки)
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<ListResponse<T>, ApiError> {
    // непустой errorMessages важнее данных рядом с ним
    check_envelope(body)?;
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(ApiEnvelope::Page(page)) => Ok(page),
        Ok(ApiEnvelope::Error(envelope)) if envelope.error_messages.is_empty() => Err(
            ApiError::Application(vec!["Сервер вернул ошибку без описания".to_string()]),
        ),
        Ok(ApiEnvelope::Error(envelope)) => Err(ApiError::Application(envelope.error_messages)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// POST на коллекционный эндпоинт бэкенда
#[derive(Debug, Clone)]
pub struct HttpCollectionSource {
    client: ApiClient,
    path: String,
}

impl HttpCollectionSource {
    pub fn new(client: ApiClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

impl<T: DeserializeOwned + 'static> CollectionSource<T> for HttpCollectionSource {
    fn fetch_page<'a>(
        &'a self,
        request: &'a serde_json::Value,
    ) -> SourceFuture<'a, Result<ListResponse<T>, ApiError>> {
        Box::pin(async move {
            let body = self.client.post_json(&self.path, request).await?;
            decode_envelope(&body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page() {
        let body = r#"{"data":[{"id":1}],"meta":{"total":1,"from":1,"last_page":1,"current_page":1}}"#;
        let page: ListResponse<serde_json::Value> = decode_envelope(body).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.total, 1);
    }

    #[test]
    fn test_decode_error_envelope() {
        let err = decode_envelope::<i64>(r#"{"errorMessages":["Тариф истёк"]}"#).unwrap_err();
        assert_eq!(err, ApiError::Application(vec!["Тариф истёк".to_string()]));

        let err = decode_envelope::<i64>(r#"{"errorMessages":[]}"#).unwrap_err();
        assert_eq!(err.messages().len(), 1);
    }

    #[test]
    fn test_decode_page_with_error_field() {
        let body = r#"{"data":[1,2],"meta":{"total":2,"from":1,"last_page":1,"current_page":1},"errorMessages":[]}"#;
        let page = decode_envelope::<i64>(body).unwrap();
        assert_eq!(page.data, vec![1, 2]);

        let body = r#"{"data":[1],"meta":{"total":1,"from":1,"last_page":1,"current_page":1},"errorMessages":["Нет доступа"]}"#;
        assert_eq!(
            decode_envelope::<i64>(body).unwrap_err(),
            ApiError::Application(vec!["Нет доступа".to_string()])
        );
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_envelope::<i64>("<html>502</html>"),
            Err(ApiError::Decode(_))
        ));
    }
}
