//! Связка состояния одного экрана-коллекции: фильтр, загрузчик,
//! размер страницы, режим выбора.

use std::sync::Arc;

use contracts::shared::{BulkRequest, CollectionRequest, SortKey};
use leptos::prelude::*;
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::fetcher::CollectionFetcher;
use super::source::{CollectionSource, HttpCollectionSource};
use super::state::{ApplyOutcome, LoadMode};
use super::url_state::write_page_to_location;
use super::CollectionItem;
use crate::config::AppConfig;
use crate::shared::api_utils::{api_base, check_envelope, ApiClient};
use crate::shared::errors::ApiError;
use crate::shared::notifications::{report_error, use_notifications, Notifier};
use crate::shared::state::{use_preferences, FilterStore, PreferenceStore, SelectionList};
use crate::system::auth::use_session;

pub struct CollectionController<T, S, X>
where
    T: CollectionItem,
    S: SortKey,
    X: Clone + Serialize + Send + Sync + 'static,
{
    pub filter: FilterStore<S, X>,
    pub fetcher: CollectionFetcher<T>,
    pub page_size: PreferenceStore,
    pub selection: SelectionList,
    client: ApiClient,
    path: String,
    mirror_url: bool,
}

impl<T, S, X> Clone for CollectionController<T, S, X>
where
    T: CollectionItem,
    S: SortKey,
    X: Clone + Serialize + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            filter: self.filter,
            fetcher: self.fetcher.clone(),
            page_size: self.page_size.clone(),
            selection: self.selection,
            client: self.client.clone(),
            path: self.path.clone(),
            mirror_url: self.mirror_url,
        }
    }
}

impl<T, S, X> CollectionController<T, S, X>
where
    T: CollectionItem,
    S: SortKey,
    X: Clone + Serialize + Send + Sync + 'static,
{
    pub fn new(
        filter: FilterStore<S, X>,
        source: Arc<dyn CollectionSource<T>>,
        notifier: Arc<dyn Notifier>,
        page_size: PreferenceStore,
        client: ApiClient,
        path: impl Into<String>,
    ) -> Self {
        Self {
            filter,
            fetcher: CollectionFetcher::new(source, notifier),
            page_size,
            selection: SelectionList::new(),
            client,
            path: path.into(),
            mirror_url: false,
        }
    }

    /// Номер страницы экрана дублируется в адресную строку
    pub fn with_url_mirror(mut self) -> Self {
        self.mirror_url = true;
        self
    }

    pub fn mirrors_url(&self) -> bool {
        self.mirror_url
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn notifier(&self) -> &dyn Notifier {
        self.fetcher.notifier()
    }

    /// Тело запроса из снимка фильтра; некорректный фильтр не уходит на сервер
    pub fn request(&self, page: u64) -> Result<serde_json::Value, ApiError> {
        let filter = self.filter.snapshot();
        let problems = filter.validate();
        if !problems.is_empty() {
            return Err(ApiError::Validation(problems));
        }
        let per_page = u64::from(self.page_size.get_untracked());
        let request = CollectionRequest::compose(self.client.tenant_id(), &filter, page, per_page);
        serde_json::to_value(&request)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))
    }

    pub async fn load(&self, page: u64, mode: LoadMode) -> ApplyOutcome {
        match self.request(page) {
            Ok(body) => self.fetcher.fetch(body, mode).await,
            Err(e) => {
                report_error(self.notifier(), &e);
                ApplyOutcome::Failed(e)
            }
        }
    }

    /// Перейти на страницу (замена буфера)
    pub fn load_page(&self, page: u64) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let outcome = this.load(page, LoadMode::Replace).await;
            if this.mirror_url && outcome == ApplyOutcome::Applied {
                write_page_to_location(page.max(1));
            }
        });
    }

    /// Следующая страница, если она есть
    pub fn next_page(&self) -> Option<u64> {
        self.fetcher
            .meta_untracked()
            .filter(|meta| meta.has_more())
            .map(|meta| meta.current_page + 1)
    }

    pub async fn load_more(&self) -> Option<ApplyOutcome> {
        let page = self.next_page()?;
        Some(self.load(page, LoadMode::Append).await)
    }

    /// "Показать ещё": дописать следующую страницу
    pub fn show_more(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let _ = this.load_more().await;
        });
    }

    /// Сменить размер страницы, оставив первую видимую запись на экране
    pub async fn resize(&self, new_size: u32) -> ApplyOutcome {
        let target = self
            .fetcher
            .meta_untracked()
            .map(|meta| meta.page_after_resize(u64::from(new_size)))
            .unwrap_or(1);
        self.page_size.set(new_size);
        self.load(target, LoadMode::Replace).await
    }

    pub fn change_page_size(&self, new_size: u32) {
        if new_size == 0 || new_size == self.page_size.get_untracked() {
            return;
        }
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let _ = this.resize(new_size).await;
        });
    }

    pub fn current_page(&self) -> u64 {
        self.fetcher
            .meta_untracked()
            .map(|meta| meta.current_page.max(1))
            .unwrap_or(1)
    }

    pub fn reload(&self) {
        self.load_page(self.current_page());
    }

    /// Удалить выбранные записи; возвращает их число
    pub async fn delete_selected(&self) -> Result<usize, ApiError> {
        let ids = self.selection.ids();
        if ids.is_empty() {
            return Err(ApiError::Validation(vec![
                "Не выбрано ни одной записи".to_string(),
            ]));
        }
        let count = ids.len();
        let body = BulkRequest {
            tenant_id: self.client.tenant_id(),
            ids,
        };
        let response = self
            .client
            .post_json(&format!("{}/bulk-delete", self.path), &body)
            .await?;
        check_envelope(&response)?;
        info!("Bulk delete on {}: {} records", self.path, count);
        Ok(count)
    }

    pub fn bulk_delete(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match this.delete_selected().await {
                Ok(count) => {
                    this.notifier()
                        .send_success(format!("Удалено записей: {}", count));
                    this.selection.exit();
                    let page = this.current_page();
                    let _ = this.load(page, LoadMode::Replace).await;
                }
                Err(e) => report_error(this.notifier(), &e),
            }
        });
    }
}

/// Контроллер экрана из контекста приложения (сессия, настройки, уведомления)
pub fn use_collection_controller<T, S, X>(
    path: &str,
    filter: FilterStore<S, X>,
) -> CollectionController<T, S, X>
where
    T: CollectionItem + DeserializeOwned,
    S: SortKey,
    X: Clone + Serialize + Send + Sync + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let session = use_session();
    let client = ApiClient::new(api_base(&config.api), &session);
    let source: Arc<dyn CollectionSource<T>> =
        Arc::new(HttpCollectionSource::new(client.clone(), path));
    let notifier: Arc<dyn Notifier> = Arc::new(use_notifications());
    let preferences = use_preferences();
    CollectionController::new(filter, source, notifier, preferences.page_size, client, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::fetcher::testing::{page, ScriptedSource};
    use crate::shared::notifications::testing::RecordingNotifier;
    use crate::shared::state::preference_store::PAGE_SIZE_KEY;
    use crate::shared::state::SelectionEntry;
    use crate::shared::storage::{KeyValueStorage, MemoryStorage};
    use crate::system::auth::Session;
    use contracts::domain::a001_customer::{Customer, CustomerFilterExtra, CustomerSortBy};
    use contracts::domain::common::RecordMetadata;
    use contracts::shared::{DateRange, ListResponse, PageMetadata};
    use futures::executor::block_on;

    type Controller = CollectionController<Customer, CustomerSortBy, CustomerFilterExtra>;

    fn customer(id: i64) -> Customer {
        Customer {
            id,
            name: format!("Клиент {}", id),
            phone: None,
            email: None,
            balance: 0.0,
            comment: None,
            metadata: RecordMetadata::default(),
        }
    }

    struct Fixture {
        controller: Controller,
        source: Arc<ScriptedSource<Customer>>,
        notifier: RecordingNotifier,
        storage: MemoryStorage,
    }

    fn fixture(page_size: &str) -> Fixture {
        let source = Arc::new(ScriptedSource::default());
        let notifier = RecordingNotifier::default();
        let storage = MemoryStorage::with_items([(PAGE_SIZE_KEY, page_size)]);
        let session = Session {
            tenant_id: 7,
            access_token: Some("token".to_string()),
        };
        let controller = CollectionController::new(
            FilterStore::with_defaults(),
            source.clone(),
            Arc::new(notifier.clone()),
            PreferenceStore::new(Arc::new(storage.clone()), PAGE_SIZE_KEY, 24),
            ApiClient::new("http://localhost:3000", &session),
            "/api/customers",
        );
        Fixture {
            controller,
            source,
            notifier,
            storage,
        }
    }

    #[test]
    fn test_request_uses_filter_and_page_size() {
        let f = fixture("10");
        f.controller.filter.change_query("ivanov");
        let body = f.controller.request(2).unwrap();
        assert_eq!(body["tenant_id"], 7);
        assert_eq!(body["page"], 2);
        assert_eq!(body["per_page"], 10);
        assert_eq!(body["query"], "ivanov");
        assert_eq!(body["sort_by"], "name");
    }

    #[test]
    fn test_invalid_filter_is_not_sent() {
        let f = fixture("10");
        f.controller
            .filter
            .change_created_range(DateRange::new("2024-13-45", "2024-01-01"));

        let outcome = block_on(f.controller.load(1, LoadMode::Replace));
        assert!(matches!(outcome, ApplyOutcome::Failed(ApiError::Validation(_))));
        assert!(f.source.requests().is_empty());
        assert_eq!(f.notifier.events().len(), 1);
    }

    #[test]
    fn test_resize_keeps_first_item_page() {
        let f = fixture("10");
        // страница 2 при размере 10: первая запись - 11-я
        f.source.reply(Ok(ListResponse {
            data: (11..=20).map(customer).collect(),
            meta: PageMetadata {
                total: 100,
                from: Some(11),
                last_page: 10,
                current_page: 2,
            },
        }));
        f.source.reply(Ok(page((1..=25).map(customer).collect(), 1, 4)));

        block_on(async {
            f.controller.load(2, LoadMode::Replace).await;
            f.controller.resize(25).await;
        });

        let requests = f.source.requests();
        assert_eq!(requests[1]["page"], 1);
        assert_eq!(requests[1]["per_page"], 25);
        assert_eq!(f.storage.get_item(PAGE_SIZE_KEY), Some("25".to_string()));
        assert_eq!(f.controller.fetcher.items_untracked().len(), 25);
    }

    #[test]
    fn test_load_more_appends_next_page() {
        let f = fixture("2");
        f.source.reply(Ok(page(vec![customer(1), customer(2)], 1, 2)));
        f.source.reply(Ok(page(vec![customer(3), customer(4)], 2, 2)));

        block_on(f.controller.load(1, LoadMode::Replace));
        assert_eq!(f.controller.next_page(), Some(2));
        let outcome = block_on(f.controller.load_more());
        assert_eq!(outcome, Some(ApplyOutcome::Applied));

        let ids: Vec<i64> = f
            .controller
            .fetcher
            .items_untracked()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(f.controller.next_page(), None);
        assert_eq!(block_on(f.controller.load_more()), None);
    }

    #[test]
    fn test_delete_requires_selection() {
        let f = fixture("10");
        let err = block_on(f.controller.delete_selected()).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        f.controller.selection.enter();
        f.controller
            .selection
            .toggle(SelectionEntry::new(1, "Клиент 1", None));
        assert_eq!(f.controller.selection.ids(), vec![1]);
    }
}
