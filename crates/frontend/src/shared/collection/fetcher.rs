use std::sync::Arc;

use contracts::shared::PageMetadata;
use leptos::prelude::*;
use log::debug;

use super::source::CollectionSource;
use super::state::{ApplyOutcome, CollectionState, LoadMode, LoadStatus};
use crate::shared::notifications::{report_error, Notifier};

/// Загрузчик страниц одной коллекции.
///
/// Ошибки уходят в канал уведомлений, устаревшие ответы молча отбрасываются.
pub struct CollectionFetcher<T>
where
    T: Send + Sync + 'static,
{
    state: RwSignal<CollectionState<T>>,
    source: Arc<dyn CollectionSource<T>>,
    notifier: Arc<dyn Notifier>,
}

impl<T> Clone for CollectionFetcher<T>
where
    T: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            source: Arc::clone(&self.source),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<T> CollectionFetcher<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(source: Arc<dyn CollectionSource<T>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: RwSignal::new(CollectionState::new()),
            source,
            notifier,
        }
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub async fn fetch(&self, request: serde_json::Value, mode: LoadMode) -> ApplyOutcome {
        let Some(ticket) = self.state.try_update(|s| s.begin(mode)) else {
            return ApplyOutcome::Stale;
        };
        debug!("Collection request #{} ({:?}): {}", ticket.id, mode, request);

        let result = self.source.fetch_page(&request).await;

        let is_latest = self
            .state
            .try_with_untracked(|s| s.is_latest(ticket))
            .unwrap_or(false);
        if !is_latest {
            debug!("Collection response #{} is stale, dropped", ticket.id);
            return ApplyOutcome::Stale;
        }

        let outcome = self
            .state
            .try_update(|s| s.apply(ticket, result))
            .unwrap_or(ApplyOutcome::Stale);
        match &outcome {
            ApplyOutcome::Applied => debug!("Collection response #{} applied", ticket.id),
            ApplyOutcome::Failed(e) => report_error(self.notifier.as_ref(), e),
            ApplyOutcome::Stale => {}
        }
        outcome
    }

    pub fn items_signal(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items().to_vec()))
    }

    pub fn meta_signal(&self) -> Signal<Option<PageMetadata>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.meta()))
    }

    pub fn loading_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.status() == LoadStatus::Loading))
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn items_untracked(&self) -> Vec<T> {
        self.state.with_untracked(|s| s.items().to_vec())
    }

    pub fn meta(&self) -> Option<PageMetadata> {
        self.state.with(|s| s.meta())
    }

    pub fn meta_untracked(&self) -> Option<PageMetadata> {
        self.state.with_untracked(|s| s.meta())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::shared::collection::source::SourceFuture;
    use crate::shared::errors::ApiError;
    use contracts::shared::ListResponse;
    use futures::channel::oneshot;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    type Reply<T> = Result<ListResponse<T>, ApiError>;

    /// Источник с заранее заданными ответами, по одному на запрос
    pub struct ScriptedSource<T> {
        replies: Mutex<VecDeque<oneshot::Receiver<Reply<T>>>>,
        requests: Mutex<Vec<serde_json::Value>>,
    }

    impl<T> Default for ScriptedSource<T> {
        fn default() -> Self {
            Self {
                replies: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl<T: Send> ScriptedSource<T> {
        /// Ответ, готовый сразу
        pub fn reply(&self, reply: Reply<T>) {
            let (tx, rx) = oneshot::channel();
            let _ = tx.send(reply);
            self.replies.lock().unwrap().push_back(rx);
        }

        /// Ответ, который тест отдаст позже через sender
        pub fn deferred(&self) -> oneshot::Sender<Reply<T>> {
            let (tx, rx) = oneshot::channel();
            self.replies.lock().unwrap().push_back(rx);
            tx
        }

        pub fn requests(&self) -> Vec<serde_json::Value> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl<T: Send + 'static> CollectionSource<T> for ScriptedSource<T> {
        fn fetch_page<'a>(
            &'a self,
            request: &'a serde_json::Value,
        ) -> SourceFuture<'a, Reply<T>> {
            self.requests.lock().unwrap().push(request.clone());
            let next = self.replies.lock().unwrap().pop_front();
            Box::pin(async move {
                match next {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(ApiError::Network("canceled".to_string()))),
                    None => Err(ApiError::Network("no scripted reply".to_string())),
                }
            })
        }
    }

    pub fn page<T>(data: Vec<T>, current_page: u64, last_page: u64) -> ListResponse<T> {
        let len = data.len() as u64;
        ListResponse {
            data,
            meta: PageMetadata {
                total: len * last_page,
                from: if len == 0 {
                    None
                } else {
                    Some((current_page - 1) * len + 1)
                },
                last_page,
                current_page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{page, ScriptedSource};
    use super::*;
    use crate::shared::errors::ApiError;
    use crate::shared::notifications::testing::RecordingNotifier;
    use crate::shared::notifications::ToastKind;
    use futures::executor::block_on;

    fn fetcher(
        source: &Arc<ScriptedSource<i64>>,
        notifier: &RecordingNotifier,
    ) -> CollectionFetcher<i64> {
        CollectionFetcher::new(source.clone(), Arc::new(notifier.clone()))
    }

    #[test]
    fn test_replace_then_append() {
        let source = Arc::new(ScriptedSource::default());
        let notifier = RecordingNotifier::default();
        let fetcher = fetcher(&source, &notifier);

        source.reply(Ok(page(vec![1, 2, 3], 1, 3)));
        source.reply(Ok(page(vec![4, 5, 6], 2, 3)));
        source.reply(Ok(page(vec![7, 8, 9], 3, 3)));

        block_on(async {
            fetcher.fetch(serde_json::json!({"page": 1}), LoadMode::Replace).await;
            fetcher.fetch(serde_json::json!({"page": 2}), LoadMode::Append).await;
        });
        assert_eq!(fetcher.items_untracked(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(fetcher.meta_untracked().map(|m| m.has_more()), Some(true));

        block_on(fetcher.fetch(serde_json::json!({"page": 3}), LoadMode::Replace));
        assert_eq!(fetcher.items_untracked(), vec![7, 8, 9]);
        assert_eq!(source.requests().len(), 3);
        assert!(notifier.events().is_empty());
    }

    #[test]
    fn test_failure_notifies_and_keeps_items() {
        let source = Arc::new(ScriptedSource::default());
        let notifier = RecordingNotifier::default();
        let fetcher = fetcher(&source, &notifier);

        source.reply(Ok(page(vec![1, 2], 1, 2)));
        source.reply(Err(ApiError::Application(vec!["Нет доступа".to_string()])));

        block_on(fetcher.fetch(serde_json::json!({}), LoadMode::Replace));
        let outcome = block_on(fetcher.fetch(serde_json::json!({}), LoadMode::Append));

        assert!(matches!(outcome, ApplyOutcome::Failed(_)));
        assert_eq!(fetcher.items_untracked(), vec![1, 2]);
        assert_eq!(fetcher.meta_untracked().map(|m| m.current_page), Some(1));
        assert_eq!(
            notifier.events(),
            vec![(ToastKind::Error, vec!["Нет доступа".to_string()])]
        );
    }

    #[test]
    fn test_out_of_order_response_is_dropped() {
        let source = Arc::new(ScriptedSource::default());
        let notifier = RecordingNotifier::default();
        let fetcher = fetcher(&source, &notifier);

        let slow = source.deferred();
        let fast = source.deferred();

        let (older, newer, _) = block_on(futures::future::join3(
            fetcher.fetch(serde_json::json!({"query": "iv"}), LoadMode::Replace),
            fetcher.fetch(serde_json::json!({"query": "ivanov"}), LoadMode::Replace),
            async {
                let _ = fast.send(Ok(page(vec![20], 1, 1)));
                let _ = slow.send(Err(ApiError::Http(500)));
            },
        ));

        assert_eq!(older, ApplyOutcome::Stale);
        assert_eq!(newer, ApplyOutcome::Applied);
        assert_eq!(fetcher.items_untracked(), vec![20]);
        assert_eq!(
            fetcher.state.with_untracked(|s| s.status()),
            LoadStatus::Loaded
        );
        assert!(notifier.events().is_empty());
    }
}
