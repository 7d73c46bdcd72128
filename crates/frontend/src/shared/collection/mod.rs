//! Серверная коллекция: запрос, применение ответа, пагинация, выбор.

pub mod controller;
pub mod fetcher;
pub mod source;
pub mod state;
pub mod url_state;

pub use controller::{use_collection_controller, CollectionController};
pub use fetcher::CollectionFetcher;
pub use source::{decode_envelope, CollectionSource, HttpCollectionSource, SourceFuture};
pub use state::{ApplyOutcome, CollectionState, LoadMode, LoadStatus, RequestTicket};

use crate::shared::state::SelectionEntry;

/// Элемент, который умеет показывать рендерер коллекции
pub trait CollectionItem: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;

    fn name(&self) -> String;

    fn parent_id(&self) -> Option<i64> {
        None
    }

    /// Меняется вместе с содержимым строки, входит в ключ рендера
    fn revision(&self) -> i64 {
        0
    }

    fn selection_entry(&self) -> SelectionEntry {
        SelectionEntry::new(self.id(), self.name(), self.parent_id())
    }
}
