//! Состояние одной коллекции экрана.
//!
//! Каждый запрос получает возрастающий номер. Ответ применяется только если
//! его номер последний выданный, иначе отбрасывается целиком. Ошибка не
//! трогает элементы и метаданные: на экране остаются прежние данные.

use contracts::shared::{ListResponse, PageMetadata};

use crate::shared::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Обычная навигация: страница заменяет буфер
    Replace,
    /// "Показать ещё": страница дописывается в конец
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub id: u64,
    pub mode: LoadMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    Applied,
    Stale,
    Failed(ApiError),
}

#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    items: Vec<T>,
    meta: Option<PageMetadata>,
    status: LoadStatus,
    latest_request: u64,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: None,
            status: LoadStatus::Idle,
            latest_request: 0,
        }
    }
}

impl<T> CollectionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn meta(&self) -> Option<PageMetadata> {
        self.meta
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.id == self.latest_request
    }

    /// Выдать номер новому запросу; все ранее выданные становятся устаревшими
    pub fn begin(&mut self, mode: LoadMode) -> RequestTicket {
        self.latest_request += 1;
        self.status = LoadStatus::Loading;
        RequestTicket {
            id: self.latest_request,
            mode,
        }
    }

    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        result: Result<ListResponse<T>, ApiError>,
    ) -> ApplyOutcome {
        if !self.is_latest(ticket) {
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(page) => {
                match ticket.mode {
                    LoadMode::Replace => self.items = page.data,
                    LoadMode::Append => self.items.extend(page.data),
                }
                self.meta = Some(page.meta);
                self.status = LoadStatus::Loaded;
                ApplyOutcome::Applied
            }
            Err(e) => {
                self.status = LoadStatus::Failed;
                ApplyOutcome::Failed(e)
            }
        }
    }
}
