pub mod filter;
pub mod pagination;
pub mod request;

pub use filter::{DateRange, DeletedVisibility, Filter, NumericRange, SortDirection, SortKey};
pub use pagination::{ApiEnvelope, ErrorEnvelope, ListResponse, PageMetadata};
pub use request::{BulkRequest, CollectionRequest, RequestFilters};
