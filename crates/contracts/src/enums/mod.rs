pub mod catalog_kind;

pub use catalog_kind::CatalogKind;
