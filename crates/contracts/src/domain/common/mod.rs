//! Common types for all collection entities

pub mod record_metadata;

pub use record_metadata::RecordMetadata;
