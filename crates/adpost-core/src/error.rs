// crates/adpost-core/src/error.rs
//
// Every anomaly in the core is non-fatal. These types exist so callers (and
// tests) can see *why* an event was absorbed; nothing here ever leaves the
// store or the form in a broken state.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// Batch overflowed the 12-photo cap. Reported as a count by
    /// `Gallery::add_files`; only used for logging.
    #[error("capacity exceeded, {dropped} file(s) dropped")]
    CapacityExceeded { dropped: usize },

    #[error("reorder {from} → {to} out of range for {len} item(s)")]
    InvalidIndex { from: usize, to: usize, len: usize },

    #[error("no media item with id {0}")]
    MissingId(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("'{value}' is not an option for {field}")]
    InvalidChoice { field: &'static str, value: String },

    #[error("unknown {level} '{value}'")]
    UnknownLocation { level: &'static str, value: String },

    #[error(transparent)]
    Gallery(#[from] GalleryError),
}
