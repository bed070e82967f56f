// crates/adpost-core/src/lib.rs
//
// No egui, no HTTP, no filesystem. Pure listing-form state plus the photo
// gallery state machine; adpost-media and adpost-ui sit on top.
//
// Data flow:
//   panel → FormCommand → ListingForm::apply → Gallery / DragSession / draft
//   Gallery → observer → channel → ListingForm::images

pub mod attributes;
pub mod commands;
pub mod drag;
pub mod error;
pub mod form;
pub mod gallery;
pub mod helpers;
pub mod location;
pub mod media_types;
pub mod preview;
pub mod state;

pub use commands::FormCommand;
pub use error::{FormError, GalleryError};
pub use form::{Effect, ListingForm};
pub use gallery::Gallery;
pub use media_types::{FileHandle, ItemView, MediaSnapshot, PreviewUri, Role};
pub use preview::{LocalPreviews, PreviewProvider};
pub use state::{ListingDraft, ListingPayload};
