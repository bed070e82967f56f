// crates/adpost-media/src/lib.rs
//
// No egui dependency — talks to adpost-ui through plain calls and channels.
//
//   selection — paths / dropped bytes → FileHandle batches
//   mime      — content type from the file extension
//   submit    — background POST of the listing payload

pub mod mime;
pub mod selection;
pub mod submit;

// Re-export the main public API so adpost-ui imports are simple.
pub use selection::FileSelection;
pub use submit::{SubmitResult, Submitter};
