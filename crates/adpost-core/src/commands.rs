// crates/adpost-core/src/commands.rs
//
// Every user action on the listing form is expressed as a FormCommand.
// Panels emit these; ListingForm::apply processes them after the UI pass,
// strictly in the order they were pushed.
// Adding a new field = add a variant here + one match arm in form.rs.

use uuid::Uuid;

use crate::attributes::AttributeField;
use crate::media_types::FileHandle;

#[derive(Debug, Clone)]
pub enum FormCommand {
    // ── Details ──────────────────────────────────────────────────────────────
    SetAttribute { field: AttributeField, value: String },
    SetTitle(String),
    SetDescription(String),

    // ── Price ────────────────────────────────────────────────────────────────
    /// Raw text as typed; the draft reformats it.
    SetPrice(String),

    // ── Photos ───────────────────────────────────────────────────────────────
    /// One batch per user action (dialog pick or OS file drop).
    AddPhotos(Vec<FileHandle>),
    RemovePhoto(Uuid),
    ReorderPhoto { from: usize, to: usize },
    DragStart(usize),
    /// Pointer is over another slot mid-drag. Commits a reorder.
    DragHover(usize),
    DragDrop,
    DragCancel,

    // ── Location ─────────────────────────────────────────────────────────────
    SelectState(String),
    SelectCity(String),
    SelectNeighborhood(String),

    // ── Review ───────────────────────────────────────────────────────────────
    SetName(String),
    SetPhone(String),
    /// Build the payload and hand it to whoever owns the network.
    Submit,
}
