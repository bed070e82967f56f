// crates/adpost-core/src/form.rs
//
// ListingForm: the owning form section. Holds the draft, the photo gallery,
// the drag session and the last snapshot the gallery reported.
//
// The gallery's observer forwards each snapshot over a channel; `apply`
// drains it after every command so `images()` always reflects the last
// committed mutation before the next command runs. Nothing here blocks and
// nothing here spawns — all work happens inside `apply`.
//
// Anomalies (bad indices, unknown ids, options that don't exist) are logged
// and absorbed. `apply` never fails.

use crossbeam_channel::{unbounded, Receiver};
use tracing::{debug, info, warn};

use crate::commands::FormCommand;
use crate::drag::DragSession;
use crate::error::FormError;
use crate::gallery::Gallery;
use crate::media_types::MediaSnapshot;
use crate::preview::PreviewProvider;
use crate::state::{ListingDraft, ListingPayload};

/// What the caller has to act on after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Photos that did not fit under the cap. Not surfaced to the user.
    PhotosDropped(usize),
    Submit(ListingPayload),
}

pub struct ListingForm<P: PreviewProvider> {
    draft:    ListingDraft,
    gallery:  Gallery<P>,
    drag:     DragSession,
    images:   MediaSnapshot,
    media_rx: Receiver<MediaSnapshot>,
}

impl<P: PreviewProvider> ListingForm<P> {
    pub fn new(previews: P, seller_name: &str) -> Self {
        let (tx, media_rx) = unbounded();
        let mut gallery = Gallery::new(previews);
        gallery.set_observer(move |snapshot: &MediaSnapshot| {
            let _ = tx.send(snapshot.clone());
        });

        Self {
            draft: ListingDraft::with_seller(seller_name),
            gallery,
            drag: DragSession::new(),
            images: MediaSnapshot::new(),
            media_rx,
        }
    }

    pub fn apply(&mut self, cmd: FormCommand) -> Effect {
        let effect = match self.dispatch(cmd) {
            Ok(effect) => effect,
            Err(e) => {
                warn!("[form] {e}");
                Effect::None
            }
        };
        self.ingest_media_changes();
        effect
    }

    fn dispatch(&mut self, cmd: FormCommand) -> Result<Effect, FormError> {
        match cmd {
            // ── Details ──────────────────────────────────────────────────────
            FormCommand::SetAttribute { field, value } => {
                self.draft.property.set(field, value)?;
            }
            FormCommand::SetTitle(title) => {
                self.draft.set_title(&title);
            }
            FormCommand::SetDescription(text) => {
                self.draft.set_description(&text);
            }

            // ── Price ────────────────────────────────────────────────────────
            FormCommand::SetPrice(raw) => {
                self.draft.set_price(&raw);
            }

            // ── Photos ───────────────────────────────────────────────────────
            FormCommand::AddPhotos(files) => {
                let dropped = self.gallery.add_files(&files);
                if dropped > 0 {
                    return Ok(Effect::PhotosDropped(dropped));
                }
            }
            FormCommand::RemovePhoto(id) => {
                self.gallery.remove_item(id)?;
            }
            FormCommand::ReorderPhoto { from, to } => {
                self.gallery.reorder_item(from, to)?;
            }
            FormCommand::DragStart(index) => {
                self.drag.drag_start(index);
            }
            FormCommand::DragHover(index) => {
                self.drag.hover(&mut self.gallery, index);
            }
            FormCommand::DragDrop => {
                self.drag.release();
            }
            FormCommand::DragCancel => {
                self.drag.cancel();
            }

            // ── Location ─────────────────────────────────────────────────────
            FormCommand::SelectState(state) => {
                self.draft.location.select_state(&state)?;
            }
            FormCommand::SelectCity(city) => {
                self.draft.location.select_city(&city)?;
            }
            FormCommand::SelectNeighborhood(hood) => {
                self.draft.location.select_neighborhood(&hood)?;
            }

            // ── Review ───────────────────────────────────────────────────────
            FormCommand::SetName(name) => {
                self.draft.set_name(&name);
            }
            FormCommand::SetPhone(phone) => {
                self.draft.set_phone(&phone);
            }
            FormCommand::Submit => {
                let missing = self.draft.missing_fields(self.images.len());
                if !missing.is_empty() {
                    info!("[form] submitting with empty fields: {}", missing.join(", "));
                }
                return Ok(Effect::Submit(self.payload()));
            }
        }
        Ok(Effect::None)
    }

    /// Pull every snapshot the gallery emitted since the last call. The last
    /// one wins — each is the full list.
    fn ingest_media_changes(&mut self) {
        while let Ok(snapshot) = self.media_rx.try_recv() {
            debug!("[form] media changed, {} photo(s)", snapshot.len());
            self.images = snapshot;
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    /// Photos as last reported by the gallery's observer.
    pub fn images(&self) -> &MediaSnapshot {
        &self.images
    }

    pub fn gallery(&self) -> &Gallery<P> {
        &self.gallery
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn payload(&self) -> ListingPayload {
        self.draft.payload(&self.images)
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.draft.missing_fields(self.images.len())
    }
}
