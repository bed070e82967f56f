// crates/adpost-core/src/gallery.rs
//
// Gallery: the ordered photo collection behind the "Upload up to 12 photos"
// grid. Owns the items, the preview provider and the change observer.
//
// Invariants after every committed mutation:
//   • len() <= MAX_PHOTOS
//   • items[0] is Cover, every other item is Simple (no Cover when empty)
//   • ids are pairwise distinct and never handed out twice
//   • every live item holds one live preview; removed items' previews are revoked
//
// Every mutating call recomputes roles over the whole list (`retype`) and then
// notifies the observer with the full snapshot, in that order, before
// returning. Reorder with bad indices is the one exception: nothing was
// committed, so nothing is emitted.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::GalleryError;
use crate::helpers::capacity::{self, MAX_PHOTOS};
use crate::media_types::{FileHandle, MediaItem, MediaSnapshot, Role};
use crate::preview::PreviewProvider;

/// Change callback. Receives the full ordered list after each mutation.
pub type Observer = Box<dyn FnMut(&MediaSnapshot)>;

pub struct Gallery<P: PreviewProvider> {
    items:    Vec<MediaItem>,
    previews: P,
    observer: Option<Observer>,
}

impl<P: PreviewProvider> Gallery<P> {
    pub fn new(previews: P) -> Self {
        Self {
            items:    Vec::with_capacity(MAX_PHOTOS),
            previews,
            observer: None,
        }
    }

    /// Register the single upward observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(&MediaSnapshot) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Append as many of `files` as capacity allows, in order.
    ///
    /// Returns how many were dropped off the back of the batch. The observer
    /// fires exactly once, even when the whole batch was dropped.
    pub fn add_files(&mut self, files: &[FileHandle]) -> usize {
        let (accepted, dropped) = capacity::accept(files, self.items.len());

        for file in accepted {
            let preview = self.previews.create(file);
            let id      = self.fresh_id();
            debug!("[gallery] add {id} '{}' → {preview}", file.name);
            self.items.push(MediaItem {
                id,
                file: file.clone(),
                preview,
                role: Role::Simple,
            });
        }

        if dropped > 0 {
            info!("[gallery] {}", GalleryError::CapacityExceeded { dropped });
        }

        self.retype();
        self.emit();
        dropped
    }

    /// Remove the item with `id` and revoke its preview.
    ///
    /// An unknown id changes nothing and returns `MissingId`; the observer is
    /// still notified so every remove event produces exactly one emission.
    pub fn remove_item(&mut self, id: Uuid) -> Result<(), GalleryError> {
        let result = match self.index_of(id) {
            Some(idx) => {
                let item = self.items.remove(idx);
                self.previews.revoke(&item.preview);
                debug!("[gallery] removed {id} from slot {idx}");
                Ok(())
            }
            None => {
                debug!("[gallery] remove ignored, {id} not present");
                Err(GalleryError::MissingId(id))
            }
        };

        self.retype();
        self.emit();
        result
    }

    /// Move the item at `from` so it ends up at `to`; everything in between
    /// shifts by one.
    pub fn reorder_item(&mut self, from: usize, to: usize) -> Result<(), GalleryError> {
        let len = self.items.len();
        if from >= len || to >= len {
            let err = GalleryError::InvalidIndex { from, to, len };
            warn!("[gallery] {err}");
            return Err(err);
        }

        let moved = self.items.remove(from);
        self.items.insert(to, moved);
        debug!("[gallery] reorder {from} → {to}");

        self.retype();
        self.emit();
        Ok(())
    }

    /// Drop every item, revoking all previews. One emission (empty list).
    pub fn clear(&mut self) {
        self.revoke_all();
        self.emit();
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> MediaSnapshot {
        self.items.iter().map(MediaItem::view).collect()
    }

    /// Read-only access for the submission collaborator.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn remaining(&self) -> usize {
        capacity::remaining(self.items.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn cover(&self) -> Option<&MediaItem> {
        self.items.first()
    }

    pub fn previews(&self) -> &P {
        &self.previews
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    /// Single pass: slot 0 is the cover, the rest are simple.
    fn retype(&mut self) {
        for (idx, item) in self.items.iter_mut().enumerate() {
            item.role = Role::for_index(idx);
        }
    }

    fn emit(&mut self) {
        if self.observer.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.as_mut() {
            observer(&snapshot);
        }
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.contains(id) {
                return id;
            }
        }
    }

    fn revoke_all(&mut self) {
        for item in self.items.drain(..) {
            self.previews.revoke(&item.preview);
        }
    }
}

// Teardown: whatever is still attached gets its preview released.
impl<P: PreviewProvider> Drop for Gallery<P> {
    fn drop(&mut self) {
        if !self.items.is_empty() {
            debug!("[gallery] teardown, revoking {} preview(s)", self.items.len());
        }
        self.revoke_all();
    }
}
