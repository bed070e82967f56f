// crates/adpost-core/src/preview.rs
//
// Preview resource lifecycle.
//
// A PreviewProvider mints one revocable reference per accepted file and
// releases it again. The Gallery is the only caller: it creates on add and
// revokes on removal or teardown, so every create is paired with exactly one
// revoke.
//
// Implementations:
//   LocalPreviews   — here; in-memory `blob:` style registry. Headless use
//                     and tests.
//   TexturePreviews — adpost-ui; hands the bytes to egui under a `bytes://`
//                     uri and forgets the texture on revoke.

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::media_types::{FileHandle, PreviewUri};

/// Create/revoke pair for locally-scoped preview handles.
pub trait PreviewProvider {
    /// Mint a fresh handle for `file`. Two calls for the same file yield two
    /// distinct handles.
    fn create(&mut self, file: &FileHandle) -> PreviewUri;

    /// Release `uri`. Revoking an unknown or already-revoked handle must be
    /// harmless.
    fn revoke(&mut self, uri: &PreviewUri);
}

impl<P: PreviewProvider + ?Sized> PreviewProvider for Box<P> {
    fn create(&mut self, file: &FileHandle) -> PreviewUri {
        (**self).create(file)
    }

    fn revoke(&mut self, uri: &PreviewUri) {
        (**self).revoke(uri)
    }
}

// ── LocalPreviews ─────────────────────────────────────────────────────────────

/// In-process registry of live `blob:adpost/<uuid>` handles.
#[derive(Debug, Default)]
pub struct LocalPreviews {
    live: HashSet<PreviewUri>,
}

impl LocalPreviews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self, uri: &PreviewUri) -> bool {
        self.live.contains(uri)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl PreviewProvider for LocalPreviews {
    fn create(&mut self, file: &FileHandle) -> PreviewUri {
        let uri = PreviewUri::new(format!("blob:adpost/{}", Uuid::new_v4()));
        debug!("[preview] create {uri} ← {} ({} bytes)", file.name, file.size());
        self.live.insert(uri.clone());
        uri
    }

    fn revoke(&mut self, uri: &PreviewUri) {
        if self.live.remove(uri) {
            debug!("[preview] revoke {uri}");
        } else {
            warn!("[preview] revoke of unknown handle {uri} ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(name: &str) -> FileHandle {
        FileHandle::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF])
    }

    #[test]
    fn create_then_revoke() {
        let mut p = LocalPreviews::new();
        let uri = p.create(&jpeg("a.jpg"));
        assert!(uri.as_str().starts_with("blob:adpost/"));
        assert!(p.is_live(&uri));
        p.revoke(&uri);
        assert!(!p.is_live(&uri));
        assert_eq!(p.live_count(), 0);
    }

    #[test]
    fn same_file_twice_gives_two_handles() {
        let mut p = LocalPreviews::new();
        let f = jpeg("same.jpg");
        let a = p.create(&f);
        let b = p.create(&f);
        assert_ne!(a, b);
        assert_eq!(p.live_count(), 2);
    }

    #[test]
    fn double_revoke_is_harmless() {
        let mut p = LocalPreviews::new();
        let uri = p.create(&jpeg("a.jpg"));
        p.revoke(&uri);
        p.revoke(&uri);
        assert_eq!(p.live_count(), 0);
    }
}
