// crates/adpost-ui/src/previews.rs
//
// TexturePreviews: the desktop PreviewProvider.
//
// `create` registers the file's bytes with egui under a unique `bytes://`
// uri; `egui::Image::new(uri)` then decodes and uploads it lazily through
// the image loaders installed at startup. `revoke` forgets the bytes and any
// texture decoded from them, so removed photos stop holding GPU memory.
//
// The uri carries an extension derived from the content type so the image
// loader picks the right decoder even for files named without one.

use std::collections::HashSet;

use egui::load::Bytes;
use tracing::{debug, warn};
use uuid::Uuid;

use adpost_core::media_types::{FileHandle, PreviewUri};
use adpost_core::preview::PreviewProvider;

pub struct TexturePreviews {
    ctx:  egui::Context,
    live: HashSet<PreviewUri>,
}

impl TexturePreviews {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, live: HashSet::new() }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl PreviewProvider for TexturePreviews {
    fn create(&mut self, file: &FileHandle) -> PreviewUri {
        let uri = PreviewUri::new(format!(
            "bytes://adpost/{}.{}",
            Uuid::new_v4(),
            extension_for(&file.content_type),
        ));
        self.ctx.include_bytes(uri.as_str().to_string(), Bytes::Shared(file.bytes.clone()));
        debug!("[preview] {} → {uri}", file.name);
        self.live.insert(uri.clone());
        uri
    }

    fn revoke(&mut self, uri: &PreviewUri) {
        if !self.live.remove(uri) {
            warn!("[preview] revoke of unknown {uri}");
            return;
        }
        self.ctx.forget_image(uri.as_str());
        debug!("[preview] revoked {uri}");
    }
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png"  => "png",
        "image/webp" => "webp",
        "image/gif"  => "gif",
        "image/bmp"  => "bmp",
        _            => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> FileHandle {
        FileHandle::new(name, mime, vec![0u8; 8])
    }

    #[test]
    fn create_and_revoke_pair_up() {
        let mut p = TexturePreviews::new(egui::Context::default());
        let a = p.create(&file("a.jpg", "image/jpeg"));
        let b = p.create(&file("a.jpg", "image/jpeg"));
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("bytes://adpost/"));
        assert!(a.as_str().ends_with(".jpg"));
        assert_eq!(p.live_count(), 2);

        p.revoke(&a);
        assert_eq!(p.live_count(), 1);
        // Second revoke is harmless.
        p.revoke(&a);
        assert_eq!(p.live_count(), 1);
    }

    #[test]
    fn uri_extension_follows_content_type() {
        let mut p = TexturePreviews::new(egui::Context::default());
        let uri = p.create(&file("scan", "image/png"));
        assert!(uri.as_str().ends_with(".png"));
    }
}
