// crates/adpost-core/src/media_types.rs
//
// Types that flow between the photo store, the selection surface in
// adpost-media and the panels in adpost-ui.
// No egui, no filesystem — just plain data.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw file payload handed over by the selection surface.
///
/// The core never looks inside `bytes`; it only carries them so the preview
/// provider can mint a handle. Cloning is cheap (shared buffer).
#[derive(Clone)]
pub struct FileHandle {
    pub name:         String,
    /// MIME-style label, e.g. `image/jpeg`. Set by the selection surface.
    pub content_type: String,
    pub bytes:        Arc<[u8]>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name:         name.into(),
            content_type: content_type.into(),
            bytes:        bytes.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// File-name extension in lower case, if any.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        (!ext.is_empty()).then(|| ext.to_lowercase())
    }
}

// Bytes are elided — a 12 MB photo in a debug dump helps nobody.
impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.size())
            .finish()
    }
}

/// Locally-scoped, revocable reference to a file's preview.
///
/// Minted and revoked only by a `PreviewProvider`, and only on behalf of the
/// store. Everything else treats it as an opaque string to render.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewUri(String);

impl PreviewUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derived position role. Never assigned directly — see `Gallery::retype`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Cover,
    Simple,
}

impl Role {
    pub fn for_index(index: usize) -> Self {
        if index == 0 { Role::Cover } else { Role::Simple }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Cover  => "Cover",
            Role::Simple => "Simple",
        }
    }
}

/// One attached photo. Lives only inside a `Gallery`.
#[derive(Clone, Debug)]
pub struct MediaItem {
    pub id:      Uuid,
    pub file:    FileHandle,
    pub preview: PreviewUri,
    pub role:    Role,
}

impl MediaItem {
    pub fn view(&self) -> ItemView {
        ItemView {
            id:           self.id,
            preview_uri:  self.preview.clone(),
            role:         self.role,
            file_name:    self.file.name.clone(),
            content_type: self.file.content_type.clone(),
        }
    }
}

/// Snapshot entry handed upward to the form and into the submission payload.
/// Carries no file bytes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id:           Uuid,
    pub preview_uri:  PreviewUri,
    pub role:         Role,
    pub file_name:    String,
    pub content_type: String,
}

/// Full ordered list, cover first. Always the whole list, never a diff.
pub type MediaSnapshot = Vec<ItemView>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_cover_only_at_zero() {
        assert_eq!(Role::for_index(0), Role::Cover);
        assert_eq!(Role::for_index(1), Role::Simple);
        assert_eq!(Role::for_index(11), Role::Simple);
    }

    #[test]
    fn extension_is_lowercased() {
        let f = FileHandle::new("IMG_0042.JPG", "image/jpeg", vec![0u8; 4]);
        assert_eq!(f.extension().as_deref(), Some("jpg"));
        assert_eq!(FileHandle::new("noext", "", Vec::new()).extension(), None);
        assert_eq!(FileHandle::new("trailing.", "", Vec::new()).extension(), None);
    }

    #[test]
    fn debug_does_not_dump_bytes() {
        let f = FileHandle::new("a.png", "image/png", vec![7u8; 1024]);
        let dbg = format!("{f:?}");
        assert!(dbg.contains("size: 1024"));
        assert!(!dbg.contains("7, 7"));
    }

    #[test]
    fn item_view_serializes_camel_case() {
        let view = ItemView {
            id:           Uuid::nil(),
            preview_uri:  PreviewUri::new("blob:adpost/x"),
            role:         Role::Cover,
            file_name:    "a.png".into(),
            content_type: "image/png".into(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["previewUri"], "blob:adpost/x");
        assert_eq!(json["role"], "cover");
        assert_eq!(json["contentType"], "image/png");
    }
}
