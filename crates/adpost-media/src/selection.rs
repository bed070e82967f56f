// crates/adpost-media/src/selection.rs
//
// FileSelection: turns paths from the file dialog or an OS drop into raw
// FileHandles for the gallery.
//
// One batch per user action. Paths are read eagerly (previews need the
// bytes); unreadable files and files whose extension is not an accepted image
// type are skipped with a warning and never reach the store. `take()` empties the
// pending batch, so picking the very same file again later is a fresh add.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use adpost_core::media_types::FileHandle;

use crate::mime::{content_type, extension_of};

pub struct FileSelection {
    /// Lower-case extensions without the dot.
    accepted: Vec<String>,
    pending:  Vec<FileHandle>,
}

impl FileSelection {
    pub fn new<S: AsRef<str>>(accepted_extensions: &[S]) -> Self {
        Self {
            accepted: accepted_extensions
                .iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            pending: Vec::new(),
        }
    }

    /// Extensions for the dialog filter.
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    pub fn is_accepted(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.accepted.iter().any(|a| *a == ext))
    }

    /// Content type for an accepted name, `None` when the name is rejected.
    fn accepted_type(&self, path: &Path) -> Option<&'static str> {
        if self.is_accepted(path) { content_type(path) } else { None }
    }

    /// Read one file into a handle.
    pub fn read_file(&self, path: &Path) -> Result<FileHandle> {
        let Some(mime) = self.accepted_type(path) else {
            bail!("{} is not an accepted image type", path.display());
        };
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(FileHandle::new(name, mime, bytes))
    }

    /// Queue every readable image among `paths`. Returns how many were queued.
    pub fn push_paths<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut queued = 0;
        for path in paths {
            match self.read_file(&path) {
                Ok(file) => {
                    debug!("[select] {} ({}, {} bytes)", file.name, file.content_type, file.size());
                    self.pending.push(file);
                    queued += 1;
                }
                Err(e) => warn!("[select] skipped: {e:#}"),
            }
        }
        queued
    }

    /// Queue an already-loaded file (drops that carry bytes instead of a path).
    pub fn push_bytes(&mut self, name: &str, bytes: impl Into<std::sync::Arc<[u8]>>) -> bool {
        let Some(mime) = self.accepted_type(Path::new(name)) else {
            warn!("[select] skipped {name}: not an accepted image type");
            return false;
        };
        self.pending.push(FileHandle::new(name, mime, bytes));
        true
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Hand over the pending batch and reset.
    pub fn take(&mut self) -> Vec<FileHandle> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PNG: &[u8] = b"\x89PNG\r\n\x1A\n\x00\x00\x00\rIHDR";

    fn selection() -> FileSelection {
        FileSelection::new(&["jpg", "jpeg", ".PNG", "webp"])
    }

    #[test]
    fn reads_images_and_skips_the_rest() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("front.png");
        let txt = dir.path().join("notes.txt");
        let fake = dir.path().join("fake.jpg");
        fs::write(&png, PNG).unwrap();
        fs::write(&txt, b"hello").unwrap();
        fs::write(&fake, b"plain text").unwrap();

        let mut sel = selection();
        let queued = sel.push_paths(vec![
            png.clone(),
            txt,
            dir.path().join("missing.jpg"),
            fake,
        ]);
        // fake.jpg is accepted on its name alone; contents are not checked.
        assert_eq!(queued, 2);

        let batch = sel.take();
        assert_eq!(batch[0].name, "front.png");
        assert_eq!(batch[0].content_type, "image/png");
        assert_eq!(batch[0].size(), PNG.len());
        assert_eq!(batch[1].content_type, "image/jpeg");
    }

    #[test]
    fn take_resets_pending() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("a.png");
        fs::write(&png, PNG).unwrap();

        let mut sel = selection();
        sel.push_paths([png.clone()]);
        assert!(sel.has_pending());
        assert_eq!(sel.take().len(), 1);
        assert!(!sel.has_pending());
        assert!(sel.take().is_empty());

        // Same file again is a fresh batch.
        sel.push_paths([png]);
        assert_eq!(sel.take().len(), 1);
    }

    #[test]
    fn extensions_are_normalised() {
        let sel = selection();
        assert_eq!(sel.accepted(), &["jpg", "jpeg", "png", "webp"]);
        assert!(sel.is_accepted(Path::new("X.JPEG")));
        assert!(!sel.is_accepted(Path::new("x.gif")));
    }

    #[test]
    fn push_bytes_filters() {
        let mut sel = selection();
        assert!(sel.push_bytes("drop.png", PNG.to_vec()));
        assert!(!sel.push_bytes("drop.txt", b"abc".to_vec()));
        assert!(!sel.push_bytes("drop.gif", b"GIF89a".to_vec()));
        assert!(sel.push_bytes("drop.jpg", b"not really a jpeg".to_vec()));
        let batch = sel.take();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1].content_type, "image/jpeg");
    }
}
