// crates/adpost-media/src/mime.rs
//
// Content type for picked files, taken from the extension through
// `image::ImageFormat`. File contents are never inspected; a file that turns
// out not to decode simply shows an empty thumbnail.

use std::path::Path;

use image::ImageFormat;

/// Formats the egui image loaders are built to decode.
const SUPPORTED: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Gif,
    ImageFormat::Bmp,
];

/// MIME type implied by an extension (case-insensitive, no dot).
///
/// ```
/// use adpost_media::mime::mime_for_extension;
/// assert_eq!(mime_for_extension("JPG"), Some("image/jpeg"));
/// assert_eq!(mime_for_extension("pdf"), None);
/// ```
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    ImageFormat::from_extension(ext)
        .filter(|f| SUPPORTED.contains(f))
        .map(|f| f.to_mime_type())
}

/// Lower-cased extension of `path`, without the dot.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

pub fn content_type(path: &Path) -> Option<&'static str> {
    extension_of(path).as_deref().and_then(mime_for_extension)
}
