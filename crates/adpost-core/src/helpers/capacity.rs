// crates/adpost-core/src/helpers/capacity.rs
//
// The 12-photo cap. Pure functions, no state of their own — consulted by
// Gallery::add_files before any preview is minted.

/// Hard ceiling on attached photos per listing.
pub const MAX_PHOTOS: usize = 12;

/// Free slots left when the collection already holds `current_len` items.
///
/// ```
/// use adpost_core::helpers::capacity::remaining;
/// assert_eq!(remaining(0),  12);
/// assert_eq!(remaining(9),  3);
/// assert_eq!(remaining(12), 0);
/// assert_eq!(remaining(40), 0);
/// ```
pub fn remaining(current_len: usize) -> usize {
    MAX_PHOTOS.saturating_sub(current_len)
}

/// Split an incoming batch into the accepted prefix and the dropped count.
///
/// Order is preserved; overflow is always trimmed from the back of `files`.
///
/// ```
/// use adpost_core::helpers::capacity::accept;
/// let batch = [1, 2, 3, 4];
/// let (kept, dropped) = accept(&batch, 10);
/// assert_eq!(kept, &[1, 2]);
/// assert_eq!(dropped, 2);
/// ```
pub fn accept<T>(files: &[T], current_len: usize) -> (&[T], usize) {
    let take = remaining(current_len).min(files.len());
    (&files[..take], files.len() - take)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_drops_nothing() {
        let (kept, dropped) = accept::<u8>(&[], 12);
        assert!(kept.is_empty());
        assert_eq!(dropped, 0);
    }

    #[test]
    fn oversize_batch_into_empty() {
        let batch: Vec<u32> = (0..20).collect();
        let (kept, dropped) = accept(&batch, 0);
        assert_eq!(kept.len(), MAX_PHOTOS);
        assert_eq!(kept[0], 0);
        assert_eq!(kept[11], 11);
        assert_eq!(dropped, 8);
    }

    #[test]
    fn full_collection_drops_everything() {
        let (kept, dropped) = accept(&["a", "b"], MAX_PHOTOS);
        assert!(kept.is_empty());
        assert_eq!(dropped, 2);
    }
}
