// crates/adpost-ui/src/helpers/format.rs
//
// UI-layer string utilities that don't belong in adpost-core.
//
// Price grouping and input caps live in adpost_core::helpers. This module
// only holds what is purely about rendering strings inside the panels.

/// Photo-card caption for `name` within `max_px`. Long names lose the end
/// of the stem, not the extension: `living_room_wide.jpg` → `living_r….jpg`.
/// Width is estimated at 6.5 px per char since egui text measurement needs
/// `&mut Fonts`.
pub fn fit_file_name(name: &str, max_px: f32) -> String {
    const AVG_CHAR_PX: f32 = 6.5;
    let budget = (max_px / AVG_CHAR_PX).max(0.0) as usize;
    let total  = name.chars().count();
    if total <= budget {
        return name.to_string();
    }
    if budget == 0 {
        return String::new();
    }

    // ".jpg" stays whole when at least two stem chars fit before it.
    let ext = match name.rfind('.') {
        Some(dot) if dot > 0 => &name[dot..],
        _                    => "",
    };
    let ext_len = ext.chars().count();
    let (stem_chars, tail) = if !ext.is_empty() && ext_len + 3 <= budget {
        (budget - ext_len - 1, ext)
    } else {
        (budget - 1, "")
    };
    let mut out: String = name.chars().take(stem_chars).collect();
    out.push('…');
    out.push_str(tail);
    out
}

/// Human-readable byte size: `"512 B"`, `"48.2 KB"`, `"3.1 MB"`.
pub fn file_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

/// "Required: title, price" style hint. Empty when nothing is missing.
pub fn missing_hint(missing: &[&str]) -> String {
    if missing.is_empty() {
        return String::new();
    }
    format!("Still empty: {}", missing.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_unchanged() {
        assert_eq!(fit_file_name("front.jpg", 200.0), "front.jpg");
    }

    #[test]
    fn zero_width_gives_empty_caption() {
        assert_eq!(fit_file_name("front.jpg", 0.0), "");
    }

    #[test]
    fn long_name_keeps_extension() {
        // 60 px ≈ 9 chars: 4 of stem, ellipsis, ".jpg"
        let caption = fit_file_name("living_room_wide_angle.jpg", 60.0);
        assert_eq!(caption, "livi….jpg");
        assert_eq!(caption.chars().count(), 9);
    }

    #[test]
    fn long_extension_falls_back_to_plain_cut() {
        // 26 px ≈ 4 chars, no room for ".jpeg" plus stem
        assert_eq!(fit_file_name("kitchen.jpeg", 26.0), "kit…");
        assert_eq!(fit_file_name("no_extension_here", 26.0), "no_…");
    }

    #[test]
    fn sizes() {
        assert_eq!(file_size(512), "512 B");
        assert_eq!(file_size(2048), "2.0 KB");
        assert_eq!(file_size(3 * 1024 * 1024 + 100 * 1024), "3.1 MB");
        assert_eq!(file_size(0), "0 B");
    }

    #[test]
    fn hint_lists_fields() {
        assert_eq!(missing_hint(&[]), "");
        assert_eq!(missing_hint(&["title", "phone"]), "Still empty: title, phone");
    }
}
