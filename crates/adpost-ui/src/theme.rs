// crates/adpost-ui/src/theme.rs
use egui::{Color32, Context, RichText, Stroke, Style, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────
pub const ACCENT:        Color32 = Color32::from_rgb( 35, 229, 219);
pub const ACCENT_DIM:    Color32 = Color32::from_rgb( 20, 140, 134);
pub const ACCENT_HOVER:  Color32 = Color32::from_rgb(110, 240, 232);

pub const DARK_BG_0:     Color32 = Color32::from_rgb( 12,  18,  22);
pub const DARK_BG_1:     Color32 = Color32::from_rgb( 18,  26,  31);
pub const DARK_BG_2:     Color32 = Color32::from_rgb( 26,  36,  42);
pub const DARK_BG_3:     Color32 = Color32::from_rgb( 36,  48,  56);
pub const DARK_BG_4:     Color32 = Color32::from_rgb( 48,  62,  72);

pub const DARK_TEXT:     Color32 = Color32::from_rgb(226, 232, 236);
pub const DARK_TEXT_DIM: Color32 = Color32::from_rgb(128, 142, 152);
pub const DARK_BORDER:   Color32 = Color32::from_rgb( 58,  72,  82);

pub const COVER_BADGE:   Color32 = Color32::from_rgb(255, 206,  50);
pub const ERROR:         Color32 = Color32::from_rgb(230,  80,  70);
pub const SUCCESS:       Color32 = Color32::from_rgb( 70, 190, 110);

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    style.spacing.item_spacing     = egui::vec2(8.0, 6.0);
    style.spacing.window_margin    = egui::Margin::same(12);
    style.spacing.button_padding   = egui::vec2(12.0, 6.0);
    style.spacing.scroll.bar_width = 8.0;
    style.spacing.text_edit_width  = 360.0;

    let cr = egui::CornerRadius::same(4);

    let mut v = Visuals::dark();
    v.panel_fill             = DARK_BG_1;
    v.window_fill            = DARK_BG_2;
    v.faint_bg_color         = DARK_BG_0;
    v.extreme_bg_color       = DARK_BG_0;
    v.window_stroke          = Stroke::new(1.0, DARK_BORDER);
    v.selection.bg_fill      = ACCENT_DIM;
    v.selection.stroke       = Stroke::new(1.0, ACCENT);

    for (w, fill, stroke) in [
        (&mut v.widgets.noninteractive, DARK_BG_2, DARK_BORDER),
        (&mut v.widgets.inactive,       DARK_BG_3, DARK_BORDER),
        (&mut v.widgets.hovered,        DARK_BG_4, ACCENT_DIM),
        (&mut v.widgets.active,         ACCENT_DIM, ACCENT),
        (&mut v.widgets.open,           DARK_BG_4, ACCENT_DIM),
    ] {
        w.bg_fill       = fill;
        w.weak_bg_fill  = fill;
        w.bg_stroke     = Stroke::new(1.0, stroke);
        w.corner_radius = cr;
    }
    v.widgets.noninteractive.fg_stroke = Stroke::new(1.0, DARK_TEXT_DIM);
    v.widgets.inactive.fg_stroke       = Stroke::new(1.0, DARK_TEXT);
    v.widgets.hovered.fg_stroke        = Stroke::new(1.5, ACCENT_HOVER);
    v.widgets.active.fg_stroke         = Stroke::new(2.0, Color32::WHITE);
    v.widgets.open.fg_stroke           = Stroke::new(1.5, ACCENT_HOVER);

    v.override_text_color = Some(DARK_TEXT);

    ctx.set_visuals(v);
    ctx.set_style(style);

    ctx.style_mut(|s| {
        s.visuals.window_corner_radius = cr;
        s.visuals.menu_corner_radius   = cr;
    });
}

// ── Text helpers shared by the panels ────────────────────────────────────────

pub fn section_title(text: &str) -> RichText {
    RichText::new(text).size(15.0).strong().color(DARK_TEXT)
}

pub fn field_label(text: &str) -> RichText {
    RichText::new(text).size(12.0).color(DARK_TEXT_DIM)
}

pub fn hint(text: impl Into<String>) -> RichText {
    RichText::new(text).size(10.5).color(DARK_TEXT_DIM)
}

/// Section card around each form block.
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(DARK_BG_2)
        .stroke(Stroke::new(1.0, DARK_BORDER))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(14))
}
