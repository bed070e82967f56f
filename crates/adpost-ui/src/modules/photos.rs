// crates/adpost-ui/src/modules/photos.rs
//
// "Upload up to 12 photos": the photo grid.
//
// Each card's thumbnail is a drag handle with a stable id derived from the
// item id, so egui keeps tracking the drag while the card moves. While a drag
// session is live, the pointer resting on any other card emits DragHover for
// that slot; the store reorders immediately and the card under the pointer is
// the dragged one again next frame. Releasing emits DragDrop, Escape emits
// DragCancel (the order reached so far is kept).
//
// The "Add Photo" tile opens a multi-select dialog and is hidden once the
// gallery is full. Files are read here (FileSelection) so the store only
// ever sees readable images.

use egui::{Color32, Id, LayerId, Order, Rect, RichText, Sense, Stroke, Ui};
use rfd::FileDialog;

use adpost_core::commands::FormCommand;
use adpost_core::helpers::capacity::MAX_PHOTOS;
use adpost_core::media_types::{ItemView, Role};
use adpost_media::FileSelection;

use super::{Form, FormModule};
use crate::helpers::format::{file_size, fit_file_name};
use crate::theme::{
    hint, section_title, ACCENT, COVER_BADGE, DARK_BG_0, DARK_BG_2, DARK_BG_3, DARK_BG_4,
    DARK_BORDER, DARK_TEXT_DIM, ERROR,
};

const CARD_W: f32 = 112.0;
const THUMB:  egui::Vec2 = egui::vec2(112.0, 84.0);

pub struct PhotosModule {
    selection: FileSelection,
}

impl PhotosModule {
    pub fn new(accepted_extensions: &[String]) -> Self {
        Self { selection: FileSelection::new(accepted_extensions) }
    }

    fn pick_files(&mut self, cmd: &mut Vec<FormCommand>) {
        let Some(paths) = FileDialog::new()
            .add_filter("Images", self.selection.accepted())
            .pick_files()
        else {
            return;
        };
        self.selection.push_paths(paths);
        let batch = self.selection.take();
        if !batch.is_empty() {
            cmd.push(FormCommand::AddPhotos(batch));
        }
    }
}

impl FormModule for PhotosModule {
    fn name(&self) -> &str { "Upload up to 12 photos" }

    fn ui(&mut self, ui: &mut Ui, form: &Form, cmd: &mut Vec<FormCommand>) {
        let images   = form.images();
        let dragging = form.drag().is_dragging();

        // ── Drag bookkeeping ─────────────────────────────────────────────────
        if dragging && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            cmd.push(FormCommand::DragCancel);
        }
        // Pointer released somewhere egui didn't report a drag stop for us
        // (e.g. outside the window).
        if dragging && ui.ctx().dragged_id().is_none() {
            cmd.push(FormCommand::DragDrop);
        }

        ui.horizontal(|ui| {
            ui.label(section_title(self.name()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(hint(format!("{} / {MAX_PHOTOS}", images.len())));
            });
        });
        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

            for (index, item) in images.iter().enumerate() {
                photo_card(ui, form, index, item, cmd);
            }

            if !form.gallery().is_full() {
                let tile = egui::Button::new(
                    RichText::new("＋\nAdd Photo").size(12.0).color(DARK_TEXT_DIM),
                )
                .fill(DARK_BG_2)
                .stroke(Stroke::new(1.0, DARK_BORDER))
                .min_size(egui::vec2(CARD_W + 8.0, THUMB.y + 30.0));
                if ui.add(tile).clicked() {
                    self.pick_files(cmd);
                }
            }
        });

        ui.add_space(4.0);
        if images.is_empty() {
            ui.label(RichText::new("At least one photo is required").size(11.0).color(ERROR));
        } else {
            ui.label(hint("Drag to reorder. The first photo is the cover. Esc cancels a drag."));
        }
    }
}

fn photo_card(ui: &mut Ui, form: &Form, index: usize, item: &ItemView, cmd: &mut Vec<FormCommand>) {
    let item_id   = Id::new("photo").with(item.id);
    let is_source = form.drag().source() == Some(index);
    let is_cover  = item.role == Role::Cover;

    let border = if is_source { ACCENT } else if is_cover { COVER_BADGE } else { DARK_BORDER };
    let fill   = if is_source { DARK_BG_4 } else { DARK_BG_3 };

    let mut thumb_rect = Rect::NOTHING;
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(if is_source || is_cover { 1.5 } else { 1.0 }, border))
        .corner_radius(egui::CornerRadius::same(5))
        .inner_margin(egui::Margin::same(4))
        .show(ui, |ui| {
            ui.set_width(CARD_W);
            ui.vertical(|ui| {
                let (rect, _) = ui.allocate_exact_size(THUMB, Sense::hover());
                ui.painter().rect_filled(rect, 3.0, DARK_BG_0);
                egui::Image::new(item.preview_uri.as_str())
                    .fit_to_exact_size(THUMB)
                    .corner_radius(egui::CornerRadius::same(3))
                    .paint_at(ui, rect);
                thumb_rect = rect;

                if is_cover {
                    let badge = Rect::from_min_size(rect.left_top() + egui::vec2(4.0, 4.0), egui::vec2(44.0, 16.0));
                    ui.painter().rect_filled(badge, 3.0, COVER_BADGE);
                    ui.painter().text(
                        badge.center(),
                        egui::Align2::CENTER_CENTER,
                        Role::Cover.label().to_uppercase(),
                        egui::FontId::proportional(9.5),
                        DARK_BG_0,
                    );
                }

                ui.horizontal(|ui| {
                    ui.label(RichText::new(fit_file_name(&item.file_name, CARD_W - 28.0)).size(10.0).color(DARK_TEXT_DIM));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").on_hover_text("Remove photo").clicked() {
                            cmd.push(FormCommand::RemovePhoto(item.id));
                        }
                    });
                });
            });
        });

    // ── Interact ─────────────────────────────────────────────────────────────
    let mut interact = ui.interact(thumb_rect, item_id, Sense::click_and_drag());
    if let Some(stored) = form.gallery().items().get(index) {
        interact = interact.on_hover_text(format!("{} · {}", item.file_name, file_size(stored.file.size())));
    }

    if interact.drag_started() {
        cmd.push(FormCommand::DragStart(index));
    }
    if interact.drag_stopped() {
        cmd.push(FormCommand::DragDrop);
    }
    if interact.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if interact.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    // Live reorder: pointer over another card while a session is running.
    if form.drag().is_dragging() && !is_source {
        if let Some(ptr) = ui.ctx().pointer_interact_pos() {
            if thumb_rect.contains(ptr) {
                cmd.push(FormCommand::DragHover(index));
            }
        }
    }

    // ── Drag ghost ───────────────────────────────────────────────────────────
    if ui.ctx().is_being_dragged(item_id) {
        if let Some(ptr) = ui.ctx().pointer_interact_pos() {
            let ghost_rect  = Rect::from_center_size(ptr, THUMB * 0.6);
            let ghost_layer = LayerId::new(Order::Tooltip, Id::new("photo_drag_ghost"));
            let gp = ui.ctx().layer_painter(ghost_layer);
            gp.rect_filled(ghost_rect, egui::CornerRadius::same(4),
                Color32::from_rgba_unmultiplied(20, 140, 134, 150));
            gp.rect_stroke(ghost_rect, egui::CornerRadius::same(4),
                Stroke::new(1.5, ACCENT), egui::StrokeKind::Outside);
            gp.text(ghost_rect.center(), egui::Align2::CENTER_CENTER,
                fit_file_name(&item.file_name, ghost_rect.width()),
                egui::FontId::proportional(10.0), Color32::WHITE);
        }
    }
}
