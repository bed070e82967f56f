// crates/adpost-ui/src/modules/mod.rs
//
// Module registry. To add a new form section:
//   1. Create modules/mysection.rs implementing FormModule
//   2. Add `pub mod mysection;` below
//   3. Add a field + one `show_section` call in app.rs

pub mod details;
pub mod location;
pub mod photos;
pub mod price;
pub mod review;

use adpost_core::commands::FormCommand;
use adpost_core::form::ListingForm;
use egui::Ui;

use crate::previews::TexturePreviews;

/// The form as the desktop app instantiates it.
pub type Form = ListingForm<TexturePreviews>;

/// Every form section implements this trait.
/// Modules read the form, emit commands — they never mutate it directly.
pub trait FormModule {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut Ui, form: &Form, cmd: &mut Vec<FormCommand>);
}

/// Single-line text field bound to a form value. Pushes `make(new_text)`
/// when the user edits it; the form stays the source of truth.
pub(crate) fn text_field(
    ui:        &mut Ui,
    current:   &str,
    hint:      &str,
    max_chars: Option<usize>,
    cmd:       &mut Vec<FormCommand>,
    make:      impl FnOnce(String) -> FormCommand,
) -> egui::Response {
    let mut buf = current.to_string();
    let mut edit = egui::TextEdit::singleline(&mut buf)
        .desired_width(f32::INFINITY)
        .hint_text(hint);
    if let Some(max) = max_chars {
        edit = edit.char_limit(max);
    }
    let resp = ui.add(edit);
    if resp.changed() {
        cmd.push(make(buf));
    }
    resp
}
