// crates/adpost-ui/src/modules/review.rs
//
// "Review your details": seller name (30 chars, counter), phone, Post now.
// `posting` is set by the app before ui() each frame; the button is disabled
// while a submission is in flight.

use egui::{RichText, Ui};

use adpost_core::commands::FormCommand;
use adpost_core::helpers::text::{counter, NAME_MAX};

use super::{text_field, Form, FormModule};
use crate::theme::{field_label, hint, section_title, ACCENT, DARK_BG_0};

#[derive(Default)]
pub struct ReviewModule {
    pub posting: bool,
}

impl FormModule for ReviewModule {
    fn name(&self) -> &str { "Review your details" }

    fn ui(&mut self, ui: &mut Ui, form: &Form, cmd: &mut Vec<FormCommand>) {
        let draft = form.draft();

        ui.label(section_title(self.name()));
        ui.add_space(6.0);

        ui.label(field_label("Name"));
        text_field(ui, &draft.name, "Your name", Some(NAME_MAX), cmd, FormCommand::SetName);
        ui.label(hint(counter(&draft.name, NAME_MAX)));
        ui.add_space(6.0);

        ui.label(field_label("Mobile Phone Number *"));
        text_field(ui, &draft.phone, "+91", None, cmd, FormCommand::SetPhone);
        ui.add_space(12.0);

        let label = if self.posting { "Posting…" } else { "Post now" };
        let button = egui::Button::new(RichText::new(label).size(14.0).strong().color(DARK_BG_0))
            .fill(ACCENT)
            .min_size(egui::vec2(160.0, 36.0));
        if ui.add_enabled(!self.posting, button).clicked() {
            cmd.push(FormCommand::Submit);
        }
    }
}
