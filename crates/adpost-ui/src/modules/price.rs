// crates/adpost-ui/src/modules/price.rs
//
// "Set a price". The field shows the grouped form the draft stores; every
// keystroke is sent raw and comes back reformatted next frame.

use egui::{RichText, Ui};

use adpost_core::commands::FormCommand;

use super::{text_field, Form, FormModule};
use crate::theme::{field_label, section_title, DARK_TEXT_DIM};

pub struct PriceModule;

impl FormModule for PriceModule {
    fn name(&self) -> &str { "Set a price" }

    fn ui(&mut self, ui: &mut Ui, form: &Form, cmd: &mut Vec<FormCommand>) {
        ui.label(section_title(self.name()));
        ui.add_space(6.0);
        ui.label(field_label("Price *"));
        ui.horizontal(|ui| {
            ui.label(RichText::new("₹").size(14.0).color(DARK_TEXT_DIM));
            text_field(ui, &form.draft().price, "0", None, cmd, FormCommand::SetPrice);
        });
    }
}
