// crates/adpost-ui/src/modules/details.rs
//
// "Include some details": property attributes, ad title, description.
// Choice attributes render as button rows, Facing as a combo box, the rest
// as free-text fields. Title and description show live "n / max" counters.

use egui::{RichText, Ui};

use adpost_core::attributes::{AttributeField, ALL_FIELDS};
use adpost_core::commands::FormCommand;
use adpost_core::helpers::text::{counter, DESCRIPTION_MAX, TITLE_MAX};
use adpost_core::state::CATEGORY;

use super::{text_field, Form, FormModule};
use crate::theme::{field_label, hint, section_title, ACCENT, DARK_TEXT_DIM};

pub struct DetailsModule;

impl FormModule for DetailsModule {
    fn name(&self) -> &str { "Include some details" }

    fn ui(&mut self, ui: &mut Ui, form: &Form, cmd: &mut Vec<FormCommand>) {
        let draft = form.draft();

        ui.label(section_title("Selected category"));
        ui.label(RichText::new(CATEGORY).size(12.0).color(DARK_TEXT_DIM));
        ui.add_space(10.0);
        ui.label(section_title(self.name()));
        ui.add_space(6.0);

        for &field in ALL_FIELDS {
            ui.label(field_label(field.label()));
            let current = draft.property.get(field);
            match field.options() {
                Some(options) if field.is_dropdown() => {
                    let shown = if current.is_empty() { "Select…" } else { current };
                    egui::ComboBox::from_id_salt(("attr", field.key()))
                        .selected_text(shown)
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for &opt in options {
                                if ui.selectable_label(current == opt, opt).clicked() {
                                    cmd.push(FormCommand::SetAttribute { field, value: opt.into() });
                                }
                            }
                        });
                }
                Some(options) => {
                    ui.horizontal_wrapped(|ui| {
                        for &opt in options {
                            let selected = current == opt;
                            if ui.selectable_label(selected, opt).clicked() {
                                // Clicking the active option again clears it.
                                let value = if selected { String::new() } else { opt.to_string() };
                                cmd.push(FormCommand::SetAttribute { field, value });
                            }
                        }
                    });
                }
                None => {
                    text_field(ui, current, "", None, cmd, |value| {
                        FormCommand::SetAttribute { field, value }
                    });
                }
            }
            ui.add_space(6.0);
        }

        ui.separator();

        // ── Title ────────────────────────────────────────────────────────────
        ui.label(field_label("Ad title *"));
        text_field(ui, &draft.title, "", Some(TITLE_MAX), cmd, FormCommand::SetTitle);
        ui.horizontal(|ui| {
            ui.label(hint("Mention the key features of your item (e.g. brand, model, age, type)"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(hint(counter(&draft.title, TITLE_MAX)));
            });
        });
        ui.add_space(6.0);

        // ── Description ──────────────────────────────────────────────────────
        ui.label(field_label("Description *"));
        let mut desc = draft.description.clone();
        let resp = ui.add(
            egui::TextEdit::multiline(&mut desc)
                .desired_rows(5)
                .desired_width(f32::INFINITY)
                .char_limit(DESCRIPTION_MAX),
        );
        if resp.changed() {
            cmd.push(FormCommand::SetDescription(desc));
        }
        ui.horizontal(|ui| {
            ui.label(hint("Include condition, features and reason for selling"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(hint(counter(&draft.description, DESCRIPTION_MAX)));
            });
        });

        if !draft.property.is_set(AttributeField::Type) {
            ui.label(RichText::new("Pick a property type").size(10.5).color(ACCENT));
        }
    }
}
