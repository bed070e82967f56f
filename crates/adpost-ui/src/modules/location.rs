// crates/adpost-ui/src/modules/location.rs
//
// "Confirm your location": three cascading combo boxes. A level stays
// disabled until its parent is chosen; picking a parent clears the children
// (handled by LocationSelection, the combos just reflect it next frame).

use egui::Ui;

use adpost_core::commands::FormCommand;
use adpost_core::location::{cities, neighborhoods, states};

use super::{Form, FormModule};
use crate::theme::{field_label, section_title};

pub struct LocationModule;

impl FormModule for LocationModule {
    fn name(&self) -> &str { "Confirm your location" }

    fn ui(&mut self, ui: &mut Ui, form: &Form, cmd: &mut Vec<FormCommand>) {
        let loc = &form.draft().location;

        ui.label(section_title(self.name()));
        ui.add_space(6.0);

        ui.label(field_label("State *"));
        if let Some(v) = combo(ui, "loc_state", &loc.state, states(), true) {
            cmd.push(FormCommand::SelectState(v));
        }
        ui.add_space(6.0);

        ui.label(field_label("City *"));
        if let Some(v) = combo(ui, "loc_city", &loc.city, cities(&loc.state), !loc.state.is_empty()) {
            cmd.push(FormCommand::SelectCity(v));
        }
        ui.add_space(6.0);

        ui.label(field_label("Neighbourhood *"));
        let hoods = neighborhoods(&loc.state, &loc.city);
        if let Some(v) = combo(ui, "loc_hood", &loc.neighborhood, hoods, !loc.city.is_empty()) {
            cmd.push(FormCommand::SelectNeighborhood(v));
        }
    }
}

/// Returns the newly picked option, if any.
fn combo<'a>(
    ui:       &mut Ui,
    salt:     &str,
    current:  &str,
    options:  impl Iterator<Item = &'a str>,
    enabled:  bool,
) -> Option<String> {
    let mut picked = None;
    let shown = if current.is_empty() { "Select…" } else { current };
    ui.add_enabled_ui(enabled, |ui| {
        egui::ComboBox::from_id_salt(salt)
            .selected_text(shown)
            .width(260.0)
            .show_ui(ui, |ui| {
                for opt in options {
                    if ui.selectable_label(current == opt, opt).clicked() && current != opt {
                        picked = Some(opt.to_string());
                    }
                }
            });
    });
    picked
}
