// crates/adpost-ui/src/app.rs
use adpost_core::commands::FormCommand;
use adpost_core::form::{Effect, ListingForm};
use eframe::egui;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::context::{AppContext, SubmitStatus};
use crate::helpers::format::missing_hint;
use crate::modules::{
    details::DetailsModule,
    location::LocationModule,
    photos::PhotosModule,
    price::PriceModule,
    review::ReviewModule,
    Form,
    FormModule,
};
use crate::previews::TexturePreviews;
use crate::theme::{configure_style, section_frame, ACCENT, DARK_TEXT_DIM, ERROR, SUCCESS};

// ── App ───────────────────────────────────────────────────────────────────────

pub struct AdPostApp {
    form:         Form,
    context:      AppContext,
    // Sections as concrete types, drawn top to bottom in this order.
    details:      DetailsModule,
    price:        PriceModule,
    photos:       PhotosModule,
    location:     LocationModule,
    review:       ReviewModule,
    /// Commands emitted by modules each frame, processed after the UI pass
    pending_cmds: Vec<FormCommand>,
}

impl AdPostApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        configure_style(&cc.egui_ctx);
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        let previews = TexturePreviews::new(cc.egui_ctx.clone());
        let form     = ListingForm::new(previews, &config.seller_name);
        let photos   = PhotosModule::new(&config.accepted_extensions);
        info!("[app] posting to {}", config.endpoint);

        Self {
            form,
            context:      AppContext::new(config),
            details:      DetailsModule,
            price:        PriceModule,
            photos,
            location:     LocationModule,
            review:       ReviewModule::default(),
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: FormCommand) {
        match self.form.apply(cmd) {
            Effect::None => {}
            Effect::PhotosDropped(n) => {
                debug!("[app] {n} photo(s) over the limit were not added");
            }
            Effect::Submit(payload) => {
                self.context.submit(&payload);
            }
        }
    }

    /// OS file drops go straight to the photo store, one batch per drop.
    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let files = ctx.input(|i| i.raw.dropped_files.clone());
        if files.is_empty() {
            return;
        }
        for file in files {
            if let Some(path) = file.path {
                self.context.drops.push_paths([path]);
            } else if let Some(bytes) = file.bytes {
                self.context.drops.push_bytes(&file.name, bytes);
            }
        }
        let batch = self.context.drops.take();
        if !batch.is_empty() {
            self.pending_cmds.push(FormCommand::AddPhotos(batch));
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            match &self.context.status {
                SubmitStatus::Idle => {}
                SubmitStatus::Posting => {
                    ui.spinner();
                    ui.label(egui::RichText::new("Posting…").size(11.0));
                }
                SubmitStatus::Saved => {
                    ui.label(egui::RichText::new("✔ Listing saved").size(11.0).color(SUCCESS));
                }
                SubmitStatus::Failed(msg) => {
                    ui.label(egui::RichText::new(format!("✖ {msg}")).size(11.0).color(ERROR));
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(missing_hint(&self.form.missing_fields()))
                        .size(10.5)
                        .color(DARK_TEXT_DIM),
                );
            });
        });
    }
}

fn show_section(ui: &mut egui::Ui, module: &mut dyn FormModule, form: &Form, cmd: &mut Vec<FormCommand>) {
    section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        module.ui(ui, form, cmd);
    });
    ui.add_space(10.0);
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for AdPostApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // The form (and with it every preview) is dropped with the app.
        info!(
            "[app] exit with {} photo(s) attached, {} preview(s) to release",
            self.form.images().len(),
            self.form.gallery().previews().live_count(),
        );
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drag_and_drop(ctx);
        self.context.ingest_submit_results(ctx);

        egui::TopBottomPanel::top("top_panel")
            .exact_height(40.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(egui::RichText::new("AdPost").strong().size(16.0).color(ACCENT));
                    ui.separator();
                    ui.label(egui::RichText::new("Post your ad").size(12.0).weak());
                });
            });

        egui::TopBottomPanel::bottom("status_panel")
            .exact_height(28.0)
            .show(ctx, |ui| self.status_bar(ui));

        self.review.posting = self.context.is_posting();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let cmd = &mut self.pending_cmds;
                show_section(ui, &mut self.details,  &self.form, cmd);
                show_section(ui, &mut self.price,    &self.form, cmd);
                show_section(ui, &mut self.photos,   &self.form, cmd);
                show_section(ui, &mut self.location, &self.form, cmd);
                show_section(ui, &mut self.review,   &self.form, cmd);
            });
        });

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<FormCommand> = self.pending_cmds.drain(..).collect();
        if !cmds.is_empty() {
            for cmd in cmds {
                self.process_command(cmd);
            }
            ctx.request_repaint();
        }
    }
}
