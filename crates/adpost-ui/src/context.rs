// crates/adpost-ui/src/context.rs
//
// AppContext owns all runtime handles that are NOT part of the listing form.
// AdPostApp holds one of these plus the ListingForm and the panel modules —
// nothing else.
//
//   AppContext
//     ├── config     — endpoint, seller name, accepted extensions
//     ├── submitter  — background POST worker + result channel
//     ├── drops      — FileSelection for OS file drops
//     └── status     — what the bottom bar shows about the last submission

use eframe::egui;
use tracing::info;

use adpost_core::state::ListingPayload;
use adpost_media::{FileSelection, SubmitResult, Submitter};

use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Posting,
    Saved,
    Failed(String),
}

pub struct AppContext {
    pub config:    AppConfig,
    pub submitter: Submitter,
    pub drops:     FileSelection,
    pub status:    SubmitStatus,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let drops = FileSelection::new(&config.accepted_extensions);
        Self {
            config,
            submitter: Submitter::new(),
            drops,
            status:    SubmitStatus::Idle,
        }
    }

    /// Hand the payload to the worker. Ignored while a post is in flight.
    pub fn submit(&mut self, payload: &ListingPayload) {
        if self.submitter.submit(&self.config.endpoint, payload) {
            self.status = SubmitStatus::Posting;
        }
    }

    /// Drain the Submitter result channel. Called once per frame from
    /// `AdPostApp::update`, before the panels draw.
    pub fn ingest_submit_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.submitter.rx.try_recv() {
            self.status = match result {
                SubmitResult::Saved { body } => {
                    info!("[submit] response: {body}");
                    SubmitStatus::Saved
                }
                SubmitResult::Failed { msg } => SubmitStatus::Failed(msg),
            };
            ctx.request_repaint();
        }
        // Keep polling while the worker runs; nothing else wakes the UI.
        if self.submitter.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    pub fn is_posting(&self) -> bool {
        self.submitter.is_busy()
    }
}
