// crates/adpost-media/src/submit.rs
//
// Submitter: posts the listing payload off the UI thread.
//
// One worker thread per submission, at most one in flight. The result comes
// back on `rx`, which the UI drains once per frame next to everything else.
// The busy flag is released by a guard before the result is sent, so a
// caller that has just received a result can submit again immediately.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{info, warn};

use adpost_core::state::ListingPayload;

/// Whole-request ceiling; a hung server shouldn't leave the button greyed
/// out forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// 2xx. `body` is whatever the endpoint returned (usually the saved listing).
    Saved  { body: String },
    Failed { msg: String },
}

pub struct Submitter {
    pub rx: Receiver<SubmitResult>,
    tx:     Sender<SubmitResult>,
    busy:   Arc<AtomicBool>,
}

impl Default for Submitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Submitter {
    pub fn new() -> Self {
        let (tx, rx) = bounded(4);
        Self { rx, tx, busy: Arc::new(AtomicBool::new(false)) }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Start posting `payload` to `endpoint`. Returns `false` (and does
    /// nothing) while an earlier submission is still running.
    pub fn submit(&self, endpoint: &str, payload: &ListingPayload) -> bool {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("[submit] already in flight, ignoring");
            return false;
        }

        let tx       = self.tx.clone();
        let busy     = Arc::clone(&self.busy);
        let endpoint = endpoint.to_string();
        let payload  = payload.clone();

        thread::spawn(move || {
            // Clears the flag even if the request panics.
            struct BusyGuard(Arc<AtomicBool>);
            impl Drop for BusyGuard {
                fn drop(&mut self) {
                    self.0.store(false, Ordering::Release);
                }
            }
            let guard = BusyGuard(busy);

            info!("[submit] POST {endpoint} ({} photo(s))", payload.images.len());
            let result = match post_listing(&endpoint, &payload) {
                Ok(body) => {
                    info!("[submit] saved");
                    SubmitResult::Saved { body }
                }
                Err(e) => {
                    warn!("[submit] failed: {e:#}");
                    SubmitResult::Failed { msg: format!("{e:#}") }
                }
            };

            drop(guard);
            let _ = tx.send(result);
        });
        true
    }
}

fn post_listing(endpoint: &str, payload: &ListingPayload) -> Result<String> {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build();
    let agent = ureq::Agent::new_with_config(config);

    let mut resp = agent
        .post(endpoint)
        .send_json(payload)
        .with_context(|| format!("POST {endpoint}"))?;

    resp.body_mut()
        .read_to_string()
        .context("reading response body")
}

#[cfg(test)]
mod tests {
    use super::*;
    use adpost_core::state::ListingDraft;
    use std::net::TcpListener;

    fn payload() -> ListingPayload {
        ListingDraft::with_seller("Tester").payload(&Vec::new())
    }

    #[test]
    fn malformed_endpoint_fails_and_frees_the_slot() {
        let s = Submitter::new();
        assert!(s.submit("not a url", &payload()));
        let result = s.rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(matches!(result, SubmitResult::Failed { .. }));
        assert!(!s.is_busy());
    }

    #[test]
    fn second_submit_while_busy_is_ignored() {
        // Accepts the connection in the kernel backlog but never answers.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api/listings", listener.local_addr().unwrap());

        let s = Submitter::new();
        assert!(s.submit(&url, &payload()));
        assert!(s.is_busy());
        assert!(!s.submit(&url, &payload()));

        drop(listener);
        let result = s.rx.recv_timeout(REQUEST_TIMEOUT + Duration::from_secs(5)).unwrap();
        assert!(matches!(result, SubmitResult::Failed { .. }));
        assert!(!s.is_busy());
    }
}
