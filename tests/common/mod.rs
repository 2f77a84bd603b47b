#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use portfolio_contact::application::services::ContactService;
use portfolio_contact::domain::entities::{ContactEmail, RateLimitPolicy};
use portfolio_contact::domain::mailer::{MailError, Mailer};
use portfolio_contact::infrastructure::persistence::{CONTACT_LOG_FILE, FileContactLog, FileRateLimiter};
use portfolio_contact::routes::{RouterOptions, app_routes};
use portfolio_contact::state::AppState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const RECIPIENT: &str = "owner@example.com";

/// Mailer double that records every message it accepts.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<ContactEmail>>,
    fail: AtomicBool,
    unreachable: AtomicBool,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<ContactEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn set_unreachable(&self) {
        self.unreachable.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: ContactEmail) -> Result<(), MailError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MailError::Transport("connection refused".to_string()));
        }

        self.sent.lock().unwrap().push(email);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.unreachable.load(Ordering::SeqCst)
    }

    fn transport_name(&self) -> &'static str {
        "recording"
    }
}

/// Application wired with a recording mailer and a temporary log directory.
pub struct TestContext {
    pub state: AppState,
    pub mailer: Arc<RecordingMailer>,
    pub log_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_rate_limit(policy: RateLimitPolicy) -> Self {
        Self::build(Some(policy))
    }

    fn build(policy: Option<RateLimitPolicy>) -> Self {
        let log_dir = tempfile::tempdir().unwrap();
        let mailer = Arc::new(RecordingMailer::default());
        let contact_log = Arc::new(FileContactLog::new(log_dir.path().join("logs")));

        let mut service = ContactService::new(mailer.clone(), contact_log.clone(), RECIPIENT);
        if let Some(policy) = policy {
            service = service.with_rate_limiter(Arc::new(FileRateLimiter::new(
                log_dir.path().join("logs"),
                policy,
            )));
        }

        let state = AppState {
            contact_service: Arc::new(service),
            mailer: mailer.clone(),
            contact_log,
            submissions: None,
        };

        Self {
            state,
            mailer,
            log_dir,
        }
    }

    pub fn router(&self) -> Router {
        app_routes(self.state.clone(), RouterOptions::default())
    }

    /// Lines of the contact log, empty if nothing was written.
    pub fn log_lines(&self) -> Vec<String> {
        let path = self.log_dir.path().join("logs").join(CONTACT_LOG_FILE);

        std::fs::read_to_string(path)
            .map(|contents| contents.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

pub fn valid_form() -> serde_json::Value {
    serde_json::json!({
        "name": "Ann",
        "email": "ann@example.com",
        "subject": "Hi",
        "message": "Hello there, nice site!"
    })
}
