//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ContactService;
use crate::domain::mailer::Mailer;
use crate::domain::repositories::{ContactLogRepository, SubmissionRepository};

/// Application state cloned into every request handler.
///
/// The mailer and repositories are shared with [`ContactService`]; they are
/// exposed here as well so the health endpoint can probe them.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
    pub mailer: Arc<dyn Mailer>,
    pub contact_log: Arc<dyn ContactLogRepository>,
    pub submissions: Option<Arc<dyn SubmissionRepository>>,
}
