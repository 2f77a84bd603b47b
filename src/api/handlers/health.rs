//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Mailer**: Transport reachability (SMTP `NOOP`, sendmail binary present)
/// 2. **Contact log**: Log directory writable
/// 3. **Database**: `SELECT 1`, only when the submission store is enabled
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "mailer": { "status": "ok", "message": "Transport: smtp" },
///     "contact_log": { "status": "ok", "message": "Writable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let mailer_check = check_mailer(&state).await;

    let log_check = check_contact_log(&state).await;

    let db_check = check_database(&state).await;

    let all_healthy = mailer_check.is_ok()
        && log_check.is_ok()
        && db_check.as_ref().is_none_or(CheckStatus::is_ok);

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            mailer: mailer_check,
            contact_log: log_check,
            database: db_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the mail transport is reachable.
async fn check_mailer(state: &AppState) -> CheckStatus {
    let transport = state.mailer.transport_name();

    if state.mailer.health_check().await {
        CheckStatus::ok(format!("Transport: {transport}"))
    } else {
        CheckStatus::error(format!("Transport {transport} unreachable"))
    }
}

/// Checks that the contact log location is writable.
async fn check_contact_log(state: &AppState) -> CheckStatus {
    if state.contact_log.health_check().await {
        CheckStatus::ok("Writable")
    } else {
        CheckStatus::error("Contact log is not writable")
    }
}

/// Checks database connectivity when the submission store is enabled.
async fn check_database(state: &AppState) -> Option<CheckStatus> {
    let submissions = state.submissions.as_ref()?;

    Some(if submissions.health_check().await {
        CheckStatus::ok("Connected")
    } else {
        CheckStatus::error("Database unreachable")
    })
}
