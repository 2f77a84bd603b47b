//! HTTP server initialization and runtime setup.
//!
//! Handles mail transport selection, contact log and limiter setup, the
//! optional database pool, and Axum server lifecycle.

use crate::application::services::ContactService;
use crate::config::{Config, MailTransport};
use crate::domain::mailer::Mailer;
use crate::domain::repositories::{ContactLogRepository, SubmissionRepository};
use crate::infrastructure::mail::{LogMailer, SendmailMailer, SmtpMailer, parse_sender};
use crate::infrastructure::persistence::{
    FileContactLog, FileRateLimiter, PgSubmissionRepository,
};
use crate::routes::{RouterOptions, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mail transport (SMTP, sendmail or log)
/// - File contact log and, when enabled, the per-email rate limiter
/// - PostgreSQL pool and migrations, when database logging is enabled
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The mail transport cannot be configured
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(
        state,
        RouterOptions {
            static_dir: config.static_dir.clone(),
            ip_rate_limit: config.ip_rate_limit_enabled,
            behind_proxy: config.behind_proxy,
        },
    );

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Wires the contact service and its collaborators from configuration.
///
/// # Errors
///
/// Returns an error if the mailer or the database cannot be set up.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let mailer = build_mailer(config)?;
    tracing::info!(transport = mailer.transport_name(), "Mailer ready");

    let contact_log: Arc<dyn ContactLogRepository> =
        Arc::new(FileContactLog::new(&config.contact_log_dir));

    let mut contact_service =
        ContactService::new(mailer.clone(), contact_log.clone(), &config.contact_recipient);

    if config.rate_limit_enabled {
        let limiter = FileRateLimiter::new(&config.contact_log_dir, config.rate_limit_policy());
        tracing::info!(path = %limiter.path().display(), "Per-email rate limiting enabled");
        contact_service = contact_service.with_rate_limiter(Arc::new(limiter));
    }

    let submissions: Option<Arc<dyn SubmissionRepository>> = match &config.database_url {
        Some(database_url) if config.db_logging => {
            let pool = connect_database(config, database_url).await?;
            Some(Arc::new(PgSubmissionRepository::new(Arc::new(pool))))
        }
        _ => None,
    };

    if let Some(store) = &submissions {
        contact_service = contact_service.with_submission_store(store.clone());
    }

    Ok(AppState {
        contact_service: Arc::new(contact_service),
        mailer,
        contact_log,
        submissions,
    })
}

/// Creates the configured mail transport.
///
/// # Errors
///
/// Returns an error if `MAIL_FROM` does not parse or the SMTP URL is invalid.
pub fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>> {
    let from = parse_sender(&config.mail_from)?;

    let mailer: Arc<dyn Mailer> = match config.mail_transport {
        MailTransport::Smtp => {
            let smtp_url = config
                .smtp_url
                .as_deref()
                .context("SMTP_URL must be set for the smtp transport")?;
            Arc::new(SmtpMailer::new(smtp_url, from)?)
        }
        MailTransport::Sendmail => Arc::new(SendmailMailer::new(from)),
        MailTransport::Log => {
            tracing::warn!("MAIL_TRANSPORT=log: contact emails are logged, not sent");
            Arc::new(LogMailer::new())
        }
    };

    Ok(mailer)
}

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn connect_database(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
