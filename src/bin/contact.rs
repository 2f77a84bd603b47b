//! CLI tool for the portfolio contact service.
//!
//! Sends test submissions through the same form controller the page uses,
//! inspects the contact log, and checks the mail transport and database
//! without going through the browser.
//!
//! # Usage
//!
//! ```bash
//! # Submit the form interactively
//! cargo run --bin contact -- submit
//!
//! # Submit without prompts
//! cargo run --bin contact -- submit --name Ann --email ann@example.com \
//!     --subject Hi --message "Hello there, nice site!" -y
//!
//! # Show the last 20 contact log lines
//! cargo run --bin contact -- log tail -n 20
//!
//! # Check the configured mail transport
//! cargo run --bin contact -- mail check
//!
//! # Check database connection
//! cargo run --bin contact -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `CONTACT_ENDPOINT`: default endpoint for `submit`
//! - `CONTACT_LOG_DIR`: log directory for `log tail` (default: `logs`)
//! - `DATABASE_URL`: PostgreSQL connection string for `db check`
//! - Server variables (see `config`) for `mail check`

use portfolio_contact::client::{
    FormController, FormFields, HttpContactTransport, NotificationCenter, SubmitOutcome,
};
use portfolio_contact::config;
use portfolio_contact::domain::repositories::{ContactLogRepository, SubmissionRepository};
use portfolio_contact::infrastructure::persistence::{FileContactLog, PgSubmissionRepository};
use portfolio_contact::server::build_mailer;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for the portfolio contact service.
#[derive(Parser)]
#[command(name = "contact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Submit the contact form to a running server
    Submit {
        /// Contact endpoint URL
        #[arg(
            long,
            env = "CONTACT_ENDPOINT",
            default_value = "http://localhost:3000/process_contact"
        )]
        endpoint: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Contact log operations
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Mail transport operations
    Mail {
        #[command(subcommand)]
        action: MailAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Contact log subcommands.
#[derive(Subcommand)]
enum LogAction {
    /// Print the most recent entries
    Tail {
        /// Number of lines
        #[arg(short = 'n', long, default_value_t = 10)]
        lines: usize,

        /// Log directory
        #[arg(long, env = "CONTACT_LOG_DIR", default_value = "logs")]
        dir: PathBuf,
    },
}

/// Mail transport subcommands.
#[derive(Subcommand)]
enum MailAction {
    /// Check that the configured transport is reachable
    Check,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and count stored submissions
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            endpoint,
            name,
            email,
            subject,
            message,
            yes,
        } => {
            let fields = FormFields {
                name: prompt_missing("Name", name)?,
                email: prompt_missing("Email", email)?,
                subject: prompt_missing("Subject", subject)?,
                message: prompt_missing("Message", message)?,
            };
            submit(endpoint, fields, yes).await?
        }
        Commands::Log { action } => handle_log_action(action).await?,
        Commands::Mail { action } => handle_mail_action(action).await?,
        Commands::Db { action } => handle_db_action(action).await?,
    }

    Ok(())
}

/// Returns the flag value or prompts for it.
fn prompt_missing(label: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?),
    }
}

/// Submits the form through [`FormController`] and prints the outcome.
///
/// # Flow
///
/// 1. Show the submission and confirm (unless `--yes` flag)
/// 2. Run local validation and send the request
/// 3. Print the notification the page would show
async fn submit(endpoint: String, fields: FormFields, skip_confirm: bool) -> Result<()> {
    println!("{}", "📨 Submit Contact Form".bright_blue().bold());
    println!();
    println!("  Endpoint: {}", endpoint.bright_black());
    println!("  Name:     {}", fields.name.cyan());
    println!("  Email:    {}", fields.email.cyan());
    println!("  Subject:  {}", fields.subject.cyan());
    println!("  Message:  {}", fields.message.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Send this message?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let transport = HttpContactTransport::new(endpoint)?;
    let mut controller = FormController::new(Arc::new(transport), NotificationCenter::new());
    controller.set_fields(fields);

    match controller.submit().await {
        SubmitOutcome::Blocked(e) => {
            println!("{}", format!("⚠️  Not sent: {e}").yellow());
        }
        SubmitOutcome::Accepted(message) => {
            println!("{}", format!("✅ {message}").green().bold());
        }
        SubmitOutcome::Rejected(message) => {
            println!("{}", format!("❌ {message}").red().bold());
        }
        SubmitOutcome::Failed(e) => {
            if let Some(notification) = controller.notifications().current() {
                println!("{}", format!("❌ {}", notification.message).red().bold());
            }
            println!("  {}", e.to_string().bright_black());
        }
    }
    println!();

    Ok(())
}

/// Handles contact log commands.
async fn handle_log_action(action: LogAction) -> Result<()> {
    match action {
        LogAction::Tail { lines, dir } => {
            let log = FileContactLog::new(dir);

            println!(
                "{}",
                format!("📋 {}", log.path().display()).bright_blue().bold()
            );
            println!();

            let entries = log
                .recent(lines)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read contact log: {}", e))?;

            if entries.is_empty() {
                println!("{}", "  No submissions logged yet".yellow());
            }

            for entry in &entries {
                println!("  {entry}");
            }
            println!();
        }
    }

    Ok(())
}

/// Handles mail transport commands.
async fn handle_mail_action(action: MailAction) -> Result<()> {
    match action {
        MailAction::Check => {
            let config = config::load_from_env()?;
            let mailer = build_mailer(&config)?;

            println!(
                "{}",
                format!("🔍 Checking {} transport...", mailer.transport_name()).bright_blue()
            );

            if mailer.health_check().await {
                println!("{}", "✅ Mail transport OK".green().bold());
            } else {
                anyhow::bail!("Mail transport {} is unreachable", mailer.transport_name());
            }
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction) -> Result<()> {
    match action {
        DbAction::Check => {
            let database_url =
                std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

            println!("{}", "🔍 Checking database connection...".bright_blue());

            let pool = PgPool::connect(&database_url)
                .await
                .context("Failed to connect to database")?;
            let repo = PgSubmissionRepository::new(Arc::new(pool));

            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count submissions: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Stored submissions: {}",
                count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
