//! Storage implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`FileContactLog`] - Append-only `contacts.log` text file
//! - [`FileRateLimiter`] - `rate_limit.log` JSON state next to the contact log
//! - [`PgSubmissionRepository`] - PostgreSQL `contacts` table (optional)
//!
//! File writes go through [`fs2`] advisory locks so concurrent processes
//! serving the same log directory never interleave their writes.

pub mod file_contact_log;
pub mod file_rate_limiter;
pub mod pg_submission_repository;

pub use file_contact_log::{CONTACT_LOG_FILE, FileContactLog};
pub use file_rate_limiter::{FileRateLimiter, RATE_LIMIT_FILE};
pub use pg_submission_repository::PgSubmissionRepository;

use std::io;
use std::path::Path;

/// Creates `dir` and any missing parents.
///
/// On Unix the directories are created with mode `0755`.
pub(crate) fn ensure_dir(dir: &Path) -> io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(dir)
}
