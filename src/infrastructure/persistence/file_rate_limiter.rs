//! File-backed per-email rate limiter.

use async_trait::async_trait;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::ensure_dir;
use crate::domain::entities::{RateLimitDecision, RateLimitEntry, RateLimitPolicy};
use crate::domain::repositories::{RateLimitError, RateLimitRepository};

/// File name of the rate limit state inside the log directory.
pub const RATE_LIMIT_FILE: &str = "rate_limit.log";

/// Rate limiter keeping recent attempts as a JSON array on disk.
///
/// The file holds `[{"email": "...", "time": <unix seconds>}, ...]`. Each
/// check is a locked read-modify-write; unreadable or corrupt state is
/// treated as empty.
pub struct FileRateLimiter {
    dir: PathBuf,
    path: PathBuf,
    policy: RateLimitPolicy,
}

impl FileRateLimiter {
    /// Creates a limiter stored at `<dir>/rate_limit.log`.
    pub fn new(dir: impl Into<PathBuf>, policy: RateLimitPolicy) -> Self {
        let dir = dir.into();
        let path = dir.join(RATE_LIMIT_FILE);

        Self { dir, path, policy }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RateLimitRepository for FileRateLimiter {
    async fn check_and_record(&self, email: &str, now: i64) -> Result<bool, RateLimitError> {
        let dir = self.dir.clone();
        let path = self.path.clone();
        let policy = self.policy;
        let email = email.to_string();

        let admitted = tokio::task::spawn_blocking(move || -> io::Result<bool> {
            ensure_dir(&dir)?;

            let mut file = OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(&path)?;
            FileExt::lock_exclusive(&file)?;

            let result = apply_policy(&mut file, &policy, &email, now);
            let unlocked = FileExt::unlock(&file);

            let admitted = result?;
            unlocked?;
            Ok(admitted)
        })
        .await
        .map_err(|e| RateLimitError::Task(e.to_string()))??;

        Ok(admitted)
    }
}

fn apply_policy(
    file: &mut File,
    policy: &RateLimitPolicy,
    email: &str,
    now: i64,
) -> io::Result<bool> {
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let entries: Vec<RateLimitEntry> = serde_json::from_str(&contents).unwrap_or_default();

    match policy.apply(entries, email, now) {
        RateLimitDecision::Limited => Ok(false),
        RateLimitDecision::Admitted { entries } => {
            let json = serde_json::to_vec(&entries).map_err(io::Error::other)?;
            file.set_len(0)?;
            file.seek(SeekFrom::Start(0))?;
            file.write_all(&json)?;
            file.flush()?;
            Ok(true)
        }
    }
}
