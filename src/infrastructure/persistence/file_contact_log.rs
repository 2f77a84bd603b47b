//! File-backed append-only contact log.

use async_trait::async_trait;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::ensure_dir;
use crate::domain::entities::ContactLogEntry;
use crate::domain::repositories::{ContactLogError, ContactLogRepository};

/// File name of the contact log inside the log directory.
pub const CONTACT_LOG_FILE: &str = "contacts.log";

/// Contact log stored as one text line per accepted submission.
///
/// The log directory is created on first write. Each append opens the file in
/// append mode, takes an exclusive advisory lock and writes the complete line
/// with a single `write_all`, so concurrent writers (threads or processes)
/// never produce interleaved lines.
pub struct FileContactLog {
    dir: PathBuf,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileContactLog {
    /// Creates a log stored at `<dir>/contacts.log`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let path = dir.join(CONTACT_LOG_FILE);

        Self {
            dir,
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContactLogRepository for FileContactLog {
    async fn append(&self, entry: ContactLogEntry) -> Result<(), ContactLogError> {
        let line = format!("{entry}\n");
        let dir = self.dir.clone();
        let path = self.path.clone();

        let _guard = self.write_lock.lock().await;

        tokio::task::spawn_blocking(move || append_line(&dir, &path, &line))
            .await
            .map_err(|e| ContactLogError::Task(e.to_string()))??;

        debug!(path = %self.path.display(), "Contact log entry appended");
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<String>, ContactLogError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let lines: Vec<&str> = contents.lines().collect();
        let start = lines.len().saturating_sub(limit);

        Ok(lines[start..].iter().map(|l| l.to_string()).collect())
    }

    async fn health_check(&self) -> bool {
        let dir = self.dir.clone();
        let path = self.path.clone();

        let result = tokio::task::spawn_blocking(move || check_writable(&dir, &path)).await;

        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                warn!(error = %e, path = %self.path.display(), "Contact log is not writable");
                false
            }
            Err(e) => {
                warn!(error = %e, "Contact log health check task failed");
                false
            }
        }
    }
}

fn open_for_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Checks the log could be appended to without touching the filesystem.
///
/// An existing log must be a writable file. Otherwise the nearest existing
/// ancestor of the log directory must be a writable directory, so the first
/// append can create the rest.
fn check_writable(dir: &Path, path: &Path) -> io::Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() && !meta.permissions().readonly() => return Ok(()),
        Ok(_) => {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "contact log is not a writable file",
            ));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let existing = dir
        .ancestors()
        .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        .find(|p| p.exists())
        .unwrap_or(Path::new("."));

    let meta = std::fs::metadata(existing)?;
    if meta.is_dir() && !meta.permissions().readonly() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{} is not a writable directory", existing.display()),
        ))
    }
}

fn append_line(dir: &Path, path: &Path, line: &str) -> io::Result<()> {
    ensure_dir(dir)?;

    let mut file = open_for_append(path)?;
    FileExt::lock_exclusive(&file)?;

    let written = file.write_all(line.as_bytes()).and_then(|()| file.flush());
    let unlocked = FileExt::unlock(&file);

    written.and(unlocked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContactLogEntry;
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tokio::task::JoinSet;

    fn entry(name: &str) -> ContactLogEntry {
        ContactLogEntry {
            submitted_at: NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            name: name.to_string(),
            email: "ann@example.com".to_string(),
            subject: "Hi".to_string(),
            message_excerpt: "Hello there, nice site!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_creates_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let log = FileContactLog::new(tmp.path().join("logs"));

        log.append(entry("Ann")).await.unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            contents,
            "[2025-03-01 09:30:00] Name: Ann | Email: ann@example.com | Subject: Hi | Message: Hello there, nice site!...\n"
        );
    }

    #[tokio::test]
    async fn test_append_never_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let log = FileContactLog::new(tmp.path());

        log.append(entry("Ann")).await.unwrap();
        log.append(entry("Bob")).await.unwrap();

        let lines = log.recent(10).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Name: Ann"));
        assert!(lines[1].contains("Name: Bob"));
    }

    #[tokio::test]
    async fn test_recent_returns_tail() {
        let tmp = tempfile::tempdir().unwrap();
        let log = FileContactLog::new(tmp.path());

        for name in ["A", "B", "C", "D"] {
            log.append(entry(name)).await.unwrap();
        }

        let lines = log.recent(2).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Name: C"));
        assert!(lines[1].contains("Name: D"));
    }

    #[tokio::test]
    async fn test_recent_on_missing_log_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let log = FileContactLog::new(tmp.path().join("nowhere"));

        assert!(log.recent(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health_check_writable_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let log = FileContactLog::new(tmp.path().join("logs"));

        assert!(log.health_check().await);
    }

    #[tokio::test]
    async fn test_health_check_leaves_filesystem_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("var").join("logs");
        let log = FileContactLog::new(&dir);

        assert!(log.health_check().await);
        assert!(!tmp.path().join("var").exists());

        log.append(entry("Ann")).await.unwrap();
        assert!(log.health_check().await);
        assert_eq!(log.recent(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_health_check_read_only_log() {
        let tmp = tempfile::tempdir().unwrap();
        let log = FileContactLog::new(tmp.path());
        log.append(entry("Ann")).await.unwrap();

        let mut permissions = std::fs::metadata(log.path()).unwrap().permissions();
        permissions.set_readonly(true);
        std::fs::set_permissions(log.path(), permissions).unwrap();

        assert!(!log.health_check().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_never_interleave() {
        let tmp = tempfile::tempdir().unwrap();
        let log = Arc::new(FileContactLog::new(tmp.path().join("logs")));

        let mut tasks = JoinSet::new();
        for i in 0..50 {
            let log = log.clone();
            tasks.spawn(async move { log.append(entry(&format!("Sender {i}"))).await });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap().unwrap();
        }

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 50);
        assert!(contents.ends_with('\n'));

        let mut names = HashSet::new();
        for line in &lines {
            assert!(line.starts_with("[2025-03-01 09:30:00] Name: Sender "), "{line}");
            assert!(
                line.ends_with("| Email: ann@example.com | Subject: Hi | Message: Hello there, nice site!..."),
                "{line}"
            );
            let name = line
                .trim_start_matches("[2025-03-01 09:30:00] Name: ")
                .split(" | ")
                .next()
                .unwrap();
            names.insert(name.to_string());
        }
        assert_eq!(names.len(), 50);
    }

    #[tokio::test]
    async fn test_health_check_dir_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("logs");
        std::fs::write(&blocker, "not a directory").unwrap();
        let log = FileContactLog::new(&blocker);

        assert!(!log.health_check().await);
    }
}
