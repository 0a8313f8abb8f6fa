//! # File Audit Log
//!
//! Durable [`AuditLog`] implementation: one JSON record per line in an
//! append-only file.
//!
//! Each record is serialized to a single line and written with one
//! `write_all` under a mutex, so concurrent appends cannot interleave
//! within a record and `tail` parsing is never ambiguous. Lines that fail
//! to parse (e.g. a truncated tail after a crash) are skipped with a
//! warning rather than poisoning the whole read.

use crate::infrastructure::audit::record::AuditRecord;
use crate::infrastructure::audit::traits::{AuditError, AuditLog, AuditResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Append-only, line-oriented audit log file.
#[derive(Debug)]
pub struct FileAuditLog {
    path: PathBuf,
    writer: Mutex<File>,
}

impl FileAuditLog {
    /// Opens (creating if necessary) the audit log at `path`.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Open`] if the file cannot be opened for
    /// appending.
    pub async fn open(path: impl Into<PathBuf>) -> AuditResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AuditError::open(format!("{}: {e}", parent.display())))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| AuditError::open(format!("{}: {e}", path.display())))?;

        Ok(Self {
            path,
            writer: Mutex::new(file),
        })
    }

    /// Returns the path of the backing file.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AuditLog for FileAuditLog {
    async fn record(&self, record: &AuditRecord) {
        let mut line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize audit record; dropping");
                return;
            }
        };
        line.push('\n');

        // One locked write_all per record keeps concurrent appends whole.
        let mut writer = self.writer.lock().await;
        if let Err(e) = writer.write_all(line.as_bytes()).await {
            tracing::warn!(error = %e, path = %self.path.display(), "audit append failed");
            return;
        }
        if let Err(e) = writer.flush().await {
            tracing::warn!(error = %e, path = %self.path.display(), "audit flush failed");
        }
    }

    async fn tail(&self, n: usize) -> AuditResult<Vec<AuditRecord>> {
        // Holding the writer lock keeps a concurrent append from being
        // observed half-written.
        let _writer = self.writer.lock().await;

        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AuditError::read(format!("{}: {e}", self.path.display())));
            }
        };

        let records: Vec<AuditRecord> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unparseable audit line");
                    None
                }
            })
            .collect();

        let skip = records.len().saturating_sub(n);
        Ok(records.into_iter().skip(skip).collect())
    }
}
