//! # In-Memory Audit Log
//!
//! In-memory implementation of [`AuditLog`] for tests.
//!
//! Uses a thread-safe `Vec` for storage, making it suitable for unit
//! tests without filesystem dependencies.

use crate::infrastructure::audit::record::AuditRecord;
use crate::infrastructure::audit::traits::{AuditLog, AuditResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`AuditLog`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    records: Arc<RwLock<Vec<AuditRecord>>>,
}

impl InMemoryAuditLog {
    /// Creates a new empty in-memory audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded entries.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if nothing has been recorded yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Clears all records.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn record(&self, record: &AuditRecord) {
        self.records.write().await.push(record.clone());
    }

    async fn tail(&self, n: usize) -> AuditResult<Vec<AuditRecord>> {
        let records = self.records.read().await;
        let skip = records.len().saturating_sub(n);
        Ok(records.iter().skip(skip).cloned().collect())
    }
}
