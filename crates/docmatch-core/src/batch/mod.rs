//! Batch aggregation and snapshot persistence.
//!
//! A batch result always lists outcomes in pair-generation order, never in
//! completion order, so the same input yields the same response shape. The
//! snapshot write is a best-effort side effect: it records the most recent
//! batch for later inspection and must never alter the in-memory result
//! handed back to the caller.


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::schema::ComparisonResult;

/// One pair's settled result. Serializes as `{file1, file2, result: {...}}`
/// on success or `{file1, file2, error: "..."}` on failure, so failed pairs
/// stay traceable to their documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairOutcome {
    pub file1: String,
    pub file2: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "result")]
    Success(ComparisonResult),
    #[serde(rename = "error")]
    Failure(String),
}

impl PairOutcome {
    pub fn success(file1: &str, file2: &str, result: ComparisonResult) -> Self {
        Self {
            file1: file1.to_string(),
            file2: file2.to_string(),
            outcome: Outcome::Success(result),
        }
    }

    pub fn failure(file1: &str, file2: &str, message: impl Into<String>) -> Self {
        Self {
            file1: file1.to_string(),
            file2: file2.to_string(),
            outcome: Outcome::Failure(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }
}

/// Aggregate of one batch request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub total_comparisons: usize,
    /// Outcomes in pair-generation order.
    pub comparisons: Vec<PairOutcome>,
}

impl BatchResult {
    pub fn from_outcomes(comparisons: Vec<PairOutcome>) -> Self {
        Self {
            total_comparisons: comparisons.len(),
            comparisons,
        }
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to serialize batch snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write batch snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the most recent batch to one fixed JSON file, overwriting the
/// previous snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes and writes `batch`, creating parent directories as needed.
    pub async fn write(&self, batch: &BatchResult) -> Result<(), SnapshotError> {
        let json = serde_json::to_vec_pretty(batch)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Best-effort persistence: a failed write is logged and swallowed so it
    /// cannot mask the comparison outcomes already computed.
    pub async fn persist(&self, batch: &BatchResult) {
        match self.write(batch).await {
            Ok(()) => debug!(path = %self.path.display(), "batch snapshot written"),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to persist batch snapshot");
            }
        }
    }
}
