//! Comparison client errors.

use thiserror::Error;

/// Why one pair's comparison failed. All variants are fatal only to their
/// own pair; the orchestrator captures them as failure outcomes.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Network or transport failure reaching the scoring engine.
    #[error("comparison request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The engine returned a non-success status. The message is taken from
    /// the response body's `error` field when present, so it surfaces to the
    /// caller verbatim.
    #[error("{message}")]
    Remote { message: String },

    /// The engine's success response violated the structural contract.
    #[error("invalid comparison response: {0}")]
    Schema(String),
}
