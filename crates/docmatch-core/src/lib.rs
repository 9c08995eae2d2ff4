//! Pairwise document-comparison orchestration.
//!
//! Given a batch of uploaded documents, this crate generates every unique
//! unordered pair, fans each pair out to an external scoring engine
//! concurrently, validates each response against the engine's structural
//! contract, and aggregates per-pair outcomes into one batch result with a
//! best-effort JSON snapshot.
//!
//! # Module map
//! - [`document`] - document/pair types and unique-pair generation
//! - [`schema`] - the scoring engine's response contract (serde-validated)
//! - [`client`] - one comparison call against the engine, behind a trait seam
//! - [`orchestrator`] - concurrent fan-out with isolated per-pair failures
//! - [`batch`] - outcome aggregation and snapshot persistence
//! - [`config`] - environment-backed server configuration
//!
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod batch;
pub mod client;
pub mod config;
pub mod document;
pub mod orchestrator;
pub mod schema;

pub use batch::{BatchResult, Outcome, PairOutcome, SnapshotError, SnapshotWriter};
#[cfg(any(test, feature = "mock"))]
pub use client::MockCompareClient;
pub use client::{CompareBackend, CompareError, HttpComparisonClient};
pub use config::{Config, ConfigError};
pub use document::{Document, Pair, PairError, generate_unique_pairs};
pub use orchestrator::run_batch;
pub use schema::{
    Anomaly, Change, ComparisonResult, ConsistencySegment, DocumentAnomalies, DocumentVariations,
    FeatureScores, StatTriple, TextConsistency, Variation,
};
