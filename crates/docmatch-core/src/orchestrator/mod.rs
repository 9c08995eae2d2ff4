//! Concurrent fan-out of pairwise comparisons.


use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::batch::PairOutcome;
use crate::client::CompareBackend;
use crate::document::{self, Document, PairError};

/// Runs every unique pair of `documents` through `backend` concurrently and
/// returns one outcome per pair in generation order.
///
/// Each pair is an isolated failure domain: a transport, remote, or schema
/// failure (or a panicked task) becomes a failure outcome for that pair and
/// never aborts its siblings. All tasks run to settlement before this
/// returns; there is no short-circuit and no batch-level cancellation.
#[instrument(skip(backend, documents), fields(documents = documents.len()))]
pub async fn run_batch<C>(
    backend: Arc<C>,
    documents: &[Document],
    weight_text: f64,
) -> Result<Vec<PairOutcome>, PairError>
where
    C: CompareBackend + ?Sized + 'static,
{
    let pairs = document::generate_unique_pairs(documents)?;
    debug!(pairs = pairs.len(), "dispatching comparison batch");

    let names: Vec<(String, String)> = pairs
        .iter()
        .map(|p| (p.first.name.clone(), p.second.name.clone()))
        .collect();

    let mut handles = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let backend = Arc::clone(&backend);
        handles.push(tokio::spawn(async move {
            match backend.compare(&pair.first, &pair.second, weight_text).await {
                Ok(result) => PairOutcome::success(&pair.first.name, &pair.second.name, result),
                Err(e) => {
                    warn!(
                        file1 = %pair.first.name,
                        file2 = %pair.second.name,
                        error = %e,
                        "pair comparison failed"
                    );
                    PairOutcome::failure(&pair.first.name, &pair.second.name, e.to_string())
                }
            }
        }));
    }

    // Joining in spawn order gives one slot per pair, written exactly once,
    // independent of completion order.
    let settled = futures_util::future::join_all(handles).await;
    let mut outcomes = Vec::with_capacity(settled.len());
    for (i, joined) in settled.into_iter().enumerate() {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                let (file1, file2) = &names[i];
                warn!(file1 = %file1, file2 = %file2, error = %e, "comparison task aborted");
                outcomes.push(PairOutcome::failure(
                    file1,
                    file2,
                    format!("comparison task aborted: {e}"),
                ));
            }
        }
    }

    Ok(outcomes)
}
