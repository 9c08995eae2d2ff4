use axum::{
    Json,
    extract::{Multipart, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, instrument};

use docmatch_core::batch::BatchResult;
use docmatch_core::client::CompareBackend;
use docmatch_core::document::Document;
use docmatch_core::orchestrator::run_batch;

use crate::gateway::DEFAULT_WEIGHT_TEXT;
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;

/// `POST /compare-multiple`: compares every unique pair of the uploaded
/// files and returns all outcomes, failed pairs included, as data.
///
/// A batch where every pair failed is still a 200; partial failure is a
/// normal outcome of this endpoint, not a transport error.
#[instrument(skip(state, multipart), fields(files = tracing::field::Empty))]
pub async fn compare_multiple_handler<C>(
    State(state): State<HandlerState<C>>,
    mut multipart: Multipart,
) -> Result<Response, GatewayError>
where
    C: CompareBackend + 'static,
{
    let mut documents = Vec::new();
    let mut weight_text = DEFAULT_WEIGHT_TEXT;

    while let Some(field) = multipart.next_field().await? {
        let file_name = field.file_name().map(str::to_string);
        if let Some(name) = file_name {
            let content = field.bytes().await?;
            documents.push(Document::new(name, content));
        } else if field.name() == Some("weight_text") {
            weight_text = parse_weight(&field.text().await?)?;
        }
        // Other text fields are ignored.
    }

    tracing::Span::current().record("files", documents.len());

    if documents.len() < 2 {
        return Err(GatewayError::InvalidRequest(
            "At least two files are required for comparison".to_string(),
        ));
    }

    let outcomes = run_batch(Arc::clone(&state.backend), &documents, weight_text)
        .await
        .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;

    let batch = BatchResult::from_outcomes(outcomes);
    info!(
        total = batch.total_comparisons,
        failed = batch.comparisons.iter().filter(|o| !o.is_success()).count(),
        "comparison batch settled"
    );

    state.snapshots.persist(&batch).await;

    Ok(Json(batch).into_response())
}

fn parse_weight(raw: &str) -> Result<f64, GatewayError> {
    let weight: f64 = raw.trim().parse().map_err(|_| {
        GatewayError::InvalidRequest(format!("weight_text must be a number, got '{raw}'"))
    })?;
    if !(0.0..=1.0).contains(&weight) {
        return Err(GatewayError::InvalidRequest(format!(
            "weight_text must be between 0 and 1, got {weight}"
        )));
    }
    Ok(weight)
}
