//! Scripted comparison backend for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::client::{CompareBackend, CompareError};
use crate::document::Document;
use crate::schema::{
    ComparisonResult, ConsistencySegment, DocumentAnomalies, DocumentVariations, FeatureScores,
    TextConsistency,
};

type PairKey = (String, String);

/// In-memory [`CompareBackend`] with per-pair scripted failures and delays.
///
/// Every pair succeeds with [`sample_result`] unless scripted otherwise.
#[derive(Default)]
pub struct MockCompareClient {
    failures: Mutex<HashMap<PairKey, String>>,
    delays: Mutex<HashMap<PairKey, Duration>>,
    calls: AtomicUsize,
}

impl MockCompareClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a remote failure for the (file1, file2) pair.
    pub fn fail_pair(&self, file1: &str, file2: &str, message: &str) {
        self.failures
            .lock()
            .expect("mock lock poisoned")
            .insert((file1.to_string(), file2.to_string()), message.to_string());
    }

    /// Delays the (file1, file2) pair's response, to scramble completion order.
    pub fn delay_pair(&self, file1: &str, file2: &str, delay: Duration) {
        self.delays
            .lock()
            .expect("mock lock poisoned")
            .insert((file1.to_string(), file2.to_string()), delay);
    }

    /// Number of compare calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompareBackend for MockCompareClient {
    async fn compare(
        &self,
        first: &Document,
        second: &Document,
        _weight_text: f64,
    ) -> Result<ComparisonResult, CompareError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = (first.name.clone(), second.name.clone());

        let delay = self
            .delays
            .lock()
            .expect("mock lock poisoned")
            .get(&key)
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self
            .failures
            .lock()
            .expect("mock lock poisoned")
            .get(&key)
            .cloned();
        if let Some(message) = failure {
            return Err(CompareError::Remote { message });
        }

        Ok(sample_result(&first.name, &second.name))
    }
}

/// Minimal result passing the full schema contract, distinguishable per pair
/// via `report_url`.
pub fn sample_result(file1: &str, file2: &str) -> ComparisonResult {
    ComparisonResult {
        text_similarity: 0.9,
        text_consistency: TextConsistency {
            doc1: vec![ConsistencySegment {
                segment_index: 0,
                segment_text: "alpha".to_string(),
                next_segment_text: "beta".to_string(),
                similarity_score: 0.8,
            }],
            doc2: vec![],
        },
        handwriting_similarity: 0.7,
        similarity_index: 0.85,
        feature_scores: FeatureScores {
            confidence_similarity: 0.9,
            symbol_density_similarity: 0.8,
            line_break_similarity: 0.7,
            average_confidence_similarity: 0.85,
        },
        anomalies: DocumentAnomalies {
            document1: vec![],
            document2: vec![],
        },
        variations: DocumentVariations {
            document1: vec![],
            document2: vec![],
        },
        report_url: format!("/reports/{file1}-vs-{file2}"),
    }
}
