//! Structural contract for the scoring engine's `/compare` response.
//!
//! A strict typed deserialization is the validation gate: a missing required
//! field or a wrong type fails the parse, and the client treats that as a
//! failed comparison rather than a partially-accepted result. Unknown extra
//! fields are ignored, so the engine may add fields without breaking us.


use serde::{Deserialize, Serialize};

/// Validated result of comparing one document pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub text_similarity: f64,
    pub text_consistency: TextConsistency,
    pub handwriting_similarity: f64,
    /// Aggregate similarity blending the individual signals.
    pub similarity_index: f64,
    pub feature_scores: FeatureScores,
    pub anomalies: DocumentAnomalies,
    pub variations: DocumentVariations,
    pub report_url: String,
}

/// Per-document segment-to-segment consistency breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConsistency {
    pub doc1: Vec<ConsistencySegment>,
    pub doc2: Vec<ConsistencySegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencySegment {
    pub segment_index: u32,
    pub segment_text: String,
    pub next_segment_text: String,
    /// Similarity between this segment and the next one.
    pub similarity_score: f64,
}

/// The four named feature sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScores {
    pub confidence_similarity: f64,
    pub symbol_density_similarity: f64,
    pub line_break_similarity: f64,
    pub average_confidence_similarity: f64,
}

/// Anomaly entries reported per document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnomalies {
    pub document1: Vec<Anomaly>,
    pub document2: Vec<Anomaly>,
}

/// One flagged paragraph. Each signal category carries its statistical
/// triple only when that signal tripped the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<StatTriple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_density: Option<StatTriple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_breaks: Option<StatTriple>,
    pub paragraph_index: u32,
    pub page_number: u32,
}

/// Observed value against the document-wide mean and deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatTriple {
    pub value: f64,
    pub mean: f64,
    pub deviation: f64,
}

/// Page-span variation entries reported per document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentVariations {
    pub document1: Vec<Variation>,
    pub document2: Vec<Variation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub from_page: u32,
    pub to_page: u32,
    pub changes: Vec<Change>,
}

/// One change record within a page span. `difference` is the wire name for
/// the change magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "type")]
    pub kind: String,
    pub difference: f64,
    pub description: String,
}
