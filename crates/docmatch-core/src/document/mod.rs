//! Uploaded documents and unique-pair generation.
//!
//! Pair generation is pure and deterministic: for an input of N documents it
//! yields exactly N*(N-1)/2 pairs in lexicographic index order (i, j) with
//! i < j, so the same input order always produces the same pair sequence.


use bytes::Bytes;
use thiserror::Error;

/// An uploaded document: an opaque named byte blob.
///
/// Content is held in [`Bytes`] so every concurrent pair task can clone a
/// handle without copying the underlying bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Filename as supplied by the caller.
    pub name: String,
    /// Raw file content, immutable for the lifetime of the batch.
    pub content: Bytes,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// An unordered combination of two distinct documents, tagged with its
/// position in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// Zero-based generation index; outcome slots are keyed by this.
    pub index: usize,
    pub first: Document,
    pub second: Document,
}

#[derive(Debug, Error)]
pub enum PairError {
    /// Fewer than two documents were supplied; no pair can be formed.
    #[error("at least two documents are required, got {count}")]
    InsufficientInput { count: usize },
}

/// Generates every unique unordered pair of `documents`.
///
/// No document is paired with itself and no pair repeats.
pub fn generate_unique_pairs(documents: &[Document]) -> Result<Vec<Pair>, PairError> {
    if documents.len() < 2 {
        return Err(PairError::InsufficientInput {
            count: documents.len(),
        });
    }

    let mut pairs = Vec::with_capacity(documents.len() * (documents.len() - 1) / 2);
    for i in 0..documents.len() - 1 {
        for j in i + 1..documents.len() {
            pairs.push(Pair {
                index: pairs.len(),
                first: documents[i].clone(),
                second: documents[j].clone(),
            });
        }
    }

    Ok(pairs)
}
