//! Pure TF-IDF scoring core for resume ranking.
//!
//! One ranking request is a stateless batch computation: the reference
//! document (a job description) and the candidate documents (resumes)
//! form a corpus, a fresh [`Vocabulary`] is built over it, every
//! document becomes a TF-IDF feature vector, and candidates are ordered
//! by cosine similarity to the reference. Nothing is shared between
//! calls, so concurrent requests need no locking.

use serde::{Deserialize, Serialize};

pub mod scoring;
pub mod tokenizer;
pub mod vocabulary;

pub use scoring::rank;
pub use vocabulary::Vocabulary;

pub type TermId = u32;

/// A named document with its extracted plain text (possibly empty).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }
}

/// One ranking entry: candidate name and its similarity to the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentScore {
    pub name: String,
    pub score: f32,
}
