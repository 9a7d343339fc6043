use std::collections::{HashMap, HashSet};

use crate::tokenizer::tokenize;
use crate::{Document, TermId};

/// Shared term vocabulary for one ranking request.
///
/// Term ids follow first-seen order across documents in corpus order,
/// so identical input always produces identical vectors. `df[t]` is the
/// number of distinct documents containing term `t` at least once.
#[derive(Debug, Default)]
pub struct Vocabulary {
    dictionary: HashMap<String, TermId>,
    df: Vec<u32>,
    num_docs: u32,
}

impl Vocabulary {
    /// Scan the full corpus and build the vocabulary with per-term
    /// document frequencies. An all-empty corpus yields an empty
    /// vocabulary; scoring degrades to zero rather than failing.
    pub fn build(corpus: &[Document]) -> Self {
        let mut dictionary: HashMap<String, TermId> = HashMap::new();
        let mut df: Vec<u32> = Vec::new();

        for doc in corpus {
            let mut seen_in_doc: HashSet<TermId> = HashSet::new();
            for term in tokenize(&doc.text) {
                let next_id = dictionary.len() as TermId;
                let tid = *dictionary.entry(term).or_insert_with(|| {
                    df.push(0);
                    next_id
                });
                if seen_in_doc.insert(tid) {
                    df[tid as usize] += 1;
                }
            }
        }

        tracing::debug!(
            num_docs = corpus.len(),
            num_terms = dictionary.len(),
            "built vocabulary"
        );

        Self { dictionary, df, num_docs: corpus.len() as u32 }
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.dictionary.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    pub fn num_docs(&self) -> u32 {
        self.num_docs
    }

    /// Distinct-document frequency for a term id.
    pub fn doc_frequency(&self, term_id: TermId) -> u32 {
        self.df.get(term_id as usize).copied().unwrap_or(0)
    }

    /// Smoothed inverse document frequency: `ln((1 + N) / (1 + df)) + 1`.
    /// Monotonically decreasing in df; the denominator never reaches zero.
    pub fn idf(&self, term_id: TermId) -> f32 {
        let n = self.num_docs as f32;
        let df_t = self.doc_frequency(term_id) as f32;
        ((1.0 + n) / (1.0 + df_t)).ln() + 1.0
    }
}
