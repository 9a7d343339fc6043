use crate::tokenizer::tokenize;
use crate::vocabulary::Vocabulary;
use crate::{Document, DocumentScore, TermId};

/// TF-IDF feature vector for one document, indexed by term id. All
/// vectors built from the same vocabulary share length and index
/// assignment.
pub fn feature_vector(vocabulary: &Vocabulary, document: &Document) -> Vec<f32> {
    let mut tf = vec![0u32; vocabulary.len()];
    for term in tokenize(&document.text) {
        if let Some(tid) = vocabulary.term_id(&term) {
            tf[tid as usize] += 1;
        }
    }
    tf.iter()
        .enumerate()
        .map(|(tid, &count)| count as f32 * vocabulary.idf(tid as TermId))
        .collect()
}

/// Cosine similarity; 0.0 when either vector has zero norm (no lexical
/// overlap possible to measure).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Rank candidates against the reference by TF-IDF cosine similarity.
///
/// Returns exactly one entry per candidate, sorted by score descending;
/// exact ties keep the candidates' input order. The computation is a
/// pure function of its input: no corpus state survives the call. Empty
/// candidate lists and empty texts are valid degenerate inputs, never
/// errors.
pub fn rank(reference: &Document, candidates: &[Document]) -> Vec<DocumentScore> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut corpus = Vec::with_capacity(candidates.len() + 1);
    corpus.push(reference.clone());
    corpus.extend_from_slice(candidates);

    let vocabulary = Vocabulary::build(&corpus);
    let reference_vec = feature_vector(&vocabulary, reference);

    let mut scores: Vec<DocumentScore> = candidates
        .iter()
        .map(|candidate| {
            let candidate_vec = feature_vector(&vocabulary, candidate);
            // Weights are non-negative, so cosine lands in [0, 1] up to
            // rounding; clamp the overshoot.
            let score = cosine_similarity(&reference_vec, &candidate_vec).clamp(0.0, 1.0);
            DocumentScore { name: candidate.name.clone(), score }
        })
        .collect();

    // Vec::sort_by is stable: equal scores keep input order.
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scores
}
