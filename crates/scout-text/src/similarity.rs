//! Cosine similarity between term vectors.

use crate::vector::TermVector;

/// Cosine similarity of two term-frequency vectors.
///
/// Returns a value in `[0, 1]`, and 0 whenever either vector is empty. The result is
/// symmetric in its arguments.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Counts are non-negative, so only float error can push the ratio past 1.
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}
