//! Ranking of aggregated term scores.

use super::vocab::Vocabulary;
use std::cmp::Ordering;

/// Order by descending score, then by ascending vocabulary id
fn compare(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Rank `(term id, score)` pairs deterministically.
///
/// Ties go to the term encountered first in the corpus. Non-finite
/// scores rank as zero.
pub fn rank(scores: impl IntoIterator<Item = (usize, f64)>) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores
        .into_iter()
        .map(|(term, score)| (term, if score.is_finite() { score } else { 0.0 }))
        .collect();
    ranked.sort_unstable_by(compare);
    ranked
}

/// The `top_k` best terms as strings; all of them if fewer exist
pub fn select_top_k(
    scores: impl IntoIterator<Item = (usize, f64)>,
    vocabulary: &Vocabulary,
    top_k: usize,
) -> Vec<String> {
    rank(scores)
        .into_iter()
        .take(top_k)
        .filter_map(|(term, _)| vocabulary.term(term).map(str::to_string))
        .collect()
}
