//! Ordering by felt time.

use super::candidate::{CandidateError, RouteCandidate};
use super::score::{RouteScore, Scorer};

/// Sort scored items by ascending felt time.
///
/// The sort is stable: equal totals keep their input order.
pub fn rank_by_felt_time<T>(mut scored: Vec<(T, RouteScore)>) -> Vec<(T, RouteScore)> {
    scored.sort_by(|a, b| a.1.total_seconds.total_cmp(&b.1.total_seconds));
    scored
}

/// Score every candidate and order them best-first.
///
/// Fails on the first candidate with a malformed segment.
pub fn rank_candidates(
    scorer: &Scorer<'_>,
    candidates: Vec<RouteCandidate>,
) -> Result<Vec<(RouteCandidate, RouteScore)>, CandidateError> {
    let scored = candidates
        .into_iter()
        .map(|candidate| {
            let segments = candidate.to_segments()?;
            let score = scorer.score_route(&segments);
            Ok((candidate, score))
        })
        .collect::<Result<Vec<_>, CandidateError>>()?;

    Ok(rank_by_felt_time(scored))
}
