/// Rank-order wrapper: pairing followed by ranking.
///
/// One function, one config struct. Pure function, no IO, no state.
use crate::pairing::pair;
use crate::ranking::rank;
use crate::types::{RankConfig, Score};

/// Compute the permutation of positions that sorts `scores` under `config`.
///
/// The result always has `scores.len()` entries and is a permutation of `0..n`.
pub fn sort_indices(scores: &[Score], config: &RankConfig) -> Vec<usize> {
    tracing::debug!(
        n = scores.len(),
        missing = scores.iter().filter(|s| s.is_missing()).count(),
        missing_placement = %config.missing_placement,
        direction = %config.direction,
        tie_break = %config.tie_break,
        "sorting indices by score"
    );

    let pairs = pair(scores, config.missing_placement);
    rank(pairs, config.direction, config.tie_break)
}

/// Invert an order into 1-based ranks: `ranks[position]` is where `position` landed.
///
/// `order` must be a permutation of `0..order.len()`, as returned by [`sort_indices`].
///
/// # Panics
///
/// Panics if `order` contains a position `>= order.len()`. A repeated position does not
/// panic but leaves some rank as `0`.
pub fn ranks_from_order(order: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0; order.len()];
    for (i, &position) in order.iter().enumerate() {
        ranks[position] = i + 1;
    }
    ranks
}
