/// Ranking stage: stable sort of indexed scores into an output order.
use std::cmp::Ordering;

use crate::pairing::{IndexedScore, SortKey};
use crate::types::{Direction, TieBreak};

/// Compare two keys for the output order.
///
/// Placement class decides first, so missing-worst always sorts after and
/// missing-best always sorts before every present value. Only present values are
/// subject to `direction`. Equal keys return `Equal` and are left to the tie-break.
pub fn compare_keys(a: &SortKey, b: &SortKey, direction: Direction) -> Ordering {
    match (a, b) {
        (SortKey::Present(x), SortKey::Present(y)) => {
            let ord = x.total_cmp(y);
            match direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        }
        _ => a.class().cmp(&b.class()),
    }
}

/// Sort `pairs` and return their original positions in output order.
///
/// O(n log n), stable. Tied elements keep their input order for both tie-break
/// variants.
pub fn rank(mut pairs: Vec<IndexedScore>, direction: Direction, tie_break: TieBreak) -> Vec<usize> {
    match tie_break {
        TieBreak::Stable | TieBreak::First => {
            pairs.sort_by(|a, b| compare_keys(&a.key(), &b.key(), direction));
        }
    }
    pairs.into_iter().map(|p| p.position()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::pair;
    use crate::types::{MissingPlacement, Score};

    fn run(scores: &[Score], missing: MissingPlacement, direction: Direction) -> Vec<usize> {
        rank(pair(scores, missing), direction, TieBreak::Stable)
    }

    #[test]
    fn test_ascending() {
        let scores = [Score::Value(3.0), Score::Value(1.0), Score::Value(2.0)];
        assert_eq!(run(&scores, MissingPlacement::Worst, Direction::Ascending), vec![1, 2, 0]);
    }

    #[test]
    fn test_descending() {
        let scores = [Score::Value(3.0), Score::Value(1.0), Score::Value(2.0)];
        assert_eq!(run(&scores, MissingPlacement::Worst, Direction::Descending), vec![0, 2, 1]);
    }

    #[test]
    fn test_missing_worst_stays_last_in_both_directions() {
        let scores = [Score::Value(5.0), Score::Missing, Score::Value(5.0)];
        assert_eq!(run(&scores, MissingPlacement::Worst, Direction::Ascending), vec![0, 2, 1]);
        assert_eq!(run(&scores, MissingPlacement::Worst, Direction::Descending), vec![0, 2, 1]);
    }

    #[test]
    fn test_missing_best_stays_first_in_both_directions() {
        let scores = [Score::Value(5.0), Score::Missing, Score::Value(5.0)];
        assert_eq!(run(&scores, MissingPlacement::Best, Direction::Ascending), vec![1, 0, 2]);
        assert_eq!(run(&scores, MissingPlacement::Best, Direction::Descending), vec![1, 0, 2]);
    }

    #[test]
    fn test_all_missing_is_identity() {
        let scores = [Score::Missing, Score::Missing];
        for missing in [MissingPlacement::Worst, MissingPlacement::Best] {
            for direction in [Direction::Ascending, Direction::Descending] {
                assert_eq!(run(&scores, missing, direction), vec![0, 1]);
            }
        }
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(run(&[], MissingPlacement::Worst, Direction::Ascending), Vec::<usize>::new());
        assert_eq!(run(&[Score::Value(9.0)], MissingPlacement::Worst, Direction::Descending), vec![0]);
    }

    #[test]
    fn test_real_infinities_sort_inside_missing() {
        // Missing-worst comes after a genuine +inf, even when descending puts +inf first.
        let scores = [Score::Missing, Score::Value(f64::INFINITY), Score::Value(f64::NEG_INFINITY)];
        assert_eq!(run(&scores, MissingPlacement::Worst, Direction::Ascending), vec![2, 1, 0]);
        assert_eq!(run(&scores, MissingPlacement::Worst, Direction::Descending), vec![1, 2, 0]);
        assert_eq!(run(&scores, MissingPlacement::Best, Direction::Ascending), vec![0, 2, 1]);
    }

    #[test]
    fn test_mixed_sign_with_signed_zero_ties() {
        let scores = [Score::Value(0.0), Score::Value(-2.0), Score::Value(-0.0), Score::Value(2.0)];
        assert_eq!(run(&scores, MissingPlacement::Worst, Direction::Ascending), vec![1, 0, 2, 3]);
        assert_eq!(run(&scores, MissingPlacement::Worst, Direction::Descending), vec![3, 0, 2, 1]);
    }

    #[test]
    fn test_first_matches_stable() {
        let scores = [Score::Value(2.0), Score::Value(1.0), Score::Value(2.0), Score::Missing, Score::Value(1.0)];
        let pairs = pair(&scores, MissingPlacement::Best);
        assert_eq!(
            rank(pairs.clone(), Direction::Descending, TieBreak::First),
            rank(pairs, Direction::Descending, TieBreak::Stable),
        );
    }

    #[test]
    fn test_compare_keys_missing_ignores_direction() {
        for direction in [Direction::Ascending, Direction::Descending] {
            assert_eq!(compare_keys(&SortKey::Worst, &SortKey::Present(1e300), direction), Ordering::Greater);
            assert_eq!(compare_keys(&SortKey::Best, &SortKey::Present(-1e300), direction), Ordering::Less);
            assert_eq!(compare_keys(&SortKey::Worst, &SortKey::Worst, direction), Ordering::Equal);
        }
    }
}
