/// Pairing stage: attach each score to its input position.
///
/// Missing scores are not turned into raw infinities. They become a tagged key whose
/// placement class is compared before any numeric value, so reversing the direction
/// reorders present values but never moves missing ones across them.
use crate::types::{MissingPlacement, Score};

/// Comparison key for one element.
///
/// Variant order is the placement order: `Best` before every present value, `Worst`
/// after every present value, regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey {
    Best,
    Present(f64),
    Worst,
}

impl SortKey {
    /// Rank class compared ahead of the value.
    pub(crate) fn class(&self) -> u8 {
        match self {
            SortKey::Best => 0,
            SortKey::Present(_) => 1,
            SortKey::Worst => 2,
        }
    }

    /// Numeric view of the key, with missing scores as `-inf` (best) or `+inf` (worst).
    pub fn sentinel_value(&self) -> f64 {
        match *self {
            SortKey::Best => f64::NEG_INFINITY,
            SortKey::Present(v) => v,
            SortKey::Worst => f64::INFINITY,
        }
    }

    pub fn is_missing(&self) -> bool {
        !matches!(self, SortKey::Present(_))
    }
}

/// An input position and its comparison key. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedScore {
    position: usize,
    key: SortKey,
}

impl IndexedScore {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn value(&self) -> f64 {
        self.key.sentinel_value()
    }
}

/// Pair every score with its 0-based position, tagging missing scores per `missing_placement`.
pub fn pair(scores: &[Score], missing_placement: MissingPlacement) -> Vec<IndexedScore> {
    let missing_key = match missing_placement {
        MissingPlacement::Worst => SortKey::Worst,
        MissingPlacement::Best => SortKey::Best,
    };

    scores
        .iter()
        .enumerate()
        .map(|(position, score)| {
            let key = match *score {
                // -0.0 and 0.0 must tie under total_cmp
                Score::Value(v) if v == 0.0 => SortKey::Present(0.0),
                Score::Value(v) if v.is_nan() => missing_key,
                Score::Value(v) => SortKey::Present(v),
                Score::Missing => missing_key,
            };
            IndexedScore { position, key }
        })
        .collect()
}
