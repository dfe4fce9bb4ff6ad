use std::fmt;
use std::str::FromStr;

use crate::error::{RankError, Result};

/// One input score: a real number or an explicit missing marker.
///
/// `NaN` never reaches the comparator as a number. Converting from `f64` maps it to
/// `Missing`, and with the `serde` feature a JSON `null` does the same.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<f64>", into = "Option<f64>")
)]
pub enum Score {
    Value(f64),
    Missing,
}

impl Score {
    pub fn is_missing(&self) -> bool {
        matches!(self, Score::Missing)
    }

    /// The numeric value, or `None` for a missing score.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Score::Value(v) => Some(v),
            Score::Missing => None,
        }
    }
}

impl From<f64> for Score {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Score::Missing
        } else {
            Score::Value(v)
        }
    }
}

impl From<Option<f64>> for Score {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Score::Missing, Score::from)
    }
}

impl From<Score> for Option<f64> {
    fn from(s: Score) -> Self {
        s.value()
    }
}

/// Where missing scores land, independent of sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MissingPlacement {
    /// Missing scores go to the back of the order.
    #[default]
    Worst,
    /// Missing scores go to the front of the order.
    Best,
}

impl MissingPlacement {
    /// Map an `na_worst`-style flag onto a placement.
    pub fn from_na_worst(na_worst: bool) -> Self {
        if na_worst {
            MissingPlacement::Worst
        } else {
            MissingPlacement::Best
        }
    }
}

/// Order in which present (non-missing) scores are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Map a `desc`-style flag onto a direction.
    pub fn from_desc(desc: bool) -> Self {
        if desc {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// How elements with equal sort keys are ordered relative to each other.
///
/// Both variants currently keep tied elements in input order. `First` is accepted so
/// callers passing a `ties.method = "first"` style setting get a defined answer; new
/// strategies (average, random) belong here as new variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TieBreak {
    #[default]
    Stable,
    First,
}

/// Configuration for one ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankConfig {
    pub missing_placement: MissingPlacement,
    pub direction: Direction,
    pub tie_break: TieBreak,
}

impl RankConfig {
    pub fn new(missing_placement: MissingPlacement, direction: Direction, tie_break: TieBreak) -> Self {
        RankConfig { missing_placement, direction, tie_break }
    }

    /// Build a config from free-form names, rejecting the first unknown one.
    pub fn parse(missing_placement: &str, direction: &str, tie_break: &str) -> Result<Self> {
        Ok(RankConfig {
            missing_placement: missing_placement.parse()?,
            direction: direction.parse()?,
            tie_break: tie_break.parse()?,
        })
    }
}

fn invalid(field: &'static str, value: &str, expected: &'static str) -> RankError {
    RankError::InvalidConfiguration {
        field,
        value: value.to_string(),
        expected,
    }
}

impl FromStr for MissingPlacement {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "worst" | "last" => Ok(MissingPlacement::Worst),
            "best" | "first" => Ok(MissingPlacement::Best),
            _ => Err(invalid("missing", s, "worst, best")),
        }
    }
}

impl FromStr for Direction {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(invalid("direction", s, "asc, desc")),
        }
    }
}

impl FromStr for TieBreak {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(TieBreak::Stable),
            "first" => Ok(TieBreak::First),
            _ => Err(invalid("ties", s, "stable, first")),
        }
    }
}

impl fmt::Display for MissingPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MissingPlacement::Worst => "worst",
            MissingPlacement::Best => "best",
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        })
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TieBreak::Stable => "stable",
            TieBreak::First => "first",
        })
    }
}
