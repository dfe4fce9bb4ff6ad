//! rankorder-core: Pure-computation rank-order engine.
//!
//! Scores (possibly missing) → tagged (position, key) pairs → stable sort → positions.
//! No IO, no global state. Missing scores land at the front or back by policy, never
//! by accident of sort direction.
//!
//! # Quick start
//!
//! ```rust
//! use rankorder_core::{sort_indices, Direction, MissingPlacement, RankConfig, Score, TieBreak};
//!
//! let scores = vec![Score::Value(3.0), Score::Missing, Score::Value(1.0), Score::Value(3.0)];
//!
//! let config = RankConfig::new(MissingPlacement::Worst, Direction::Descending, TieBreak::Stable);
//! let order = sort_indices(&scores, &config);
//!
//! // Highest first, ties in input order, missing last even when descending.
//! assert_eq!(order, vec![0, 3, 2, 1]);
//! ```

pub mod error;
pub mod order;
pub mod pairing;
pub mod ranking;
pub mod types;

// Re-export primary public API at crate root.
pub use error::{RankError, Result};
pub use order::{ranks_from_order, sort_indices};
pub use pairing::{pair, IndexedScore, SortKey};
pub use ranking::{compare_keys, rank};
pub use types::{Direction, MissingPlacement, RankConfig, Score, TieBreak};
