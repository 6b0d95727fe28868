//! Fold constants shared by the polynomial and xor combinators.

use serde::{Deserialize, Serialize};

/// Constants driving every combinator fold.
///
/// The values only need to be prime-ish and distinct; [`FoldConstants::LEGACY`]
/// must be used wherever hash codes are persisted or compared across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoldConstants {
    /// Starting value of the accumulator.
    pub base: i32,
    /// Multiplier applied before each element in the positional folds.
    pub iteration: i32,
    /// Term contributed by an absent element.
    pub null: i32,
}

impl FoldConstants {
    /// The 17/23/31 constants every persisted hash code was produced with.
    pub const LEGACY: FoldConstants = FoldConstants::new(17, 23, 31);

    /// Creates a new constant set.
    pub const fn new(base: i32, iteration: i32, null: i32) -> Self {
        Self {
            base,
            iteration,
            null,
        }
    }
}

impl Default for FoldConstants {
    fn default() -> Self {
        Self::LEGACY
    }
}
