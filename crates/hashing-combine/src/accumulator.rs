use crate::FoldConstants;

/// Running hash threaded through a single fold.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator {
    hash: i32,
    constants: FoldConstants,
}

impl Accumulator {
    pub(crate) fn new(constants: FoldConstants) -> Self {
        Self {
            hash: constants.base,
            constants,
        }
    }

    /// Multiply-then-add step; `None` contributes the null term.
    pub(crate) fn push_weighted(&mut self, term: Option<i32>) {
        let term = term.unwrap_or(self.constants.null);
        self.hash = self
            .hash
            .wrapping_mul(self.constants.iteration)
            .wrapping_add(term);
    }

    /// Adds the 1-based position of the element just folded in.
    pub(crate) fn push_position(&mut self, position: usize) {
        self.hash = self.hash.wrapping_add(position as i32);
    }

    pub(crate) fn push_unordered(&mut self, term: Option<i32>) {
        self.hash ^= term.unwrap_or(self.constants.null);
    }

    pub(crate) fn finish(self) -> i32 {
        self.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_step_wraps_instead_of_overflowing() {
        let mut acc = Accumulator::new(FoldConstants::new(i32::MAX, 23, 31));
        acc.push_weighted(Some(i32::MAX));
        assert_eq!(acc.finish(), i32::MAX.wrapping_mul(23).wrapping_add(i32::MAX));
    }

    #[test]
    fn unordered_step_cancels_pairs() {
        let mut acc = Accumulator::new(FoldConstants::LEGACY);
        acc.push_unordered(Some(99));
        acc.push_unordered(Some(99));
        assert_eq!(acc.finish(), 17);
    }
}
