//! Floating-point values for the `Eq`-bound value model.

use std::hash::{Hash, Hasher};

/// An `f64` with total equality, so it can be used as a [`HashValue`](crate::HashValue).
///
/// `0.0` and `-0.0` are equal, and every NaN equals every other NaN. All
/// other values compare by bit pattern, which for finite values matches `==`.
#[derive(Debug, Clone, Copy)]
pub struct Float(pub f64);

impl Float {
    fn canonical_bits(self) -> u64 {
        if self.0 == 0.0 {
            0
        } else if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.canonical_bits());
    }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        Float(value)
    }
}

impl From<f32> for Float {
    fn from(value: f32) -> Self {
        Float(f64::from(value))
    }
}
