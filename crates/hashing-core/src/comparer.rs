//! Equality/hash strategies accepted by the list and set combinators.

use crate::HashValue;

/// Pluggable equality and hashing strategy over optional values.
///
/// Implementations must keep the usual contract: values that compare equal
/// produce equal hash codes.
pub trait EqualityComparer: Send + Sync {
    /// Returns whether `left` and `right` are considered equal.
    fn equals(&self, left: Option<&dyn HashValue>, right: Option<&dyn HashValue>) -> bool;

    /// Returns the hash code for `value`.
    fn hash_code(&self, value: Option<&dyn HashValue>) -> i32;
}

/// Strategy delegating to each value's native equality and hash code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeComparer;

impl EqualityComparer for NativeComparer {
    fn equals(&self, left: Option<&dyn HashValue>, right: Option<&dyn HashValue>) -> bool {
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => left.native_eq(right),
            _ => false,
        }
    }

    fn hash_code(&self, value: Option<&dyn HashValue>) -> i32 {
        value.map_or(0, |value| value.native_hash())
    }
}
