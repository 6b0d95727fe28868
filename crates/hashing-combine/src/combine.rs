//! Hash-code combinators over sequences of optional values.
//!
//! Every entry point accepts `Option<I>`: an absent sequence is valid input
//! and folds to the base constant, exactly like an empty one.

use hashing_core::{EqualityComparer, HashingError, NativeComparer, Slot};

use crate::accumulator::Accumulator;
use crate::FoldConstants;

/// An absent sequence, usable with every combinator.
pub const NO_VALUES: Option<[Slot<'static>; 0]> = None;

/// Combines values with the 17/23/31 polynomial fold.
///
/// Each element multiplies the running hash by 23 and then adds its native
/// hash code, or 31 when absent. Element order therefore affects the result.
pub fn from_values<'a, I>(values: Option<I>) -> i32
where
    I: IntoIterator<Item = Slot<'a>>,
{
    from_values_with_constants(values, FoldConstants::LEGACY)
}

/// Same as [`from_values`] with caller supplied constants.
pub fn from_values_with_constants<'a, I>(values: Option<I>, constants: FoldConstants) -> i32
where
    I: IntoIterator<Item = Slot<'a>>,
{
    trace_constants(constants);
    let mut acc = Accumulator::new(constants);
    for value in values.into_iter().flatten() {
        acc.push_weighted(value.map(|value| value.native_hash()));
    }
    acc.finish()
}

/// Combines an ordered list using native hashing; see [`from_list_with`].
pub fn from_list<'a, I>(values: Option<I>) -> i32
where
    I: IntoIterator<Item = Slot<'a>>,
{
    list_fold(values, &NativeComparer, FoldConstants::LEGACY)
}

/// Combines an ordered list, hashing present elements with `comparer`.
///
/// The polynomial step is followed by adding the element's 1-based position,
/// so both contents and length are reflected in the result. An absent
/// sequence yields the base constant without consulting `comparer`.
///
/// # Errors
///
/// Returns [`HashingError::InvalidArgument`] when `values` is present and
/// `comparer` is `None`.
pub fn from_list_with<'a, I>(
    values: Option<I>,
    comparer: Option<&dyn EqualityComparer>,
) -> Result<i32, HashingError>
where
    I: IntoIterator<Item = Slot<'a>>,
{
    from_list_with_constants(values, comparer, FoldConstants::LEGACY)
}

/// Same as [`from_list_with`] with caller supplied constants.
pub fn from_list_with_constants<'a, I>(
    values: Option<I>,
    comparer: Option<&dyn EqualityComparer>,
    constants: FoldConstants,
) -> Result<i32, HashingError>
where
    I: IntoIterator<Item = Slot<'a>>,
{
    if values.is_none() {
        return Ok(constants.base);
    }
    let comparer = require_comparer(comparer, "from_list")?;
    trace_constants(constants);
    Ok(list_fold(values, comparer, constants))
}

/// Combines a set-like collection using native hashing; see [`from_set_with`].
pub fn from_set<'a, I>(values: Option<I>) -> i32
where
    I: IntoIterator<Item = Slot<'a>>,
{
    set_fold(values, &NativeComparer, FoldConstants::LEGACY)
}

/// Combines a set-like collection, hashing present elements with `comparer`.
///
/// Terms are xored into the base constant, so the result is independent of
/// element order. Duplicates are not removed; each one contributes its term.
///
/// # Errors
///
/// Returns [`HashingError::InvalidArgument`] when `values` is present and
/// `comparer` is `None`.
pub fn from_set_with<'a, I>(
    values: Option<I>,
    comparer: Option<&dyn EqualityComparer>,
) -> Result<i32, HashingError>
where
    I: IntoIterator<Item = Slot<'a>>,
{
    from_set_with_constants(values, comparer, FoldConstants::LEGACY)
}

/// Same as [`from_set_with`] with caller supplied constants.
pub fn from_set_with_constants<'a, I>(
    values: Option<I>,
    comparer: Option<&dyn EqualityComparer>,
    constants: FoldConstants,
) -> Result<i32, HashingError>
where
    I: IntoIterator<Item = Slot<'a>>,
{
    if values.is_none() {
        return Ok(constants.base);
    }
    let comparer = require_comparer(comparer, "from_set")?;
    trace_constants(constants);
    Ok(set_fold(values, comparer, constants))
}

fn list_fold<'a, I>(
    values: Option<I>,
    comparer: &dyn EqualityComparer,
    constants: FoldConstants,
) -> i32
where
    I: IntoIterator<Item = Slot<'a>>,
{
    let mut acc = Accumulator::new(constants);
    for (index, value) in values.into_iter().flatten().enumerate() {
        acc.push_weighted(value.map(|value| comparer.hash_code(Some(value))));
        acc.push_position(index + 1);
    }
    acc.finish()
}

fn set_fold<'a, I>(
    values: Option<I>,
    comparer: &dyn EqualityComparer,
    constants: FoldConstants,
) -> i32
where
    I: IntoIterator<Item = Slot<'a>>,
{
    let mut acc = Accumulator::new(constants);
    for value in values.into_iter().flatten() {
        acc.push_unordered(value.map(|value| comparer.hash_code(Some(value))));
    }
    acc.finish()
}

fn require_comparer<'c>(
    comparer: Option<&'c dyn EqualityComparer>,
    operation: &str,
) -> Result<&'c dyn EqualityComparer, HashingError> {
    comparer.ok_or_else(|| {
        tracing::debug!(operation, "rejected call without an equality comparer");
        HashingError::missing_comparer(operation)
    })
}

fn trace_constants(constants: FoldConstants) {
    if constants != FoldConstants::LEGACY {
        tracing::trace!(?constants, "folding with non-legacy constants");
    }
}
