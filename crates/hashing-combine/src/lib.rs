#![deny(missing_docs)]
#![doc = "Deterministic hash-code combinators for heterogeneous, possibly absent values."]

mod accumulator;
pub mod combine;
mod constants;
mod macros;

pub use combine::{
    from_list, from_list_with, from_list_with_constants, from_set, from_set_with,
    from_set_with_constants, from_values, from_values_with_constants, NO_VALUES,
};
pub use constants::FoldConstants;
pub use hashing_core::{EqualityComparer, HashValue, HashingError, NativeComparer, Slot};
