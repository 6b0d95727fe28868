#![deny(missing_docs)]
#![doc = "Value model, native hashing and comparer contracts shared by the hashing crates."]

pub mod comparer;
pub mod errors;
mod float;
pub mod native;
mod value;

pub use comparer::{EqualityComparer, NativeComparer};
pub use errors::{ErrorInfo, HashingError};
pub use float::Float;
pub use native::{fold_digest, native_hash};
pub use value::{HashValue, Slot};
