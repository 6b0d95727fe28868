#![deny(missing_docs)]
#![doc = "Conditional equality comparer: string policies for text, native equality for everything else."]

mod conditional;
pub mod policy;

pub use conditional::ConditionalComparer;
pub use policy::ComparisonPolicy;
