//! The object-safe value model consumed by combinators and comparers.

use std::any::Any;
use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

use crate::native;

/// One element of a combinator input; `None` is an absent value.
pub type Slot<'a> = Option<&'a dyn HashValue>;

/// An arbitrary value that can take part in hash combination.
///
/// Every `T: Hash + Eq + Debug + 'static` implements this trait, so
/// heterogeneous values can be mixed in a single sequence of
/// `Option<&dyn HashValue>` slots, `None` standing for an absent value.
/// Floating-point numbers are not `Eq`; wrap them in [`Float`](crate::Float).
pub trait HashValue: Debug + 'static {
    /// Returns the value's own hash code.
    fn native_hash(&self) -> i32;

    /// Returns `true` when `other` has the same concrete type and compares equal.
    fn native_eq(&self, other: &dyn HashValue) -> bool;

    /// Returns the text when the value is one of the supported string types.
    fn as_text(&self) -> Option<&str>;

    /// Upcasts to [`Any`] for concrete-type inspection.
    fn as_any(&self) -> &dyn Any;
}

impl<T> HashValue for T
where
    T: Hash + Eq + Debug + 'static,
{
    fn native_hash(&self) -> i32 {
        native::native_hash(self)
    }

    fn native_eq(&self, other: &dyn HashValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn as_text(&self) -> Option<&str> {
        text_of(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn text_of(value: &dyn Any) -> Option<&str> {
    if let Some(text) = value.downcast_ref::<String>() {
        return Some(text.as_str());
    }
    if let Some(text) = value.downcast_ref::<&'static str>() {
        return Some(*text);
    }
    if let Some(text) = value.downcast_ref::<Box<str>>() {
        return Some(&**text);
    }
    if let Some(text) = value.downcast_ref::<Arc<str>>() {
        return Some(&**text);
    }
    if let Some(text) = value.downcast_ref::<Rc<str>>() {
        return Some(&**text);
    }
    value
        .downcast_ref::<Cow<'static, str>>()
        .map(|text| text.as_ref())
}
