/// Builds an array of [`Slot`](hashing_core::Slot)s from heterogeneous values.
///
/// The bare token `null` produces an absent slot; every other item is
/// borrowed, so it must outlive the array.
///
/// ```
/// use hashing_combine::{from_list, values};
///
/// let name = String::from("Foo");
/// let slots = values![name, null, 123];
/// assert_eq!(slots.len(), 3);
/// assert!(slots[1].is_none());
/// let _ = from_list(Some(slots));
/// ```
#[macro_export]
macro_rules! values {
    (@slots []) => {{
        let empty: [$crate::Slot<'static>; 0] = [];
        empty
    }};
    (@slots [$($slots:expr,)*]) => {
        [$($slots),*]
    };
    (@slots [$($slots:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::values!(@slots [$($slots,)* ::core::option::Option::None::<&dyn $crate::HashValue>,] $($($rest)*)?)
    };
    (@slots [$($slots:expr,)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::values!(
            @slots [$($slots,)* ::core::option::Option::Some(&$value as &dyn $crate::HashValue),]
            $($($rest)*)?
        )
    };
    ($($items:tt)*) => {
        $crate::values!(@slots [] $($items)*)
    };
}

/// Variadic form of [`from_values`](crate::from_values).
///
/// ```
/// use hashing_combine::hash_code;
///
/// assert_eq!(hash_code!["Foo", null, 123], hash_code!["Foo", null, 123]);
/// assert_eq!(hash_code![], 17);
/// ```
#[macro_export]
macro_rules! hash_code {
    ($($items:tt)*) => {
        $crate::from_values(::core::option::Option::Some($crate::values!($($items)*)))
    };
}
