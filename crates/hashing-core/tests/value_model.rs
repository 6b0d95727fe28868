use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use hashing_core::{EqualityComparer, HashValue, NativeComparer};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Point {
    x: i64,
    y: i64,
}

#[test]
fn text_detection_covers_string_types() {
    let owned = String::from("Foo");
    let boxed = Box::<str>::from("Foo");
    let shared = Arc::<str>::from("Foo");
    let local = Rc::<str>::from("Foo");
    let cow = Cow::<'static, str>::Borrowed("Foo");
    let values: [&dyn HashValue; 6] = [&owned, &"Foo", &boxed, &shared, &local, &cow];
    for value in values {
        assert_eq!(value.as_text(), Some("Foo"), "{value:?}");
    }
}

#[test]
fn non_text_values_are_not_text() {
    assert_eq!(65_i32.as_text(), None);
    assert_eq!('A'.as_text(), None);
    assert_eq!(Point { x: 1, y: 2 }.as_text(), None);
}

#[test]
fn native_eq_requires_same_concrete_type() {
    assert!(5_i32.native_eq(&5_i32));
    assert!(!5_i32.native_eq(&6_i32));
    assert!(!5_i32.native_eq(&5_i64));
    assert!(!65_i32.native_eq(&"A"));
    assert!(!String::from("A").native_eq(&"A"));
    assert!(Point { x: 1, y: 2 }.native_eq(&Point { x: 1, y: 2 }));
}

#[test]
fn native_comparer_handles_absence() {
    let comparer = NativeComparer;
    assert!(comparer.equals(None, None));
    assert!(!comparer.equals(None, Some(&"Foo")));
    assert!(!comparer.equals(Some(&"Foo"), None));
    assert_eq!(comparer.hash_code(None), 0);
    assert_eq!(comparer.hash_code(Some(&"Foo")), "Foo".native_hash());
}

#[test]
fn native_comparer_is_case_sensitive_for_text() {
    let comparer = NativeComparer;
    assert!(comparer.equals(Some(&"Foo"), Some(&"Foo")));
    assert!(!comparer.equals(Some(&"Foo"), Some(&"FOO")));
}

proptest! {
    #[test]
    fn equal_values_share_native_hash(x in any::<i64>(), y in any::<i64>()) {
        let a = Point { x, y };
        let b = a.clone();
        prop_assert!(a.native_eq(&b));
        prop_assert_eq!(a.native_hash(), b.native_hash());
        prop_assert_eq!(NativeComparer.hash_code(Some(&a)), NativeComparer.hash_code(Some(&b)));
    }
}
