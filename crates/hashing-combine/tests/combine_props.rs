use hashing_combine::{
    from_list, from_set, from_values, from_values_with_constants, FoldConstants, HashValue, Slot,
};
use proptest::prelude::*;

fn slots(values: &[Option<i64>]) -> Vec<Slot<'_>> {
    values
        .iter()
        .map(|value| value.as_ref().map(|value| value as &dyn HashValue))
        .collect()
}

fn reference_list_fold(values: &[Option<i64>]) -> i32 {
    let mut hash: i32 = 17;
    for (index, value) in values.iter().enumerate() {
        let term = value.as_ref().map_or(31, |value| value.native_hash());
        hash = hash.wrapping_mul(23).wrapping_add(term);
        hash = hash.wrapping_add(index as i32 + 1);
    }
    hash
}

proptest! {
    #[test]
    fn from_values_is_reproducible(values in prop::collection::vec(prop::option::of(any::<i64>()), 0..16)) {
        prop_assert_eq!(from_values(Some(slots(&values))), from_values(Some(slots(&values))));
    }

    #[test]
    fn from_list_matches_reference_fold(values in prop::collection::vec(prop::option::of(any::<i64>()), 0..16)) {
        prop_assert_eq!(from_list(Some(slots(&values))), reference_list_fold(&values));
    }

    #[test]
    fn from_set_ignores_order(
        (values, shuffled) in prop::collection::vec(prop::option::of(any::<i64>()), 0..16)
            .prop_flat_map(|values| (Just(values.clone()), Just(values).prop_shuffle()))
    ) {
        prop_assert_eq!(from_set(Some(slots(&values))), from_set(Some(slots(&shuffled))));
    }

    #[test]
    fn legacy_constants_are_the_default(values in prop::collection::vec(prop::option::of(any::<i64>()), 0..16)) {
        prop_assert_eq!(
            from_values_with_constants(Some(slots(&values)), FoldConstants::default()),
            from_values(Some(slots(&values)))
        );
    }
}
