use hashing_combine::{
    from_list_with_constants, from_set_with_constants, from_values_with_constants, values,
    FoldConstants, NativeComparer, NO_VALUES,
};

#[test]
fn legacy_constants_wire_shape() {
    let json = serde_json::to_value(FoldConstants::LEGACY).expect("serialize");
    assert_eq!(json, serde_json::json!({ "base": 17, "iteration": 23, "null": 31 }));

    let decoded: FoldConstants =
        serde_json::from_str(r#"{"base":5,"iteration":7,"null":11}"#).expect("deserialize");
    assert_eq!(decoded, FoldConstants::new(5, 7, 11));
}

#[test]
fn custom_constants_drive_every_fold() {
    let constants = FoldConstants::new(5, 7, 11);
    let slots = values![null, null];
    assert_eq!(from_values_with_constants(Some(slots), constants), (5 * 7 + 11) * 7 + 11);
    assert_eq!(
        from_list_with_constants(Some(slots), Some(&NativeComparer), constants),
        Ok(((5 * 7 + 11 + 1) * 7 + 11) + 2)
    );
    assert_eq!(from_set_with_constants(Some(slots), Some(&NativeComparer), constants), Ok(5));
    assert_eq!(from_list_with_constants(NO_VALUES, None, constants), Ok(5));
}
