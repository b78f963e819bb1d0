use fixarray::{array, Array};

#[test]
fn roundtrip() {
    let a: Array<Array<u8, 2>, 2> = array![array![1, 2], array![3, 4]];
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "[[1,2],[3,4]]");
    assert_eq!(serde_json::from_str::<Array<Array<u8, 2>, 2>>(&json).unwrap(), a);
}

#[test]
fn wrong_length() {
    let err = serde_json::from_str::<Array<String, 2>>(r#"["a"]"#).unwrap_err();
    assert!(err.to_string().contains("invalid length 1"));
    assert!(serde_json::from_str::<Array<i8, 1>>("[1,2]").is_err());
}
