#![cfg(feature = "serde")]

use fallible::{Completion, ErrorBox, Failure, Result, Success};

#[test]
fn result_uses_externally_tagged_variants() {
    let ok: Result<i32, String> = Success(1);
    let err: Result<i32, String> = Failure(String::from("bad"));

    assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Success":1}"#);
    assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"Failure":"bad"}"#);

    let back: Result<i32, String> = serde_json::from_str(r#"{"Failure":"bad"}"#).unwrap();
    assert_eq!(back, err);
}

#[test]
fn error_box_is_transparent() {
    let boxed = ErrorBox::new(7u8);
    assert_eq!(serde_json::to_string(&boxed).unwrap(), "7");
    let back: ErrorBox<u8> = serde_json::from_str("7").unwrap();
    assert_eq!(back, boxed);
}

#[test]
fn completion_stores_optional_error() {
    let done: Completion<String> = Completion::new();
    assert_eq!(serde_json::to_string(&done).unwrap(), r#"{"error":null}"#);

    let failed: Completion<String> = serde_json::from_str(r#"{"error":"fail"}"#).unwrap();
    assert_eq!(failed.error(), "fail");
}
