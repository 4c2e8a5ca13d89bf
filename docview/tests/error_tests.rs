use docview::{DocError, OptionalExt, Shape};

#[test]
fn error_display_shape_mismatch_without_member() {
    let err = DocError::shape_mismatch(Shape::Array, None, &"{}");
    assert_eq!(format!("{err}"), "this is not an array: {}");
}

#[test]
fn error_display_shape_mismatch_with_member() {
    let err = DocError::shape_mismatch(Shape::Object, Some("meta"), &"[]");
    assert_eq!(format!("{err}"), "element [meta] is not an object: []");
}

#[test]
fn error_display_missing_member() {
    let err = DocError::missing_member("id", &"{}");
    assert_eq!(format!("{err}"), "element [id] is not a member of: {}");
}

#[test]
fn error_display_malformed_date() {
    let err = DocError::malformed_date("from", "2024", "expected YYYY-MM-DD");
    let msg = format!("{err}");
    assert!(msg.contains("[from]"));
    assert!(msg.contains("2024"));
    assert!(msg.contains("expected YYYY-MM-DD"));
}

#[test]
fn absence_covers_shape_and_membership_only() {
    assert!(DocError::shape_mismatch(Shape::Object, None, &"1").is_absence());
    assert!(DocError::missing_member("a", &"{}").is_absence());
    assert!(!DocError::type_mismatch("an integer", Some("a"), &"true").is_absence());
    assert!(!DocError::malformed_date("a", "x", "bad").is_absence());
}

#[test]
fn member_accessor() {
    assert_eq!(DocError::missing_member("a", &"{}").member(), Some("a"));
    assert_eq!(DocError::type_mismatch("a string", None, &"1").member(), None);
}

#[test]
fn optional_passes_through_values_and_malformed_errors() {
    let ok: Result<i32, DocError> = Ok(3);
    assert_eq!(ok.optional().unwrap(), Some(3));

    let malformed: Result<i32, DocError> = Err(DocError::type_mismatch("an integer", None, &"x"));
    assert!(malformed.optional().is_err());
}

#[test]
fn error_is_debug_and_clone() {
    let err = DocError::missing_member("a", &"{}");
    let _ = format!("{:?}", err.clone());
}
