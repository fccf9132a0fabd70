use super::*;

#[test]
fn input_class_marks_errors() {
    assert!(input_class(true).ends_with(" input-error"));
    assert!(!input_class(false).contains("input-error"));
}
