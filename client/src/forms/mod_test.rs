use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    A,
    B,
}

#[test]
fn new_is_empty() {
    let errors = FieldErrors::<Field>::new();
    assert!(errors.is_empty());
    assert_eq!(errors.get(Field::A), None);
}

#[test]
fn set_overwrites_previous_message() {
    let mut errors = FieldErrors::new();
    errors.set(Field::A, "first");
    errors.set(Field::A, "second");
    assert_eq!(errors.get(Field::A), Some("second"));
    assert!(!errors.has(Field::B));
}

#[test]
fn fields_are_independent() {
    let mut errors = FieldErrors::new();
    errors.set(Field::B, "b");
    assert!(!errors.has(Field::A));
    assert!(errors.has(Field::B));
    assert!(!errors.is_empty());
}
