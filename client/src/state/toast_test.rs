use super::*;

#[test]
fn push_appends_distinct_ids() {
    let mut state = ToastState::default();
    state.error(SIGN_UP_ERROR, "Email already in use");
    state.error(LOG_OUT_ERROR, "Not logged in");
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "Email already in use");
}

#[test]
fn same_id_replaces_instead_of_stacking() {
    let mut state = ToastState::default();
    state.error(SIGN_UP_ERROR, "Email already in use");
    state.error(LOG_IN_ERROR, "Wrong password");
    state.error(SIGN_UP_ERROR, "Username taken");
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].id, SIGN_UP_ERROR);
    assert_eq!(state.toasts[0].message, "Username taken");
}

#[test]
fn dismiss_removes_by_id() {
    let mut state = ToastState::default();
    state.error(SIGN_UP_ERROR, "a");
    state.error(LOG_OUT_ERROR, "b");
    state.dismiss(SIGN_UP_ERROR);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, LOG_OUT_ERROR);
}

#[test]
fn expire_ignores_replaced_toast() {
    let mut state = ToastState::default();
    let first = state.error(LOG_IN_ERROR, "Wrong password");
    let second = state.error(LOG_IN_ERROR, "Wrong password");
    assert_ne!(first, second);

    state.expire(LOG_IN_ERROR, first);
    assert_eq!(state.toasts.len(), 1);

    state.expire(LOG_IN_ERROR, second);
    assert!(state.toasts.is_empty());
}

#[test]
fn newest_first_reverses_order() {
    let mut state = ToastState::default();
    state.error("one", "1");
    state.error("two", "2");
    let ids: Vec<_> = state.newest_first().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["two".to_owned(), "one".to_owned()]);
}
