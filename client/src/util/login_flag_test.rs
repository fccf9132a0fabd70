use super::*;

#[test]
fn encode_flag_writes_string_booleans() {
    assert_eq!(encode_flag(true), "true");
    assert_eq!(encode_flag(false), "false");
}

#[test]
fn decode_flag_only_accepts_exact_true() {
    assert!(decode_flag(Some("true")));
    assert!(!decode_flag(Some("false")));
    assert!(!decode_flag(Some("TRUE")));
    assert!(!decode_flag(Some("1")));
    assert!(!decode_flag(None));
}

#[test]
fn storage_key_is_is_logged_in() {
    assert_eq!(STORAGE_KEY, "isLoggedIn");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_flag_is_inert_outside_browser() {
    let flag = BrowserLoginFlag;
    flag.set(true);
    assert!(!flag.is_set());
}

#[test]
fn memory_flag_round_trips() {
    let flag = MemoryLoginFlag::new(false);
    flag.set(true);
    assert!(flag.is_set());
    flag.set(false);
    assert!(!flag.is_set());
}

#[test]
fn memory_flag_clones_share_state() {
    let flag = MemoryLoginFlag::new(false);
    let other = flag.clone();
    other.set(true);
    assert!(flag.is_set());
}
