use super::*;

#[test]
fn paths_match_router_segments() {
    assert_eq!(AppRoute::Home.path(), "/");
    assert_eq!(AppRoute::Login.path(), "/login");
    assert_eq!(AppRoute::Register.path(), "/register");
}
