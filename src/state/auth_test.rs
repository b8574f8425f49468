use super::*;

#[test]
fn default_is_unauthenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn authenticated_iff_token_non_empty() {
    let mut state = AuthState::default();
    state.apply_token("abc123".to_owned());
    assert!(state.is_authenticated());

    state.logout();
    assert!(!state.is_authenticated());
    assert_eq!(state.token, "");
}

#[test]
fn apply_token_drops_the_stale_profile() {
    let mut state = AuthState {
        token: "old".to_owned(),
        user: Some(User { email: Some("a@b.c".to_owned()), ..User::default() }),
    };
    state.apply_token("new".to_owned());
    assert_eq!(state.token, "new");
    assert!(state.user.is_none());
}

#[test]
fn logout_clears_token_and_user() {
    let mut state = AuthState {
        token: "abc".to_owned(),
        user: Some(User::default()),
    };
    state.logout();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn admin_requires_the_admin_role() {
    let mut state = AuthState {
        token: "abc".to_owned(),
        user: Some(User { role: Some("customer".to_owned()), ..User::default() }),
    };
    assert!(!state.is_admin());

    state.user = Some(User { role: Some("admin".to_owned()), ..User::default() });
    assert!(state.is_admin());

    state.user = None;
    assert!(!state.is_admin());
}
