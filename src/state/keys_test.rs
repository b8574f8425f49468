use super::*;
use uuid::Uuid;

fn key(active: bool) -> ApiKey {
    ApiKey {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        product_id: Uuid::new_v4(),
        order_id: Uuid::new_v4(),
        key: "sk-test".to_owned(),
        quota_limit: 1000,
        quota_used: 0,
        is_active: active,
    }
}

#[test]
fn apply_gates_on_the_ticket() {
    let mut state = ApiKeysState::default();
    let first = state.begin();
    let second = state.begin();

    assert!(!state.apply(first, vec![key(true)]));
    assert!(state.keys.is_empty());

    assert!(state.apply(second, vec![key(true), key(false)]));
    assert_eq!(state.keys.len(), 2);
    assert!(!state.loading);
}

#[test]
fn clear_invalidates_and_empties() {
    let mut state = ApiKeysState::default();
    let ticket = state.begin();
    state.clear();
    assert!(!state.apply(ticket, vec![key(true)]));
    assert!(state.keys.is_empty());
    assert!(!state.loading);
}
