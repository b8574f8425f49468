use super::*;
use uuid::Uuid;

fn order(status: &str, total: f64) -> Order {
    Order {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        shipping_address: None,
        total_amount: total,
        status: status.to_owned(),
        items: Vec::new(),
        api_keys: Vec::new(),
    }
}

#[test]
fn stale_list_response_is_discarded() {
    let mut state = OrdersState::default();
    let first = state.begin_list();
    let second = state.begin_list();

    assert!(!state.apply_list(first, vec![order("pending", 1.0)]));
    assert!(state.list.is_empty());

    assert!(state.apply_list(second, vec![order("paid", 2.0)]));
    assert_eq!(state.list.len(), 1);
    assert_eq!(state.list[0].status, "paid");
    assert!(!state.list_loading);
}

#[test]
fn begin_detail_drops_the_previous_order() {
    let mut state = OrdersState::default();
    let ticket = state.begin_detail();
    assert!(state.apply_detail(ticket, order("paid", 10.0)));
    assert!(state.detail.is_some());

    // Navigating to another order clears the stale detail right away.
    let _next = state.begin_detail();
    assert!(state.detail.is_none());
    assert!(state.detail_loading);
}

#[test]
fn detail_and_list_generations_are_independent() {
    let mut state = OrdersState::default();
    let list_ticket = state.begin_list();
    let detail_ticket = state.begin_detail();

    // A newer detail fetch must not invalidate the list fetch.
    let _newer_detail = state.begin_detail();
    assert!(state.apply_list(list_ticket, vec![order("pending", 5.0)]));
    assert!(!state.apply_detail(detail_ticket, order("pending", 5.0)));
}

#[test]
fn clear_resets_everything_and_invalidates_tickets() {
    let mut state = OrdersState::default();
    let list_ticket = state.begin_list();
    let detail_ticket = state.begin_detail();

    state.clear();
    assert!(!state.apply_list(list_ticket, vec![order("paid", 1.0)]));
    assert!(!state.apply_detail(detail_ticket, order("paid", 1.0)));
    assert!(state.list.is_empty());
    assert!(state.detail.is_none());
    assert!(!state.list_loading);
    assert!(!state.detail_loading);
}
