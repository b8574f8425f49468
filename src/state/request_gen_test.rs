use super::*;

#[test]
fn ticket_is_current_until_superseded() {
    let mut current = RequestGen::default();
    let first = current.begin();
    assert!(current.is_current(first));

    let second = current.begin();
    assert!(!current.is_current(first));
    assert!(current.is_current(second));
}

#[test]
fn default_ticket_never_matches_a_begun_request() {
    let mut current = RequestGen::default();
    let stale = RequestGen::default();
    let live = current.begin();
    assert!(!current.is_current(stale));
    assert!(current.is_current(live));
}
