use super::*;

#[test]
fn push_assigns_unique_ids() {
    let mut state = NotifyState::default();
    let a = state.push(NoticeLevel::Info, "one");
    let b = state.push(NoticeLevel::Error, "two");
    assert_ne!(a, b);
    assert_eq!(state.notices.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NotifyState::default();
    let a = state.push(NoticeLevel::Info, "one");
    let b = state.push(NoticeLevel::Success, "two");

    state.dismiss(a);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, b);

    // Double dismissal is harmless.
    state.dismiss(a);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = NotifyState::default();
    let a = state.push(NoticeLevel::Info, "one");
    state.dismiss(a);
    let b = state.push(NoticeLevel::Info, "again");
    assert_ne!(a, b);
}
