#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// How long a notice stays on screen.
pub const DISMISS_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// CSS modifier for the notice element.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Warning => "notice notice--warning",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

/// One transient user-facing notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Queue of visible notices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyState {
    pub notices: Vec<Notice>,
    next_id: u64,
}

impl NotifyState {
    /// Append a notice; returns its id for later dismissal.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice { id, level, message: message.into() });
        id
    }

    /// Remove a notice by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}

/// Show a notice and schedule its auto-dismissal.
pub fn notify(state: RwSignal<NotifyState>, level: NoticeLevel, message: impl Into<String>) {
    let Some(id) = state.try_update(|s| s.push(level, message)) else {
        return;
    };
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_MS)).await;
        state.update(|s| s.dismiss(id));
    });
}
