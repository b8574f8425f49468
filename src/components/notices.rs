//! Transient notice list; entries auto-dismiss, clicking dismisses
//! immediately.

use leptos::prelude::*;

use crate::state::notify::NotifyState;

#[component]
pub fn NoticeList() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="notice-list">
            <For
                each=move || notices.get().notices
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=notice.level.class()
                            on:click=move |_| notices.update(|s| s.dismiss(id))
                        >
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
