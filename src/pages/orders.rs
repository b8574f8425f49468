//! Order history page.

use leptos::prelude::*;

use crate::app::handle_api_error;
use crate::net::api::Api;
use crate::router::{self, Route};
use crate::state::auth::AuthState;
use crate::state::notify::NotifyState;
use crate::state::orders::OrdersState;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let orders = expect_context::<RwSignal<OrdersState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let token = Memo::new(move |_| auth.with(|a| a.token.clone()));
    // The list endpoint is keyed by user id, which arrives with the
    // profile fetch; the effect waits for it.
    let user_id = Memo::new(move |_| auth.with(AuthState::user_id));

    Effect::new(move || {
        let token = token.get();
        let Some(user_id) = user_id.get() else {
            return;
        };
        if token.is_empty() {
            return;
        }
        let Some(ticket) = orders.try_update(OrdersState::begin_list) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.list_orders(&token, user_id).await {
                Ok(list) => {
                    orders.update(|o| {
                        o.apply_list(ticket, list);
                    });
                }
                Err(err) => {
                    let current = orders.try_update(|o| o.fail_list(ticket)).unwrap_or(false);
                    if current {
                        handle_api_error(auth, notices, &err);
                    }
                }
            }
        });
    });

    view! {
        <section class="orders-page">
            <h1>"Orders"</h1>
            <Show
                when=move || !orders.get().list_loading
                fallback=|| view! { <p>"Loading orders..."</p> }
            >
                <Show
                    when=move || !orders.get().list.is_empty()
                    fallback=|| view! { <p class="orders-page__empty">"No orders yet."</p> }
                >
                    <table class="orders-page__table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Status"</th>
                                <th>"Items"</th>
                                <th>"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || orders.get().list
                                key=|order| order.id
                                children=|order| {
                                    let id = order.id.to_string();
                                    let open = {
                                        let id = id.clone();
                                        move |_| {
                                            router::navigate(&Route::OrderDetail { id: id.clone() })
                                        }
                                    };
                                    view! {
                                        <tr class="orders-page__row" on:click=open>
                                            <td>{id.clone()}</td>
                                            <td>{order.status.clone()}</td>
                                            <td>{order.items.len()}</td>
                                            <td>{format!("${:.2}", order.total_amount)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}
