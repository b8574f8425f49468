//! Single-order page: line items, status, and issued API keys.

use leptos::prelude::*;
use uuid::Uuid;

use crate::app::handle_api_error;
use crate::net::api::Api;
use crate::router::{self, Route};
use crate::state::auth::AuthState;
use crate::state::notify::NotifyState;
use crate::state::orders::OrdersState;

#[component]
pub fn OrderDetailPage(id: String) -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let orders = expect_context::<RwSignal<OrdersState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    // The route captures the id as a string; anything that is not a
    // UUID cannot be an order.
    let order_id = Uuid::parse_str(&id).ok();

    let token = Memo::new(move |_| auth.with(|a| a.token.clone()));

    Effect::new(move || {
        let token = token.get();
        let Some(order_id) = order_id else {
            return;
        };
        if token.is_empty() {
            return;
        }
        let Some(ticket) = orders.try_update(OrdersState::begin_detail) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.order_detail(&token, order_id).await {
                Ok(order) => {
                    orders.update(|o| {
                        o.apply_detail(ticket, order);
                    });
                }
                Err(err) => {
                    let current = orders.try_update(|o| o.fail_detail(ticket)).unwrap_or(false);
                    if current {
                        handle_api_error(auth, notices, &err);
                    }
                }
            }
        });
    });

    view! {
        <section class="order-detail-page">
            <button class="btn" on:click=|_| router::navigate(&Route::Orders)>
                "Back to orders"
            </button>

            {move || {
                if order_id.is_none() {
                    return view! { <p>"Unknown order."</p> }.into_any();
                }
                if orders.get().detail_loading {
                    return view! { <p>"Loading order..."</p> }.into_any();
                }
                match orders.get().detail {
                    None => view! { <p>"Order not found."</p> }.into_any(),
                    Some(order) => {
                        view! {
                            <div class="order-detail">
                                <h1>{format!("Order {}", order.id)}</h1>
                                <p class="order-detail__status">{order.status.clone()}</p>
                                <ul class="order-detail__items">
                                    {order
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <li>
                                                    {format!(
                                                        "{} x {} @ ${:.2}",
                                                        item.quantity,
                                                        item.product_id,
                                                        item.price,
                                                    )}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <p class="order-detail__total">
                                    {format!("Total: ${:.2}", order.total_amount)}
                                </p>
                                <h2>"API keys"</h2>
                                <ul class="order-detail__keys">
                                    {order
                                        .api_keys
                                        .iter()
                                        .map(|key| {
                                            view! {
                                                <li>
                                                    <code>{key.key.clone()}</code>
                                                    {format!(
                                                        " ({}/{} used)",
                                                        key.quota_used,
                                                        key.quota_limit,
                                                    )}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </section>
    }
}
