//! Admin pages: catalog management, order status updates, inventory.
//!
//! Every page double-checks the role client-side; the gateway enforces
//! it again server-side.

use leptos::prelude::*;
use uuid::Uuid;

use crate::app::handle_api_error;
use crate::net::api::Api;
use crate::net::types::{CategoryCreate, InventoryCreate, Order, ProductCreate};
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::notify::{NoticeLevel, NotifyState, notify};

const ORDER_STATUSES: [&str; 7] =
    ["pending", "paid", "processing", "shipped", "completed", "cancelled", "failed"];

fn admin_only(auth: RwSignal<AuthState>) -> impl Fn() -> bool + Copy {
    move || auth.with(AuthState::is_admin)
}

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let category_name = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());

    let add_category = {
        let api = api.clone();
        move |_| {
            let req = CategoryCreate {
                name: category_name.get_untracked().trim().to_owned(),
                description: None,
            };
            if req.name.is_empty() {
                notify(notices, NoticeLevel::Warning, "Category name is required");
                return;
            }
            let token = auth.with_untracked(|a| a.token.clone());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.create_category(&token, &req).await {
                    Ok(created) => {
                        catalog.update(|c| c.categories.push(created));
                        category_name.set(String::new());
                        notify(notices, NoticeLevel::Success, "Category created");
                    }
                    Err(err) => handle_api_error(auth, notices, &err),
                }
            });
        }
    };

    let add_product = move |_| {
        let parsed_price = price.get_untracked().trim().parse::<f64>();
        let parsed_stock = stock.get_untracked().trim().parse::<i64>();
        let (Ok(parsed_price), Ok(parsed_stock)) = (parsed_price, parsed_stock) else {
            notify(notices, NoticeLevel::Warning, "Price and stock must be numbers");
            return;
        };
        let req = ProductCreate {
            name: name.get_untracked().trim().to_owned(),
            description: {
                let text = description.get_untracked();
                let text = text.trim();
                if text.is_empty() { None } else { Some(text.to_owned()) }
            },
            price: parsed_price,
            stock: parsed_stock,
            category_id: Uuid::parse_str(category_id.get_untracked().trim()).ok(),
        };
        if req.name.is_empty() {
            notify(notices, NoticeLevel::Warning, "Product name is required");
            return;
        }
        let token = auth.with_untracked(|a| a.token.clone());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.create_product(&token, &req).await {
                Ok(_) => {
                    name.set(String::new());
                    description.set(String::new());
                    price.set(String::new());
                    stock.set(String::new());
                    notify(notices, NoticeLevel::Success, "Product created");
                }
                Err(err) => handle_api_error(auth, notices, &err),
            }
        });
    };

    view! {
        <section class="admin-page">
            <h1>"Manage catalog"</h1>
            <Show when=admin_only(auth) fallback=NotAuthorized>
                <div class="admin-page__panel">
                    <h2>"New category"</h2>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || category_name.get()
                            on:input=move |ev| category_name.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" on:click=add_category.clone()>
                        "Create category"
                    </button>
                </div>

                <div class="admin-page__panel">
                    <h2>"New product"</h2>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <input
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Price"
                        <input
                            type="text"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Stock"
                        <input
                            type="text"
                            prop:value=move || stock.get()
                            on:input=move |ev| stock.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Category"
                        <select on:change=move |ev| category_id.set(event_target_value(&ev))>
                            <option value="">"(none)"</option>
                            <For
                                each=move || catalog.get().categories
                                key=|category| category.id
                                children=|category| {
                                    view! {
                                        <option value=category.id.to_string()>
                                            {category.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </label>
                    <button class="btn btn--primary" on:click=add_product.clone()>
                        "Create product"
                    </button>
                </div>
            </Show>
        </section>
    }
}

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let lookup_id = RwSignal::new(String::new());
    let order: RwSignal<Option<Order>> = RwSignal::new(None);
    let status = RwSignal::new(String::new());

    let lookup = {
        let api = api.clone();
        move |_| {
            let Ok(order_id) = Uuid::parse_str(lookup_id.get_untracked().trim()) else {
                notify(notices, NoticeLevel::Warning, "Enter a valid order id");
                return;
            };
            let token = auth.with_untracked(|a| a.token.clone());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.order_detail(&token, order_id).await {
                    Ok(found) => {
                        status.set(found.status.clone());
                        order.set(Some(found));
                    }
                    Err(err) => {
                        order.set(None);
                        handle_api_error(auth, notices, &err);
                    }
                }
            });
        }
    };

    let apply_status = move |_| {
        let Some(order_id) = order.with_untracked(|o| o.as_ref().map(|o| o.id)) else {
            return;
        };
        let next = status.get_untracked();
        let token = auth.with_untracked(|a| a.token.clone());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.update_order_status(&token, order_id, &next).await {
                Ok(updated) => {
                    order.set(Some(updated));
                    notify(notices, NoticeLevel::Success, "Order status updated");
                }
                Err(err) => handle_api_error(auth, notices, &err),
            }
        });
    };

    view! {
        <section class="admin-page">
            <h1>"Manage orders"</h1>
            <Show when=admin_only(auth) fallback=NotAuthorized>
                <div class="admin-page__panel">
                    <label>
                        "Order id"
                        <input
                            type="text"
                            prop:value=move || lookup_id.get()
                            on:input=move |ev| lookup_id.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn" on:click=lookup.clone()>"Look up"</button>
                </div>

                {
                    let apply_status = apply_status.clone();
                    move || {
                        let apply_status = apply_status.clone();
                        order.get().map(|found| {
                            view! {
                                <div class="admin-page__panel">
                                    <p>{format!("Order {}", found.id)}</p>
                                    <p>{format!("Total: ${:.2}", found.total_amount)}</p>
                                    <p>{format!("Current status: {}", found.status)}</p>
                                    <label>
                                        "New status"
                                        <select on:change=move |ev| {
                                            status.set(event_target_value(&ev))
                                        }>
                                            {ORDER_STATUSES
                                                .iter()
                                                .map(|&name| {
                                                    view! {
                                                        <option
                                                            value=name
                                                            selected=found.status == name
                                                        >
                                                            {name}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                    <button class="btn btn--primary" on:click=apply_status.clone()>
                                        "Update status"
                                    </button>
                                </div>
                            }
                        })
                    }
                }
            </Show>
        </section>
    }
}

#[component]
pub fn AdminInventoryPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let product_id = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let found: RwSignal<Option<crate::net::types::Inventory>> = RwSignal::new(None);

    let lookup = {
        let api = api.clone();
        move |_| {
            let Ok(id) = Uuid::parse_str(product_id.get_untracked().trim()) else {
                notify(notices, NoticeLevel::Warning, "Enter a valid product id");
                return;
            };
            let token = auth.with_untracked(|a| a.token.clone());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.inventory(&token, id).await {
                    Ok(record) => found.set(Some(record)),
                    Err(err) => {
                        found.set(None);
                        handle_api_error(auth, notices, &err);
                    }
                }
            });
        }
    };

    let create = move |_| {
        let Ok(id) = Uuid::parse_str(product_id.get_untracked().trim()) else {
            notify(notices, NoticeLevel::Warning, "Enter a valid product id");
            return;
        };
        let Ok(parsed_quantity) = quantity.get_untracked().trim().parse::<i64>() else {
            notify(notices, NoticeLevel::Warning, "Quantity must be a number");
            return;
        };
        let req = InventoryCreate {
            product_id: id,
            quantity: parsed_quantity,
            location: {
                let text = location.get_untracked();
                let text = text.trim();
                if text.is_empty() { None } else { Some(text.to_owned()) }
            },
        };
        let token = auth.with_untracked(|a| a.token.clone());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.create_inventory(&token, &req).await {
                Ok(record) => {
                    found.set(Some(record));
                    notify(notices, NoticeLevel::Success, "Inventory recorded");
                }
                Err(err) => handle_api_error(auth, notices, &err),
            }
        });
    };

    view! {
        <section class="admin-page">
            <h1>"Manage inventory"</h1>
            <Show when=admin_only(auth) fallback=NotAuthorized>
                <div class="admin-page__panel">
                    <label>
                        "Product id"
                        <input
                            type="text"
                            prop:value=move || product_id.get()
                            on:input=move |ev| product_id.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn" on:click=lookup.clone()>"Look up"</button>

                    {move || {
                        found
                            .get()
                            .map(|record| {
                                view! {
                                    <p class="admin-page__inventory">
                                        {format!(
                                            "On hand: {} (reserved {}){}",
                                            record.quantity,
                                            record.reserved_quantity,
                                            record
                                                .location
                                                .as_deref()
                                                .map(|loc| format!(" at {loc}"))
                                                .unwrap_or_default(),
                                        )}
                                    </p>
                                }
                            })
                    }}
                </div>

                <div class="admin-page__panel">
                    <h2>"Record stock"</h2>
                    <label>
                        "Quantity"
                        <input
                            type="text"
                            prop:value=move || quantity.get()
                            on:input=move |ev| quantity.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Location"
                        <input
                            type="text"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" on:click=create.clone()>"Save"</button>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn NotAuthorized() -> impl IntoView {
    view! { <p class="admin-page__denied">"Admin access required."</p> }
}
