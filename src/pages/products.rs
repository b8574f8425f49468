//! Product catalog page: paginated, filterable grid plus the cart
//! panel with checkout.

use leptos::prelude::*;
use uuid::Uuid;

use crate::app::handle_api_error;
use crate::net::api::Api;
use crate::net::types::OrderCreate;
use crate::router::{self, Route};
use crate::state::auth::AuthState;
use crate::state::cart::{CartItem, CartState};
use crate::state::catalog::{CatalogState, ProductSort};
use crate::state::notify::{NoticeLevel, NotifyState, notify};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let token = Memo::new(move |_| auth.with(|a| a.token.clone()));
    let query = Memo::new(move |_| catalog.with(|c| c.query.clone()));

    // Products: re-fetch whenever the token or the browse inputs change.
    {
        let api = api.clone();
        Effect::new(move || {
            let token = token.get();
            let query = query.get();
            if token.is_empty() {
                return;
            }
            let Some(ticket) = catalog.try_update(CatalogState::begin) else {
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.list_products(&token, &query).await {
                    Ok(items) => {
                        catalog.update(|c| {
                            c.apply(ticket, items);
                        });
                    }
                    Err(err) => {
                        let current = catalog
                            .try_update(|c| c.fail(ticket))
                            .unwrap_or(false);
                        if current {
                            handle_api_error(auth, notices, &err);
                        }
                    }
                }
            });
        });
    }

    // Categories: fetched once per session token.
    {
        let api = api.clone();
        Effect::new(move || {
            let token = token.get();
            if token.is_empty() {
                return;
            }
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.list_categories(&token).await {
                    Ok(list) => catalog.update(|c| c.categories = list),
                    Err(err) => handle_api_error(auth, notices, &err),
                }
            });
        });
    }

    let on_category = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let category_id = Uuid::parse_str(&raw).ok();
        catalog.update(|c| c.query.set_category(category_id));
    };

    let on_sort = move |ev: leptos::ev::Event| {
        let sort = match event_target_value(&ev).as_str() {
            "price_asc" => ProductSort::PriceAsc,
            "price_desc" => ProductSort::PriceDesc,
            _ => ProductSort::Name,
        };
        catalog.update(|c| c.query.set_sort(sort));
    };

    let at_first_page = move || catalog.with(|c| c.query.skip == 0);
    let page_underfull = move || catalog.with(|c| (c.products.len() as u32) < c.query.limit);

    view! {
        <section class="products-page">
            <div class="products-page__toolbar">
                <select class="products-page__filter" on:change=on_category>
                    <option value="">"All categories"</option>
                    <For
                        each=move || catalog.get().categories
                        key=|cat| cat.id
                        children=|cat| view! { <option value=cat.id.to_string()>{cat.name}</option> }
                    />
                </select>
                <select class="products-page__sort" on:change=on_sort>
                    <option value="name_asc">"Name"</option>
                    <option value="price_asc">"Price: low to high"</option>
                    <option value="price_desc">"Price: high to low"</option>
                </select>
            </div>

            <Show
                when=move || !catalog.get().loading
                fallback=|| view! { <p class="products-page__loading">"Loading products..."</p> }
            >
                <div class="products-page__grid">
                    <For
                        each=move || catalog.get().products
                        key=|product| product.id
                        children=move |product| {
                            let cart = expect_context::<RwSignal<CartState>>();
                            let item = CartItem::from(&product);
                            let name = product.name.clone();
                            view! {
                                <article class="product-card">
                                    <h3>{product.name.clone()}</h3>
                                    <p class="product-card__description">
                                        {product.description.clone().unwrap_or_default()}
                                    </p>
                                    <span class="product-card__price">
                                        {format!("${:.2}", product.price)}
                                    </span>
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| {
                                            cart.update(|c| c.add(item.clone()));
                                            notify(
                                                notices,
                                                NoticeLevel::Success,
                                                format!("Added to cart: {name}"),
                                            );
                                        }
                                    >
                                        "Add to cart"
                                    </button>
                                </article>
                            }
                        }
                    />
                </div>
            </Show>

            <div class="products-page__pager">
                <button
                    class="btn"
                    disabled=at_first_page
                    on:click=move |_| catalog.update(|c| c.query.prev_page())
                >
                    "Previous"
                </button>
                <button
                    class="btn"
                    disabled=page_underfull
                    on:click=move |_| catalog.update(|c| c.query.next_page())
                >
                    "Next"
                </button>
            </div>

            <CartPanel/>
        </section>
    }
}

/// Cart contents with removal, clear, and checkout.
#[component]
fn CartPanel() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let shipping_address = RwSignal::new(String::new());

    let checkout = move |_| {
        let token = auth.with_untracked(|a| a.token.clone());
        let Some(user_id) = auth.with_untracked(AuthState::user_id) else {
            notify(notices, NoticeLevel::Warning, "Profile still loading, try again");
            return;
        };
        let items = cart.with_untracked(CartState::to_order_items);
        if items.is_empty() {
            return;
        }
        let address = shipping_address.get_untracked();
        let order = OrderCreate {
            user_id,
            shipping_address: if address.trim().is_empty() {
                None
            } else {
                Some(address.trim().to_owned())
            },
            items,
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.create_order(&token, &order).await {
                Ok(created) => {
                    cart.update(CartState::clear);
                    notify(notices, NoticeLevel::Success, "Order placed");
                    router::navigate(&Route::OrderDetail { id: created.id.to_string() });
                }
                Err(err) => handle_api_error(auth, notices, &err),
            }
        });
    };

    view! {
        <aside class="cart-panel">
            <h2>"Cart"</h2>
            <ul class="cart-panel__items">
                {move || {
                    cart.get()
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <li class="cart-panel__item">
                                    <span>{item.name}</span>
                                    <span>{format!("${:.2}", item.price)}</span>
                                    <button
                                        class="btn"
                                        on:click=move |_| cart.update(|c| c.remove(index))
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <p class="cart-panel__total">
                {move || format!("Total: ${:.2}", cart.get().total())}
            </p>
            <input
                class="cart-panel__address"
                type="text"
                placeholder="Shipping address (optional)"
                prop:value=move || shipping_address.get()
                on:input=move |ev| shipping_address.set(event_target_value(&ev))
            />
            <div class="cart-panel__actions">
                <button class="btn" on:click=move |_| cart.update(CartState::clear)>
                    "Clear"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || cart.get().is_empty()
                    on:click=checkout
                >
                    "Checkout"
                </button>
            </div>
        </aside>
    }
}
