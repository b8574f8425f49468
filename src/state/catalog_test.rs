use super::*;

fn product(name: &str, price: f64) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        description: None,
        price,
        stock: 10,
        image_url: None,
        category_id: None,
        category: None,
        api_url: None,
        quota_limit: 1000,
        rate_limit: 60,
    }
}

// =============================================================
// ProductQuery
// =============================================================

#[test]
fn query_string_without_filter() {
    let query = ProductQuery::default();
    assert_eq!(query.to_query_string(), "?skip=0&limit=12&sort_by=name_asc");
}

#[test]
fn query_string_with_category_and_sort() {
    let category_id = Uuid::parse_str("6f0f8c9a-5d2e-4c57-9a31-111111111111").unwrap();
    let query = ProductQuery {
        skip: 24,
        limit: 12,
        category_id: Some(category_id),
        sort: ProductSort::PriceDesc,
    };
    assert_eq!(
        query.to_query_string(),
        "?skip=24&limit=12&category_id=6f0f8c9a-5d2e-4c57-9a31-111111111111&sort_by=price_desc"
    );
}

#[test]
fn sort_params_come_from_the_backend_vocabulary() {
    // The products endpoint validates sort_by against
    // price_asc|price_desc|name_asc|name_desc|newest and ignores
    // anything else.
    let accepted = ["price_asc", "price_desc", "name_asc", "name_desc", "newest"];
    for sort in [ProductSort::Name, ProductSort::PriceAsc, ProductSort::PriceDesc] {
        assert!(accepted.contains(&sort.as_param()));
    }
}

#[test]
fn paging_moves_by_limit_and_never_goes_negative() {
    let mut query = ProductQuery::default();
    query.next_page();
    query.next_page();
    assert_eq!(query.skip, 24);

    query.prev_page();
    assert_eq!(query.skip, 12);

    query.prev_page();
    query.prev_page();
    assert_eq!(query.skip, 0);
}

#[test]
fn filter_and_sort_changes_reset_pagination() {
    let mut query = ProductQuery::default();
    query.next_page();
    query.set_category(Some(Uuid::new_v4()));
    assert_eq!(query.skip, 0);

    query.next_page();
    query.set_sort(ProductSort::PriceAsc);
    assert_eq!(query.skip, 0);
    assert_eq!(query.sort, ProductSort::PriceAsc);
}

// =============================================================
// Fetch generation gating
// =============================================================

#[test]
fn apply_accepts_only_the_newest_ticket() {
    let mut state = CatalogState::default();

    let first = state.begin();
    let second = state.begin();

    // The superseded response resolves late and must be discarded.
    assert!(!state.apply(first, vec![product("stale", 1.0)]));
    assert!(state.products.is_empty());
    assert!(state.loading);

    assert!(state.apply(second, vec![product("fresh", 2.0)]));
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.products[0].name, "fresh");
    assert!(!state.loading);
}

#[test]
fn fail_clears_loading_only_for_the_newest_ticket() {
    let mut state = CatalogState::default();
    let first = state.begin();
    let second = state.begin();

    assert!(!state.fail(first));
    assert!(state.loading);

    assert!(state.fail(second));
    assert!(!state.loading);
}

#[test]
fn clear_invalidates_in_flight_fetches() {
    let mut state = CatalogState::default();
    let ticket = state.begin();
    state.clear();
    assert!(!state.apply(ticket, vec![product("late", 3.0)]));
    assert!(state.products.is_empty());
}
