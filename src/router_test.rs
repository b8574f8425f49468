use super::*;

// =============================================================
// Fragment parsing
// =============================================================

#[test]
fn parse_maps_every_supported_fragment() {
    assert_eq!(Route::parse("#/products"), Route::Products);
    assert_eq!(Route::parse("#/orders"), Route::Orders);
    assert_eq!(Route::parse("#/keys"), Route::ApiKeys);
    assert_eq!(Route::parse("#/profile"), Route::Profile);
    assert_eq!(Route::parse("#/admin/products"), Route::AdminProducts);
    assert_eq!(Route::parse("#/admin/orders"), Route::AdminOrders);
    assert_eq!(Route::parse("#/admin/inventory"), Route::AdminInventory);
}

#[test]
fn parse_order_detail_captures_id() {
    assert_eq!(
        Route::parse("#/orders/42"),
        Route::OrderDetail { id: "42".to_owned() }
    );
}

#[test]
fn parse_order_detail_wins_over_bare_orders() {
    // The id capture must be tested before the bare pattern.
    assert_eq!(
        Route::parse("#/orders/abc"),
        Route::OrderDetail { id: "abc".to_owned() }
    );
    assert_eq!(Route::parse("#/orders"), Route::Orders);
}

#[test]
fn parse_order_detail_rejects_nested_segments() {
    assert_eq!(Route::parse("#/orders/1/items"), Route::Products);
    assert_eq!(Route::parse("#/orders/"), Route::Products);
}

#[test]
fn parse_unrecognized_falls_back_to_default() {
    assert_eq!(Route::parse("#/bogus"), Route::Products);
    assert_eq!(Route::parse("#products"), Route::Products);
    assert_eq!(Route::parse(""), Route::Products);
}

#[test]
fn parse_token_marker_falls_back_to_default() {
    assert_eq!(Route::parse("#token=abc123"), Route::Products);
}

// =============================================================
// Reverse mapping
// =============================================================

#[test]
fn fragment_for_order_detail() {
    let route = Route::OrderDetail { id: "7".to_owned() };
    assert_eq!(route.fragment(), "#/orders/7");
}

#[test]
fn fragment_round_trips_for_all_routes() {
    let routes = [
        Route::Products,
        Route::Orders,
        Route::OrderDetail { id: "42".to_owned() },
        Route::ApiKeys,
        Route::Profile,
        Route::AdminProducts,
        Route::AdminOrders,
        Route::AdminInventory,
    ];
    for route in routes {
        assert_eq!(Route::parse(&route.fragment()), route);
    }
}

// =============================================================
// OAuth token marker
// =============================================================

#[test]
fn oauth_token_extracts_value() {
    assert_eq!(oauth_token("#token=abc123"), Some("abc123"));
}

#[test]
fn oauth_token_ignores_routes_and_empty_values() {
    assert_eq!(oauth_token("#/products"), None);
    assert_eq!(oauth_token("#token="), None);
    assert_eq!(oauth_token(""), None);
}
