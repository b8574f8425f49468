use super::*;

#[test]
fn form_encode_plain_pairs() {
    let body = form_encode(&[("username", "alice@example.com"), ("password", "s3cret")]);
    assert_eq!(body, "username=alice%40example.com&password=s3cret");
}

#[test]
fn form_encode_escapes_reserved_characters() {
    let body = form_encode(&[("password", "a&b=c d+e")]);
    assert_eq!(body, "password=a%26b%3Dc+d%2Be");
}

#[test]
fn form_encode_handles_unicode() {
    let body = form_encode(&[("username", "ngô")]);
    assert_eq!(body, "username=ng%C3%B4");
}

#[test]
fn urls_carry_the_api_prefix() {
    let api = Api::new("http://localhost:8000");
    assert_eq!(api.url("/products"), "http://localhost:8000/api/v1/products");
    assert_eq!(api.google_login_url(), "http://localhost:8000/api/v1/auth/google");
}

#[test]
fn key_listing_is_scoped_by_user() {
    // One request for all of the user's keys, not one per order.
    let api = Api::new("http://localhost:8000");
    let user_id = uuid::Uuid::parse_str("6f0f8c9a-5d2e-4c57-9a31-111111111111").unwrap();
    assert_eq!(
        api.url(&format!("/inventory/keys/user/{user_id}")),
        "http://localhost:8000/api/v1/inventory/keys/user/6f0f8c9a-5d2e-4c57-9a31-111111111111"
    );
}
