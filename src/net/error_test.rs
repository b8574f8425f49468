use super::*;

#[test]
fn status_401_maps_to_unauthorized() {
    let err = ApiError::from_response_parts(401, r#"{"detail":"Not authenticated"}"#);
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_unauthorized());
}

#[test]
fn detail_field_becomes_the_message() {
    let err = ApiError::from_response_parts(400, r#"{"detail":"Incorrect email or password"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: "Incorrect email or password".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "Incorrect email or password");
}

#[test]
fn non_string_detail_falls_back_to_generic_message() {
    // Validation errors arrive as a list under `detail`.
    let err = ApiError::from_response_parts(422, r#"{"detail":[{"loc":["body"]}]}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 422,
            message: "Request failed (422)".to_owned(),
        }
    );
}

#[test]
fn undecodable_body_falls_back_to_generic_message() {
    let err = ApiError::from_response_parts(500, "<html>oops</html>");
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "Request failed (500)".to_owned(),
        }
    );
}
