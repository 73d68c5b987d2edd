use leviot::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::SeeOther.as_u16(), 303);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Unauthorized.as_u16(), 401);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::SeeOther.reason_phrase(), "See Other");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Unauthorized.reason_phrase(), "Unauthorized");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"Hello".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"Hello".to_vec());
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    let content_length = response.headers.get("Content-Length").unwrap();
    assert_eq!(content_length, &body.len().to_string());
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Length").unwrap(), "999");
}

#[test]
fn test_response_ok_helper_is_empty() {
    let response = Response::ok();

    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.body.is_empty());
    assert_eq!(response.headers.get("Content-Length").unwrap(), "0");
}

#[test]
fn test_response_html_helper_sets_content_type() {
    let response = Response::html("<html></html>");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.headers.get("Content-Type").unwrap(),
        "text/html;charset=utf-8"
    );
}

#[test]
fn test_response_see_other_helper() {
    let response = Response::see_other("/");

    assert_eq!(response.status, StatusCode::SeeOther);
    assert_eq!(response.headers.get("Location").unwrap(), "/");
    assert!(response.body.is_empty());
}

#[test]
fn test_response_unauthorized_helper_carries_realm_challenge() {
    let response = Response::unauthorized("LevIoT");

    assert_eq!(response.status, StatusCode::Unauthorized);
    assert_eq!(
        response.headers.get("WWW-Authenticate").unwrap(),
        "Basic realm=\"LevIoT\""
    );
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"404 Not Found".to_vec());
}

#[test]
fn test_response_internal_error_helper() {
    let response = Response::internal_error();

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert_eq!(response.body, b"500 Internal Server Error".to_vec());
}
