use leviot::http::parser::parse_http_request;
use leviot::http::request::Request;

fn request_with_auth(value: Option<&str>) -> Request {
    let raw = match value {
        Some(v) => format!("GET / HTTP/1.1\r\nAuthorization: {}\r\n\r\n", v),
        None => "GET / HTTP/1.1\r\n\r\n".to_string(),
    };
    let (req, _) = parse_http_request(raw.as_bytes()).unwrap();
    req
}

#[test]
fn test_basic_auth_accepts_matching_credential() {
    // base64("u:p") == "dTpw"
    let req = request_with_auth(Some("Basic dTpw"));
    assert!(req.check_basic_auth("u:p"));
}

#[test]
fn test_basic_auth_scheme_is_case_insensitive() {
    let req = request_with_auth(Some("basic dTpw"));
    assert!(req.check_basic_auth("u:p"));
}

#[test]
fn test_basic_auth_rejects_wrong_credential() {
    let req = request_with_auth(Some("Basic dTpw"));
    assert!(!req.check_basic_auth("u:other"));
}

#[test]
fn test_basic_auth_rejects_missing_header() {
    let req = request_with_auth(None);
    assert!(!req.check_basic_auth("u:p"));
}

#[test]
fn test_basic_auth_rejects_other_schemes() {
    let req = request_with_auth(Some("Bearer dTpw"));
    assert!(!req.check_basic_auth("u:p"));
}

#[test]
fn test_basic_auth_rejects_undecodable_value() {
    let req = request_with_auth(Some("Basic ???not-base64???"));
    assert!(!req.check_basic_auth("u:p"));
}

#[test]
fn test_header_lookup() {
    let (req, _) =
        parse_http_request(b"GET / HTTP/1.1\r\nHost: purifier.local\r\n\r\n").unwrap();

    assert_eq!(req.header("Host"), Some("purifier.local"));
    assert_eq!(req.header("X-Missing"), None);
}

#[test]
fn test_query_param_lookup() {
    let (req, _) = parse_http_request(b"GET /priv-api/timer?minutes=30 HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(req.query_param("minutes"), Some("30"));
    assert_eq!(req.query_param("speed"), None);
}
