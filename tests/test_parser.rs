use leviot::http::parser::{ParseError, parse_http_request};
use leviot::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: purifier.local\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "purifier.local");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /index.html HTTP/1.1\r\nHost: purifier.local\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "purifier.local");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_query_string_is_not_part_of_the_path() {
    let req = b"GET /priv-api/fan?speed=3 HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/priv-api/fan");
    assert_eq!(parsed.query.get("speed").unwrap(), "3");
}

#[test]
fn test_query_values_are_percent_decoded() {
    let req = b"GET /priv-api/fan?speed=1&note=hello%20world HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.query.get("note").unwrap(), "hello world");
}

#[test]
fn test_duplicate_query_keys_resolve_last_wins() {
    let req = b"GET /priv-api/fan?speed=1&speed=3 HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.query.get("speed").unwrap(), "3");
}

#[test]
fn test_path_without_query_has_empty_query_map() {
    let req = b"GET /priv-api/on HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert!(parsed.query.is_empty());
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: purifier.local\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_unrecognized_method_token_is_carried_through() {
    // Unknown methods still parse; the router answers them with 404.
    let req = b"BREW / HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
    assert_eq!(parsed.path, "/");
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidHeader)));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
        ("BREW", Method::Other("BREW".to_string())),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_consumed_covers_exactly_the_header_block() {
    let req = b"GET / HTTP/1.1\r\n\r\ntrailing garbage";
    let (_, consumed) = parse_http_request(req).unwrap();

    assert_eq!(consumed, req.len() - b"trailing garbage".len());
}

#[test]
fn test_parse_header_case_preservation() {
    let req = b"GET / HTTP/1.1\r\nAuthorization: Basic dTpw\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert!(parsed.headers.contains_key("Authorization"));
}
