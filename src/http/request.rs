use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// HTTP request methods.
///
/// The control surface only routes GET; every other token is still parsed
/// so the router can answer it with 404 instead of dropping the
/// connection. Tokens outside the well-known set are carried through
/// verbatim in [`Method::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
    Other(String),
}

impl Method {
    /// Parses an HTTP method token (case-sensitive, per RFC 9110).
    ///
    /// # Example
    ///
    /// ```
    /// # use leviot::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Method::GET);
    /// assert_eq!(Method::from_str("BREW"), Method::Other("BREW".to_string()));
    /// ```
    pub fn from_str(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            _ => Method::Other(s.to_string()),
        }
    }
}

/// A parsed HTTP request.
///
/// Immutable once parsed; owned by the handling task for the duration of
/// one connection and never shared across connections.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Request path with the query string already split off.
    pub path: String,
    /// Decoded query parameters, last-wins on duplicate keys.
    pub query: HashMap<String, String>,
    /// HTTP version token (typically "HTTP/1.1").
    pub version: String,
    /// Request headers as key-value pairs.
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Retrieves a query parameter by name.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(|v| v.as_str())
    }

    /// Verifies the `Authorization` header against the configured
    /// `user:pass` credential. A missing header, a non-Basic scheme, or
    /// undecodable base64 all count as a mismatch.
    pub fn check_basic_auth(&self, credential: &str) -> bool {
        let Some(value) = self.header("Authorization") else {
            return false;
        };

        let Some((scheme, encoded)) = value.split_once(' ') else {
            return false;
        };

        if !scheme.eq_ignore_ascii_case("Basic") {
            return false;
        }

        match BASE64.decode(encoded.trim()) {
            Ok(decoded) => decoded == credential.as_bytes(),
            Err(_) => false,
        }
    }
}
