use std::collections::HashMap;

use crate::http::request::{Method, Request};

/// Upper bound on the bytes buffered for one request. A peer that sends
/// more without completing its header block is dropped.
pub const MAX_REQUEST_BYTES: usize = 8 * 1024;

/// Faults of the read/parse layer. `EmptyRequest` is the quiet path for
/// peers that connect and close without sending anything (port scanners,
/// health probes); everything else is diagnostic-worthy.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("empty request")]
    EmptyRequest,
    #[error("peer closed mid-request")]
    Truncated,
    #[error("request larger than {MAX_REQUEST_BYTES} bytes")]
    TooLarge,
    #[error("need more data")]
    Incomplete,
    #[error("malformed request line")]
    InvalidRequest,
    #[error("malformed header")]
    InvalidHeader,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parses one HTTP request from `buf`.
///
/// Returns the request and the number of bytes consumed, or
/// [`ParseError::Incomplete`] when the header block has not fully arrived
/// yet. Any request body is ignored; this surface is GET-only and the
/// connection never carries a second request.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];

    let headers_str = std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str);
    let (path, query) = split_target(target);

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    let request = Request {
        method,
        path,
        query,
        version: version.to_string(),
        headers,
    };

    Ok((request, headers_end + 4))
}

/// Splits a request target into path and decoded query parameters.
/// Duplicate keys resolve last-wins.
fn split_target(target: &str) -> (String, HashMap<String, String>) {
    match target.split_once('?') {
        Some((path, query_str)) => {
            let query = url::form_urlencoded::parse(query_str.as_bytes())
                .into_owned()
                .collect();
            (path.to_string(), query)
        }
        None => (target.to_string(), HashMap::new()),
    }
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
