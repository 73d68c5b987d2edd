//! HTTP protocol implementation.
//!
//! This is not a general-purpose web server: each accepted connection is
//! served exactly one request and then closed. No keep-alive, no chunked
//! transfer, no TLS.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection lifecycle state machine
//!   (firewall check → parse → auth → route → handle → respond → close)
//! - **`parser`**: parses one HTTP request from a byte buffer
//! - **`request`**: parsed request representation and basic-auth checking
//! - **`response`**: response representation with builder pattern
//! - **`router`**: static (method, path) → route table
//! - **`handler`**: enumerated handler error kinds and their status mapping
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │  Firewall   │ ← Peer allowlist check, drop on deny
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request bytes
//!        └──────┬──────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Auth, route, invoke handler
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ├─ normally → Closed
//!               └─ reset endpoint → Restart (process terminates)
//! ```

pub mod connection;
pub mod handler;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
