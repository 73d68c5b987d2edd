use crate::http::response::{Response, StatusCode};

/// Enumerated handler failure kinds, each mapped to exactly one status
/// code. Handlers return these instead of letting arbitrary errors escape
/// to a catch-all, so an unanticipated fault cannot be mis-classified.
/// Authorization failures never reach a handler; the connection layer
/// answers them before routing.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// Missing or unparseable query parameter, or a value the device
    /// rejected as invalid input.
    #[error("invalid parameter: {0}")]
    Validation(String),
    /// The device-control collaborator failed on otherwise valid input.
    #[error("device control failed: {0}")]
    Device(#[source] anyhow::Error),
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::Validation(_) => StatusCode::BadRequest,
            HandlerError::Device(_) => StatusCode::InternalServerError,
        }
    }

    pub fn into_response(self) -> Response {
        match self.status() {
            StatusCode::BadRequest => Response::bad_request(),
            _ => Response::internal_error(),
        }
    }
}
