//! Request Errors
//!
//! Every server call either fails in transport, answers with a non-success
//! status, returns a body we cannot decode, or explicitly reports `success: false`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    /// Server answered with `success: false`
    #[error("rejected by server: {0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for RequestError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => RequestError::Decode(e.to_string()),
            other => RequestError::Network(other.to_string()),
        }
    }
}

pub type RequestResult<T> = Result<T, RequestError>;
