//! Server Requests
//!
//! Frontend bindings to the inventory server's endpoints, organized by domain.

mod item;
mod photo;
mod export;

use gloo_net::http::{RequestBuilder, Response};

use crate::error::{RequestError, RequestResult};

// Re-export all public items
pub use item::*;
pub use photo::*;
pub use export::*;

/// Send a request and turn a non-success status into [`RequestError::Status`]
async fn send_checked(request: RequestBuilder) -> RequestResult<Response> {
    let response = request.send().await?;
    ensure_ok(response).await
}

async fn ensure_ok(response: Response) -> RequestResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(RequestError::Status { status, body })
}
