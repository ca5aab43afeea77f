//! Item Commands

use gloo_net::http::Request;
use serde::Deserialize;

use super::send_checked;
use crate::error::{RequestError, RequestResult};

/// Reply of the per-item delete endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteItemResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl DeleteItemResponse {
    /// Server message on success
    pub fn into_result(self) -> RequestResult<String> {
        if self.success {
            Ok(self.message.unwrap_or_default())
        } else {
            Err(RequestError::Rejected(
                self.message.unwrap_or_else(|| "Errore generico".to_string()),
            ))
        }
    }
}

/// Delete an item (and its pictures) through its own delete URL
pub async fn delete_item(delete_url: &str) -> RequestResult<String> {
    let response = send_checked(Request::post(delete_url)).await?;
    let body: DeleteItemResponse = response.json().await?;
    body.into_result()
}
