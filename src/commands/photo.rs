//! Photo Commands
//!
//! Multipart upload and per-photo deletion.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;

use super::send_checked;
use crate::error::{RequestError, RequestResult};
use crate::models::Picture;

/// Reply of the upload endpoint; `pictures` is the item's full list after the upload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub pictures: Vec<Picture>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn into_result(self) -> RequestResult<Vec<Picture>> {
        if self.success {
            Ok(self.pictures)
        } else {
            Err(RequestError::Rejected(
                self.error.unwrap_or_else(|| "Errore sconosciuto".to_string()),
            ))
        }
    }
}

/// Post the upload form (`photos` files plus `item_id`)
pub async fn upload_photos(url: &str, form: FormData) -> RequestResult<Vec<Picture>> {
    let request = Request::post(url).body(form)?;
    let response = request.send().await?;
    let response = super::ensure_ok(response).await?;
    let body: UploadResponse = response.json().await?;
    body.into_result()
}

/// Delete one photo. Any success status counts; the body is ignored.
pub async fn delete_photo(url: &str) -> RequestResult<()> {
    send_checked(Request::post(url)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_success_returns_server_list() {
        let body: UploadResponse = serde_json::from_str(
            r#"{"success": true, "pictures": [{"file_path": "C-1/a.jpg", "id": 3}, {"file_path": "C-1/b.jpg", "id": 4}]}"#,
        )
        .unwrap();
        let pictures = body.into_result().unwrap();
        assert_eq!(pictures.len(), 2);
        assert_eq!(pictures[1], Picture { id: 4, file_path: "C-1/b.jpg".into() });
    }

    #[test]
    fn test_upload_failure_uses_server_error() {
        let body: UploadResponse =
            serde_json::from_str(r#"{"success": false, "error": "Elemento non trovato."}"#).unwrap();
        assert_eq!(
            body.into_result(),
            Err(RequestError::Rejected("Elemento non trovato.".into()))
        );
    }

    #[test]
    fn test_upload_failure_ignores_pictures() {
        let body: UploadResponse = serde_json::from_str(
            r#"{"success": false, "pictures": [{"file_path": "x.jpg", "id": 1}]}"#,
        )
        .unwrap();
        assert!(body.into_result().is_err());
    }
}
