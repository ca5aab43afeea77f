//! Export Commands

use gloo_net::http::Request;

use super::send_checked;
use crate::error::RequestResult;

/// Request the spreadsheet report; returns the raw `.xlsx` bytes
pub async fn export_xlsx(url: &str) -> RequestResult<Vec<u8>> {
    let response = send_checked(Request::post(url)).await?;
    Ok(response.binary().await?)
}
