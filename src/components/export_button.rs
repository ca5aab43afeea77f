//! Export Button Component
//!
//! Downloads the spreadsheet report produced by the server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::commands;
use crate::context::use_app_context;
use crate::dom::{download_bytes, today};
use crate::messages::EXPORT_ERROR;
use crate::urls::export_filename;

#[component]
pub fn ExportButton() -> impl IntoView {
    let ctx = use_app_context();
    let url = ctx.with_config(|c| c.export_url.clone());

    let on_click = {
        let url = url.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            let url = url.clone();
            spawn_local(async move {
                let bytes = match commands::export_xlsx(&url).await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        error!("[EXPORT] {}", e);
                        ctx.flash_error(EXPORT_ERROR);
                        return;
                    }
                };
                let (day, month, year) = today();
                let filename = export_filename(day, month, year);
                info!("[EXPORT] Saving {} ({} bytes)", filename, bytes.len());
                if let Err(e) = download_bytes(&bytes, &filename) {
                    error!("[EXPORT] Download failed: {}", e);
                    ctx.flash_error(EXPORT_ERROR);
                }
            });
        }
    };

    view! {
        <button id="btn-export-excel" class="requires-auth" data-export-url=url on:click=on_click>
            "Esporta Excel"
        </button>
    }
}
