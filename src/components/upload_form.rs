//! Upload Form Component
//!
//! Posts the selected files for the selected row as multipart form data.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};
use web_sys::FormData;

use crate::commands;
use crate::context::use_app_context;
use crate::messages::{PHOTOS_UPLOADED, PHOTOS_UPLOAD_ERROR};
use crate::store::store_replace_pictures;

#[component]
pub fn UploadForm(#[prop(into)] item_id: Signal<Option<u32>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            return;
        };
        let Some(item_id) = item_id.get_untracked() else {
            warn!("[UPLOAD] No item selected");
            ctx.flash_error(PHOTOS_UPLOAD_ERROR);
            return;
        };
        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                error!("[UPLOAD] Could not read form: {:?}", e);
                ctx.flash_error(PHOTOS_UPLOAD_ERROR);
                return;
            }
        };
        // The hidden input tracks the selection, but the id captured here is the one we update
        if let Err(e) = form_data.set_with_str("item_id", &item_id.to_string()) {
            warn!("[UPLOAD] Could not set item_id, relying on hidden input: {:?}", e);
        }

        let url = ctx.with_config(|c| c.upload_url.clone());
        spawn_local(async move {
            match commands::upload_photos(&url, form_data).await {
                Ok(pictures) => {
                    info!("[UPLOAD] Item {} now has {} pictures", item_id, pictures.len());
                    store_replace_pictures(&store, item_id, pictures);
                    ctx.flash_success(PHOTOS_UPLOADED);
                }
                Err(e) => {
                    error!("[UPLOAD] Upload for item {} failed: {}", item_id, e);
                    ctx.flash_error(PHOTOS_UPLOAD_ERROR);
                }
            }
        });
    };

    view! {
        <form
            id="upload-photos-form"
            class="upload-photos-form"
            enctype="multipart/form-data"
            node_ref=form_ref
            on:submit=on_submit
        >
            <input
                type="hidden"
                id="upload-item-id"
                name="item_id"
                prop:value=move || item_id.get().map(|id| id.to_string()).unwrap_or_default()
            />
            <input type="file" name="photos" accept="image/*" multiple=true class="requires-auth" />
            <button type="submit" class="requires-auth">"Carica foto"</button>
        </form>
    }
}
