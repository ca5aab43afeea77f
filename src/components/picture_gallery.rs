//! Picture Gallery Component
//!
//! Thumbnails of the selected row. The server list is authoritative: the
//! gallery only re-renders from it and never keeps its own copy.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use crate::commands;
use crate::context::use_app_context;
use crate::dom::confirm;
use crate::messages::{delete_photo_prompt, PHOTO_DELETED, PHOTO_DELETE_ERROR};
use crate::models::Picture;
use crate::store::{store_remove_picture, store_set_lightbox};
use crate::urls::{delete_photo_url, picture_src};

#[component]
pub fn PictureGallery(#[prop(into)] pictures: Signal<Vec<Picture>>) -> impl IntoView {
    view! {
        <div id="pictures-list" class="pictures-list">
            <For
                each=move || pictures.get()
                key=|pic| pic.id
                children=move |pic| view! { <PictureThumb picture=pic /> }
            />
        </div>
    }
}

#[component]
fn PictureThumb(picture: Picture) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = picture.id;
    let src = ctx.with_config(|c| picture_src(&c.uploads_base, &picture.file_path));
    let filename = picture.filename().to_string();

    let open_lightbox = {
        let src = src.clone();
        move |_| store_set_lightbox(&store, Some(src.clone()))
    };

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if !confirm(&delete_photo_prompt(&filename)) {
            return;
        }
        let url = ctx.with_config(|c| delete_photo_url(&c.delete_photo_url_base, id));
        spawn_local(async move {
            match commands::delete_photo(&url).await {
                Ok(()) => {
                    store_remove_picture(&store, id);
                    ctx.flash_success(PHOTO_DELETED);
                }
                Err(e) => {
                    error!("[PHOTO] Delete {} failed: {}", id, e);
                    ctx.flash_error(PHOTO_DELETE_ERROR);
                }
            }
        });
    };

    view! {
        <div class="picture-item">
            <img src=src alt="Foto" on:click=open_lightbox />
            <button
                class="btn-delete-item requires-auth"
                data-photo-id=id.to_string()
                on:click=on_delete
            >
                "X"
            </button>
        </div>
    }
}
