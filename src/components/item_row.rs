//! Item Row Component
//!
//! A list entry: click selects it, its delete button removes it server-side.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::commands;
use crate::context::use_app_context;
use crate::dom::confirm;
use crate::messages::{delete_item_prompt, ITEM_DELETE_ERROR};
use crate::models::Item;
use crate::store::{store_get_item, store_remove_item, store_select_item, AppStateStoreFields};

#[component]
pub fn ItemRow(item: Item, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let id = item.id;

    let is_selected = move || store.inventory().read().selected_id() == Some(id);

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Some(current) = store_get_item(&store, id) else {
            return;
        };
        if !confirm(&delete_item_prompt(&current.collo, &current.matricola)) {
            return;
        }
        spawn_local(async move {
            match commands::delete_item(&current.delete_url).await {
                Ok(message) => {
                    if let Some(removed) = store_remove_item(&store, id) {
                        info!("[ITEM] Deleted {} (detail closed: {})", id, removed.hide_detail);
                    }
                    ctx.flash_success(message);
                }
                Err(e) => {
                    error!("[ITEM] Delete {} failed: {}", id, e);
                    ctx.flash_error(ITEM_DELETE_ERROR);
                }
            }
        });
    };

    view! {
        <li
            class="item-item"
            class:selected=is_selected
            style:display=move || if visible.get() { "" } else { "none" }
            data-id=id.to_string()
            data-collo=item.collo.clone()
            data-codice=item.codice.clone()
            data-matricola=item.matricola.clone()
            data-descrizione=item.descrizione.clone()
            data-delete-url=item.delete_url.clone()
            on:click=move |_| store_select_item(&store, id)
        >
            <span class="item-collo">{item.collo.clone()}</span>
            <span class="item-matricola">{item.matricola.clone()}</span>
            <span class="item-descrizione">{item.descrizione.clone()}</span>
            <button class="btn-delete-item requires-auth" title="Elimina" on:click=on_delete>
                "X"
            </button>
        </li>
    }
}
