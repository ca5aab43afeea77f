//! Modify Item Modal
//!
//! Pre-filled from the row being edited; posts to that row's modify URL.

use leptos::html;
use leptos::prelude::*;

use crate::components::ItemFormFields;
use crate::context::use_app_context;
use crate::dom::is_self_click;
use crate::store::{store_get_item, store_set_editing, AppStateStoreFields};
use crate::urls::modify_item_url;

#[component]
pub fn ModifyItemModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let backdrop = NodeRef::<html::Div>::new();

    let editing = Memo::new(move |_| store.editing().get().and_then(|id| store_get_item(&store, id)));

    let close = move || store_set_editing(&store, None);
    let on_backdrop = move |ev: web_sys::MouseEvent| {
        if backdrop.get().is_some_and(|el| is_self_click(&ev, &el)) {
            close();
        }
    };

    view! {
        <div
            id="modify-modal"
            class="modal"
            node_ref=backdrop
            style:display=move || if editing.with(Option::is_some) { "flex" } else { "none" }
            on:click=on_backdrop
        >
            <div class="modal-box">
                <h2>"Modifica collo"</h2>
                {move || editing.get().map(|item| {
                    let action = ctx.with_config(|c| modify_item_url(&c.modify_item_url_base, item.id));
                    view! {
                        <form id="modify-form" method="post" action=action>
                            <ItemFormFields item=item />
                            <div class="modal-actions">
                                <button type="submit">"Salva modifiche"</button>
                                <button type="button" id="btn-close-modify" on:click=move |_| close()>
                                    "Annulla"
                                </button>
                            </div>
                        </form>
                    }
                })}
            </div>
        </div>
    }
}
