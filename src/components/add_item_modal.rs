//! Add Item Modal

use leptos::html;
use leptos::prelude::*;

use crate::components::ItemFormFields;
use crate::context::use_app_context;
use crate::dom::is_self_click;
use crate::store::{store_set_add_open, AppStateStoreFields};

#[component]
pub fn AddItemModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let backdrop = NodeRef::<html::Div>::new();
    let action = ctx.with_config(|c| c.add_item_url.clone());

    let close = move || store_set_add_open(&store, false);
    let on_backdrop = move |ev: web_sys::MouseEvent| {
        if backdrop.get().is_some_and(|el| is_self_click(&ev, &el)) {
            close();
        }
    };

    view! {
        <div
            id="adding-modal"
            class="modal"
            node_ref=backdrop
            style:display=move || if store.add_open().get() { "flex" } else { "none" }
            on:click=on_backdrop
        >
            <div class="modal-box">
                <h2>"Nuovo collo"</h2>
                <form method="post" action=action>
                    <ItemFormFields />
                    <div class="modal-actions">
                        <button type="submit">"Salva"</button>
                        <button type="button" id="btn-close-add" on:click=move |_| close()>"Annulla"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
