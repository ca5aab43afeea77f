//! Magazzino Frontend App
//!
//! Toolbar, the two warehouse lists, the detail panel and the modals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::install_auth_gate;
use crate::bootstrap::Bootstrap;
use crate::components::{
    AddItemModal, DetailPanel, ExportButton, FlashList, ItemList, Lightbox, ModifyItemModal, SearchBar,
};
use crate::config::PageConfig;
use crate::context::AppContext;
use crate::models::Warehouse;
use crate::store::{push_flash, store_set_add_open, AppState};

#[component]
pub fn App(config: PageConfig, bootstrap: Bootstrap) -> impl IntoView {
    let authenticated = config.is_authenticated;
    let Bootstrap { items, flashes } = bootstrap;

    // State
    let store = Store::new(AppState::new(items));
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Messages the server rendered get the same lifetime as client ones
    for (category, message) in flashes {
        push_flash(store, category, message);
    }

    install_auth_gate(store, authenticated);

    let open_add = move |ev: web_sys::MouseEvent| {
        if !ctx.is_authenticated() {
            ev.prevent_default();
            return;
        }
        store_set_add_open(&store, true);
    };

    view! {
        <div class="app-layout">
            <FlashList />

            <header class="toolbar">
                <SearchBar />
                <button id="btn-add-item" class="requires-auth" on:click=open_add>"Aggiungi collo"</button>
                <ExportButton />
            </header>

            <div class="content">
                <main class="warehouses">
                    {Warehouse::ALL.into_iter().map(|warehouse| view! {
                        <section class="warehouse">
                            <h2>{warehouse.label()}</h2>
                            <ItemList warehouse=warehouse />
                        </section>
                    }).collect_view()}
                </main>

                <DetailPanel />
            </div>

            <AddItemModal />
            <ModifyItemModal />
            <Lightbox />
        </div>
    }
}
