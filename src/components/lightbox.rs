//! Lightbox Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_set_lightbox, AppStateStoreFields};

/// Full-size preview; open while the store holds an image source
#[component]
pub fn Lightbox() -> impl IntoView {
    let store = use_app_context().store;
    let close = move |_| store_set_lightbox(&store, None);

    view! {
        <div
            id="lightbox-modal"
            class="lightbox-modal"
            class:active=move || store.lightbox().read().is_some()
        >
            <div id="lightbox-backdrop" class="lightbox-backdrop" on:click=close></div>
            <div class="lightbox-content">
                <button id="lightbox-close" class="lightbox-close" on:click=close>"×"</button>
                <img
                    id="lightbox-image"
                    alt="Foto"
                    src=move || store.lightbox().get().unwrap_or_default()
                />
            </div>
        </div>
    }
}
