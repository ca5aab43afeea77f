//! Flash List Component
//!
//! Renders `#flashes`; entries fade and disappear on their own timers.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn FlashList() -> impl IntoView {
    let store = use_app_context().store;

    let class_of = move |id: u32| {
        store
            .flashes()
            .read()
            .entries()
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.css_class())
            .unwrap_or_default()
    };

    view! {
        <ul id="flashes" class="flashes">
            <For
                each=move || store.flashes().read().entries().to_vec()
                key=|flash| flash.id
                children=move |flash| {
                    let id = flash.id;
                    view! {
                        <li
                            class=move || class_of(id)
                            title="Chiudi"
                            on:click=move |_| store.flashes().write().remove(id)
                        >
                            {flash.message}
                        </li>
                    }
                }
            />
        </ul>
    }
}
