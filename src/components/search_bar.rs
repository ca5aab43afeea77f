//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Live filter input shared by both warehouse lists
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <input
            type="search"
            id="search-item"
            class="search-item"
            placeholder="Cerca per collo, codice, matricola o descrizione..."
            autocomplete="off"
            prop:value=move || store.query().get()
            on:input=move |ev| store.query().set(event_target_value(&ev))
        />
    }
}
