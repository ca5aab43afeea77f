//! Item List Component
//!
//! One warehouse list. Rows are hidden, never removed, by the filter; a single
//! placeholder row appears when every row is hidden.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_app_context;
use crate::filter::{SearchIndex, NO_RESULTS_TEXT};
use crate::models::{Item, Warehouse};
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemList(warehouse: Warehouse) -> impl IntoView {
    let store = use_app_context().store;

    let rows = Memo::new(move |_| {
        store
            .inventory()
            .read()
            .in_warehouse(warehouse)
            .cloned()
            .collect::<Vec<Item>>()
    });
    // Keys are rebuilt only when the rows change, not on every keystroke
    let index = Memo::new(move |_| rows.with(|rows| SearchIndex::build(rows)));
    let pass = Memo::new(move |_| {
        let query = store.query().get();
        index.with(|index| index.apply(&query))
    });

    view! {
        <ul id=warehouse.list_id() class="item-list">
            <For
                each=move || rows.get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let visible = Signal::derive(move || pass.with(|p| p.is_visible(id)));
                    view! { <ItemRow item=item visible=visible /> }
                }
            />
            <Show when=move || pass.with(|p| p.no_results)>
                <li class="no-results">{NO_RESULTS_TEXT}</li>
            </Show>
        </ul>
    }
}
