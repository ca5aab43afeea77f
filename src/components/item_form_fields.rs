//! Item Form Fields
//!
//! Inputs shared by the add and modify modals. The forms submit natively;
//! the server answers with a redirect back to the page.

use leptos::prelude::*;

use crate::models::{Item, Warehouse};

#[component]
pub fn ItemFormFields(#[prop(optional)] item: Option<Item>) -> impl IntoView {
    let value = |name: &str| item.as_ref().map(|i| i.field(name).to_string()).unwrap_or_default();
    let locazione = value("locazione");
    let note = value("note");

    view! {
        <label>"Collo" <input type="text" name="collo" required=true value=value("collo") /></label>
        <label>"Codice" <input type="text" name="codice" required=true value=value("codice") /></label>
        <label>"Matricola" <input type="text" name="matricola" required=true value=value("matricola") /></label>
        <label>"Descrizione" <input type="text" name="descrizione" value=value("descrizione") /></label>
        <label>"Quantità" <input type="number" name="quantita" min="0" value=value("quantita") /></label>
        <label>
            "Locazione"
            <select name="locazione">
                {Warehouse::ALL.into_iter().map(|w| {
                    let selected = locazione == w.locazione();
                    view! { <option value=w.locazione() selected=selected>{w.label()}</option> }
                }).collect_view()}
            </select>
        </label>
        <label>"Note" <textarea name="note">{note}</textarea></label>
    }
}
