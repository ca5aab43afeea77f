//! Detail Panel Component
//!
//! Read-only view of the selected row with edit, transfer and picture actions.
//! Hidden while nothing is selected.

use leptos::prelude::*;

use crate::components::{PictureGallery, UploadForm};
use crate::context::use_app_context;
use crate::dom::{confirm, navigate};
use crate::messages::{TRANSFER_PROMPT, TRANSFER_STARTED};
use crate::models::Item;
use crate::store::{store_set_editing, AppStateStoreFields};
use crate::urls::request_transfer_url;

/// (field, element id, label) in display order
const DETAIL_FIELDS: [(&str, &str, &str); 7] = [
    ("collo", "detail-collo", "Collo"),
    ("matricola", "detail-matricola", "Matricola"),
    ("codice", "detail-codice", "Codice"),
    ("descrizione", "detail-descrizione", "Descrizione"),
    ("quantita", "detail-quantita", "Quantità"),
    ("locazione", "detail-locazione", "Locazione"),
    ("note", "detail-note", "Note"),
];

#[component]
pub fn DetailPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let selected = Memo::new(move |_| store.inventory().read().selected().cloned());
    let selected_id = Signal::derive(move || selected.with(|s| s.as_ref().map(|i| i.id)));
    let pictures = Signal::derive(move || {
        selected.with(|s| s.as_ref().map(|i| i.pictures.clone()).unwrap_or_default())
    });

    let on_edit = move |_| {
        if let Some(id) = selected_id.get_untracked() {
            store_set_editing(&store, Some(id));
        }
    };

    let on_transfer = move |_| {
        let Some(id) = selected_id.get_untracked() else {
            return;
        };
        if !confirm(TRANSFER_PROMPT) {
            return;
        }
        let url = ctx.with_config(|c| request_transfer_url(&c.request_transfer_url_base, id));
        log::info!("[TRANSFER] Requesting transfer of {}", id);
        navigate(&url);
        ctx.flash_success(TRANSFER_STARTED);
    };

    view! {
        <aside
            class="detail-panel"
            style:display=move || if selected_id.get().is_some() { "block" } else { "none" }
        >
            <dl class="detail-fields">
                {DETAIL_FIELDS.into_iter().map(|(field, id, label)| {
                    let value = move || {
                        selected.with(|s| s.as_ref().map(|i: &Item| i.field(field).to_string()).unwrap_or_default())
                    };
                    view! {
                        <dt>{label}</dt>
                        <dd id=id>{value}</dd>
                    }
                }).collect_view()}
            </dl>

            <div class="detail-actions">
                <button id="btn-edit-item" class="requires-auth" on:click=on_edit>"Modifica"</button>
                <button id="btn-request-transfer" class="requires-auth" on:click=on_transfer>
                    "Richiedi trasferimento"
                </button>
            </div>

            <section class="detail-pictures">
                <h3>"Foto"</h3>
                <PictureGallery pictures=pictures />
                <UploadForm item_id=selected_id />
            </section>
        </aside>
    }
}
