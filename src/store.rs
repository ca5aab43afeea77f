//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::flash::{FlashCategory, FlashQueue, FLASH_FADE_MS, FLASH_VISIBLE_MS};
use crate::inventory::{Inventory, RemovedRow};
use crate::models::{Item, Picture};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows of both warehouses plus the selection
    pub inventory: Inventory,
    /// Raw contents of the search box
    pub query: String,
    /// Add-item modal visible
    pub add_open: bool,
    /// Item being edited in the modify modal
    pub editing: Option<u32>,
    /// Full-size image shown in the lightbox
    pub lightbox: Option<String>,
    /// Visible flash messages
    pub flashes: FlashQueue,
}

impl AppState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            inventory: Inventory::new(items),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Flash Helpers
// ========================

/// Show a flash message and schedule its fade-out and removal
pub fn push_flash(store: AppStore, category: FlashCategory, message: impl Into<String>) {
    let message = message.into();
    flash_with(store, move |flashes| Some(flashes.push(category, message)));
}

/// Mutate the flash queue; a returned id gets the removal timers
pub fn flash_with(store: AppStore, f: impl FnOnce(&mut FlashQueue) -> Option<u32>) -> Option<u32> {
    let id = store_update_flashes(&store, f);
    if let Some(id) = id {
        schedule_flash_removal(store, id);
    }
    id
}

/// Run `f` against the flash queue without scheduling any timer
pub fn store_update_flashes<R>(store: &AppStore, f: impl FnOnce(&mut FlashQueue) -> R) -> R {
    let field = store.flashes();
    let mut flashes = field.write();
    f(&mut flashes)
}

fn schedule_flash_removal(store: AppStore, id: u32) {
    Timeout::new(FLASH_VISIBLE_MS, move || {
        store.flashes().write().start_fade(id);
        Timeout::new(FLASH_FADE_MS, move || {
            store.flashes().write().remove(id);
        })
        .forget();
    })
    .forget();
}

// ========================
// Inventory Helpers
// ========================

/// Select a row for the detail panel
pub fn store_select_item(store: &AppStore, item_id: u32) {
    store.inventory().write().select(item_id);
}

pub fn store_get_item(store: &AppStore, item_id: u32) -> Option<Item> {
    store.inventory().read().get(item_id).cloned()
}

/// Remove a row by ID; clears the selection if it pointed at that row
pub fn store_remove_item(store: &AppStore, item_id: u32) -> Option<RemovedRow> {
    store.inventory().write().remove_item(item_id)
}

/// Replace a row's pictures with the list returned by the server
pub fn store_replace_pictures(store: &AppStore, item_id: u32, pictures: Vec<Picture>) {
    store.inventory().write().replace_pictures(item_id, pictures);
}

pub fn store_remove_picture(store: &AppStore, picture_id: u32) {
    store.inventory().write().remove_picture(picture_id);
}

// ========================
// Modal Helpers
// ========================

pub fn store_set_add_open(store: &AppStore, open: bool) {
    store.add_open().set(open);
}

pub fn store_set_editing(store: &AppStore, item_id: Option<u32>) {
    store.editing().set(item_id);
}

pub fn store_set_lightbox(store: &AppStore, src: Option<String>) {
    store.lightbox().set(src);
}
