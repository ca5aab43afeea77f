//! Page Bootstrap
//!
//! Reads what the server template rendered (rows and pending flashes)
//! before the app takes over the markup.

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::flash::FlashCategory;
use crate::models::{Item, Warehouse};

/// Id of the element the app replaces; falls back to `<body>`
pub const MOUNT_ID: &str = "inventory-root";

#[derive(Debug, Default)]
pub struct Bootstrap {
    pub items: Vec<Item>,
    pub flashes: Vec<(FlashCategory, String)>,
}

impl Bootstrap {
    pub fn from_document(doc: &Document) -> Self {
        let items = Warehouse::ALL
            .into_iter()
            .flat_map(|warehouse| read_rows(doc, warehouse))
            .collect::<Vec<_>>();
        let flashes = read_flashes(doc);
        info!("[BOOT] Found {} rows, {} pending flashes", items.len(), flashes.len());
        Self { items, flashes }
    }
}

fn elements(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn read_rows(doc: &Document, warehouse: Warehouse) -> Vec<Item> {
    let selector = format!("#{} li.item-item", warehouse.list_id());
    elements(doc, &selector)
        .into_iter()
        .filter_map(|li| {
            let item = Item::from_attributes(warehouse, |name| li.get_attribute(&format!("data-{name}")));
            if item.is_none() {
                warn!("[BOOT] Skipping row without a numeric data-id in {}", warehouse.list_id());
            }
            item
        })
        .collect()
}

fn read_flashes(doc: &Document) -> Vec<(FlashCategory, String)> {
    elements(doc, "#flashes li")
        .into_iter()
        .map(|li| {
            let category = FlashCategory::parse(&li.class_name());
            let message = li.text_content().unwrap_or_default().trim().to_string();
            (category, message)
        })
        .filter(|(_, message)| !message.is_empty())
        .collect()
}

/// Ids of server-rendered controls the app renders itself
const REPLACED_IDS: [&str; 9] = [
    "flashes",
    "search-item",
    "item-list-magazzino-1",
    "item-list-magazzino-2",
    "btn-add-item",
    "btn-export-excel",
    "adding-modal",
    "modify-modal",
    "lightbox-modal",
];

/// Drop the static copies of replaced controls wherever the server put them
pub fn remove_replaced_markup(doc: &Document) {
    for id in REPLACED_IDS {
        if let Some(el) = doc.get_element_by_id(id) {
            el.remove();
        }
    }
    for el in elements(doc, ".detail-panel") {
        el.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraped_regions_are_replaced() {
        // Everything read at boot is rendered again by the app
        assert!(REPLACED_IDS.contains(&"flashes"));
        assert!(REPLACED_IDS.contains(&"search-item"));
        for warehouse in Warehouse::ALL {
            assert!(REPLACED_IDS.contains(&warehouse.list_id()));
        }
    }

    #[test]
    fn test_mount_root_is_never_removed() {
        assert!(!REPLACED_IDS.contains(&MOUNT_ID));
    }
}
