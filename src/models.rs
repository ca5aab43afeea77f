//! Frontend Models
//!
//! Data structures matching what the server template and JSON endpoints emit.

use log::warn;
use serde::{Deserialize, Serialize};

/// One uploaded image attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub id: u32,
    pub file_path: String,
}

impl Picture {
    /// Last path segment, shown in the delete confirmation
    pub fn filename(&self) -> &str {
        self.file_path.rsplit('/').next().unwrap_or(&self.file_path)
    }
}

/// The two warehouse lists rendered on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warehouse {
    One,
    Two,
}

impl Warehouse {
    pub const ALL: [Warehouse; 2] = [Warehouse::One, Warehouse::Two];

    /// `id` of the `<ul>` holding this warehouse's rows
    pub fn list_id(self) -> &'static str {
        match self {
            Warehouse::One => "item-list-magazzino-1",
            Warehouse::Two => "item-list-magazzino-2",
        }
    }

    /// Value stored in the item's `locazione` column
    pub fn locazione(self) -> &'static str {
        match self {
            Warehouse::One => "magazzino-1",
            Warehouse::Two => "magazzino-2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Warehouse::One => "Magazzino 1",
            Warehouse::Two => "Magazzino 2",
        }
    }
}

/// Inventory row as rendered by the server
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub warehouse: Warehouse,
    pub collo: String,
    pub codice: String,
    pub matricola: String,
    pub descrizione: String,
    pub quantita: String,
    pub locazione: String,
    pub note: String,
    pub pictures: Vec<Picture>,
    pub delete_url: String,
}

impl Item {
    /// Build a row from its `data-*` attributes (`name` without the prefix).
    /// Returns `None` when the id is missing or not numeric.
    pub fn from_attributes(warehouse: Warehouse, attr: impl Fn(&str) -> Option<String>) -> Option<Item> {
        let id = attr("id")?.trim().parse::<u32>().ok()?;
        let text = |name: &str| attr(name).unwrap_or_default();

        let delete_url = attr("delete-url")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| format!("/delete_item/{id}"));

        Some(Item {
            id,
            warehouse,
            collo: text("collo"),
            codice: text("codice"),
            matricola: text("matricola"),
            descrizione: text("descrizione"),
            quantita: text("quantita"),
            locazione: text("locazione"),
            note: text("note"),
            pictures: parse_pictures(attr("pictures").as_deref().unwrap_or("")),
            delete_url,
        })
    }

    /// Look up an editable field by its form name
    pub fn field(&self, name: &str) -> &str {
        match name {
            "collo" => &self.collo,
            "codice" => &self.codice,
            "matricola" => &self.matricola,
            "descrizione" => &self.descrizione,
            "quantita" => &self.quantita,
            "locazione" => &self.locazione,
            "note" => &self.note,
            _ => "",
        }
    }
}

/// Decode the `data-pictures` JSON array. Blank or malformed input yields no pictures.
pub fn parse_pictures(raw: &str) -> Vec<Picture> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Picture>>(raw) {
        Ok(pictures) => pictures,
        Err(e) => {
            warn!("[MODELS] Ignoring malformed pictures attribute: {}", e);
            Vec::new()
        }
    }
}
