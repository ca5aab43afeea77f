//! Inventory State
//!
//! Rows of both warehouses and the single selected row.

use crate::models::{Item, Picture, Warehouse};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
    selected: Option<u32>,
}

/// What the UI must do after a row was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedRow {
    /// Detail panel was showing this row and must close
    pub hide_detail: bool,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, selected: None }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn in_warehouse(&self, warehouse: Warehouse) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.warehouse == warehouse)
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Item> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Select a row, replacing any previous selection. Unknown ids are ignored.
    pub fn select(&mut self, id: u32) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn remove_item(&mut self, id: u32) -> Option<RemovedRow> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        self.items.remove(pos);
        let hide_detail = self.selected == Some(id);
        if hide_detail {
            self.selected = None;
        }
        Some(RemovedRow { hide_detail })
    }

    /// Replace a row's pictures with the server's authoritative list
    pub fn replace_pictures(&mut self, item_id: u32, pictures: Vec<Picture>) -> bool {
        match self.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.pictures = pictures;
                true
            }
            None => false,
        }
    }

    /// Drop one picture wherever it is attached
    pub fn remove_picture(&mut self, picture_id: u32) -> bool {
        for item in &mut self.items {
            let before = item.pictures.len();
            item.pictures.retain(|p| p.id != picture_id);
            if item.pictures.len() != before {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, warehouse: Warehouse, pictures: &[u32]) -> Item {
        Item {
            id,
            warehouse,
            collo: format!("C-{}", id),
            codice: String::new(),
            matricola: format!("SN{}", id),
            descrizione: String::new(),
            quantita: String::new(),
            locazione: warehouse.locazione().to_string(),
            note: String::new(),
            pictures: pictures
                .iter()
                .map(|p| Picture { id: *p, file_path: format!("C-{}/{}.jpg", id, p) })
                .collect(),
            delete_url: format!("/delete_item/{}", id),
        }
    }

    fn sample() -> Inventory {
        Inventory::new(vec![
            make_item(1, Warehouse::One, &[10, 11]),
            make_item(2, Warehouse::Two, &[20]),
            make_item(3, Warehouse::One, &[]),
        ])
    }

    #[test]
    fn test_at_most_one_selection() {
        let mut inv = sample();
        assert!(inv.select(1));
        assert!(inv.select(2));
        assert_eq!(inv.selected_id(), Some(2));
        assert!(!inv.select(99));
        assert_eq!(inv.selected_id(), Some(2));
    }

    #[test]
    fn test_warehouse_split() {
        let inv = sample();
        let ids: Vec<u32> = inv.in_warehouse(Warehouse::One).map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_deleting_selected_row_hides_detail() {
        let mut inv = sample();
        inv.select(1);
        assert_eq!(inv.remove_item(1), Some(RemovedRow { hide_detail: true }));
        assert_eq!(inv.selected_id(), None);
        assert!(inv.get(1).is_none());
    }

    #[test]
    fn test_deleting_other_row_keeps_detail() {
        let mut inv = sample();
        inv.select(1);
        assert_eq!(inv.remove_item(2), Some(RemovedRow { hide_detail: false }));
        assert_eq!(inv.selected_id(), Some(1));
        assert_eq!(inv.items().len(), 2);
        assert_eq!(inv.remove_item(2), None);
    }

    #[test]
    fn test_remove_picture_only_touches_that_picture() {
        let mut inv = sample();
        assert!(inv.remove_picture(10));
        let ids: Vec<u32> = inv.get(1).unwrap().pictures.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![11]);
        assert_eq!(inv.get(2).unwrap().pictures.len(), 1);
        assert!(!inv.remove_picture(10));
    }

    #[test]
    fn test_replace_pictures() {
        let mut inv = sample();
        let fresh = vec![Picture { id: 30, file_path: "C-3/new.jpg".into() }];
        assert!(inv.replace_pictures(3, fresh.clone()));
        assert_eq!(inv.get(3).unwrap().pictures, fresh);
        assert!(!inv.replace_pictures(99, Vec::new()));
    }
}
