//! List Filter
//!
//! Case-insensitive substring search over four fields of each row.

use std::collections::HashSet;

use crate::models::Item;

/// Text shown in the placeholder row when a list filters down to nothing
pub const NO_RESULTS_TEXT: &str = "No results found";

/// Lower-cased searchable fields of one row
#[derive(Debug, Clone, PartialEq)]
pub struct SearchKey {
    pub id: u32,
    fields: [String; 4],
}

impl SearchKey {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            fields: [
                item.collo.to_lowercase(),
                item.codice.to_lowercase(),
                item.matricola.to_lowercase(),
                item.descrizione.to_lowercase(),
            ],
        }
    }

    /// `query` must already be normalized
    pub fn matches(&self, query: &str) -> bool {
        self.fields.iter().any(|f| f.contains(query))
    }
}

/// Trim and lower-case user input
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Precomputed keys for one rendered list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
    keys: Vec<SearchKey>,
}

/// Result of one filter pass over a list
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPass {
    /// `(id, visible)` in list order
    pub rows: Vec<(u32, bool)>,
    /// True when the list has rows and every one of them is hidden
    pub no_results: bool,
    visible: HashSet<u32>,
}

impl FilterPass {
    pub fn is_visible(&self, id: u32) -> bool {
        self.visible.contains(&id)
    }
}

impl SearchIndex {
    pub fn build<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        Self {
            keys: items.into_iter().map(SearchKey::from_item).collect(),
        }
    }

    pub fn apply(&self, raw_query: &str) -> FilterPass {
        let query = normalize_query(raw_query);
        let rows: Vec<(u32, bool)> = self
            .keys
            .iter()
            .map(|key| (key.id, key.matches(&query)))
            .collect();
        let visible: HashSet<u32> = rows.iter().filter(|(_, v)| *v).map(|(id, _)| *id).collect();
        let no_results = !rows.is_empty() && visible.is_empty();
        FilterPass { rows, no_results, visible }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Warehouse;

    fn make_item(id: u32, collo: &str, codice: &str, matricola: &str, descrizione: &str) -> Item {
        Item {
            id,
            warehouse: Warehouse::One,
            collo: collo.to_string(),
            codice: codice.to_string(),
            matricola: matricola.to_string(),
            descrizione: descrizione.to_string(),
            quantita: "1".to_string(),
            locazione: "magazzino-1".to_string(),
            note: "irrelevant note".to_string(),
            pictures: Vec::new(),
            delete_url: format!("/delete_item/{}", id),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(1, "C-001", "PMP", "SN100", "Pompa Idraulica"),
            make_item(2, "C-002", "VLV", "SN200", "Valvola di ritegno"),
            make_item(3, "X-777", "MTR", "AB300", "Motore elettrico"),
        ]
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let items = sample();
        let pass = SearchIndex::build(&items).apply("   ");
        assert!(pass.rows.iter().all(|(_, v)| *v));
        assert!(!pass.no_results);
    }

    #[test]
    fn test_match_on_any_field_case_insensitive() {
        let items = sample();
        let index = SearchIndex::build(&items);

        let pass = index.apply("  idraulica ");
        assert_eq!(pass.rows, vec![(1, true), (2, false), (3, false)]);

        let pass = index.apply("sn");
        assert_eq!(pass.rows, vec![(1, true), (2, true), (3, false)]);

        let pass = index.apply("mtr");
        assert!(pass.is_visible(3));
        assert!(!pass.is_visible(1));
    }

    #[test]
    fn test_note_field_is_not_indexed() {
        let items = sample();
        let pass = SearchIndex::build(&items).apply("irrelevant");
        assert!(pass.no_results);
    }

    #[test]
    fn test_visibility_iff_substring_of_some_field() {
        let items = sample();
        let index = SearchIndex::build(&items);
        for query in ["c-0", "00", "ritegno", "x", "zzz", "SN3", "ab3", "o"] {
            let pass = index.apply(query);
            let q = query.to_lowercase();
            for item in &items {
                let expected = [&item.collo, &item.codice, &item.matricola, &item.descrizione]
                    .iter()
                    .any(|f| f.to_lowercase().contains(&q));
                assert_eq!(pass.is_visible(item.id), expected, "query {query:?} item {}", item.id);
            }
        }
    }

    #[test]
    fn test_no_results_only_for_nonempty_lists() {
        let items = sample();
        assert!(SearchIndex::build(&items).apply("nothing-matches").no_results);

        let empty: Vec<Item> = Vec::new();
        let pass = SearchIndex::build(&empty).apply("nothing-matches");
        assert!(pass.rows.is_empty());
        assert!(!pass.no_results);
    }

    #[test]
    fn test_placeholder_cleared_on_next_pass() {
        let items = sample();
        let index = SearchIndex::build(&items);
        assert!(index.apply("nothing").no_results);
        assert!(!index.apply("valvola").no_results);
    }

    #[test]
    fn test_visibility_lookup_on_large_list() {
        let items: Vec<Item> = (0..5000)
            .map(|i| make_item(i, &format!("C-{i}"), "", "", if i % 2 == 0 { "pari" } else { "dispari" }))
            .collect();
        let pass = SearchIndex::build(&items).apply("dispari");
        assert!(pass.is_visible(4999));
        assert!(!pass.is_visible(4998));
        assert!(!pass.is_visible(99_999));
        assert_eq!(pass.rows.iter().filter(|(_, v)| *v).count(), 2500);
    }
}
