//! Flash Messages
//!
//! Transient notifications. Each one lives `FLASH_VISIBLE_MS`, then fades
//! for `FLASH_FADE_MS` before removal. No deduplication, no limit.

/// Time before a flash starts fading
pub const FLASH_VISIBLE_MS: u32 = 3000;
/// Fade-out transition length
pub const FLASH_FADE_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlashCategory {
    Success,
    Error,
    #[default]
    Warning,
    Info,
    /// Any other class emitted by the server template
    Other(String),
}

impl FlashCategory {
    pub fn parse(class: &str) -> Self {
        match class.trim() {
            "success" => FlashCategory::Success,
            "error" => FlashCategory::Error,
            "warning" | "" => FlashCategory::Warning,
            "info" => FlashCategory::Info,
            other => FlashCategory::Other(other.to_string()),
        }
    }

    pub fn class(&self) -> &str {
        match self {
            FlashCategory::Success => "success",
            FlashCategory::Error => "error",
            FlashCategory::Warning => "warning",
            FlashCategory::Info => "info",
            FlashCategory::Other(class) => class,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub id: u32,
    pub category: FlashCategory,
    pub message: String,
    pub fading: bool,
}

impl Flash {
    pub fn css_class(&self) -> String {
        if self.fading {
            format!("{} fade-out", self.category.class())
        } else {
            self.category.class().to_string()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashQueue {
    entries: Vec<Flash>,
    next_id: u32,
}

impl FlashQueue {
    pub fn entries(&self) -> &[Flash] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a message and return its id for the removal timers
    pub fn push(&mut self, category: FlashCategory, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Flash {
            id,
            category,
            message: message.into(),
            fading: false,
        });
        id
    }

    pub fn start_fade(&mut self, id: u32) {
        if let Some(flash) = self.entries.iter_mut().find(|f| f.id == id) {
            flash.fading = true;
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.entries.retain(|f| f.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_in_order() {
        let mut queue = FlashQueue::default();
        let a = queue.push(FlashCategory::Success, "primo");
        let b = queue.push(FlashCategory::Success, "primo");
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.entries()[0].message, "primo");
        assert_eq!(queue.entries()[1].id, b);
    }

    #[test]
    fn test_fade_then_remove() {
        let mut queue = FlashQueue::default();
        let id = queue.push(FlashCategory::Error, "errore");
        assert_eq!(queue.entries()[0].css_class(), "error");

        queue.start_fade(id);
        assert_eq!(queue.entries()[0].css_class(), "error fade-out");

        queue.remove(id);
        assert!(queue.is_empty());
        // Timers may fire after an entry is gone
        queue.start_fade(id);
        queue.remove(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(FlashCategory::parse("success"), FlashCategory::Success);
        assert_eq!(FlashCategory::parse(""), FlashCategory::Warning);
        assert_eq!(FlashCategory::parse("message"), FlashCategory::Other("message".into()));
        assert_eq!(FlashCategory::Other("message".into()).class(), "message");
        assert_eq!(FlashCategory::default(), FlashCategory::Warning);
    }
}
