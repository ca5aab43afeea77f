//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::flash::FlashCategory;
use crate::store::{push_flash, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive page state
    pub store: AppStore,
    /// Endpoints and flags from the server template, fixed after boot
    config: StoredValue<PageConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: PageConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&PageConfig) -> R) -> R {
        self.config.with_value(f)
    }

    pub fn is_authenticated(&self) -> bool {
        self.config.with_value(|c| c.is_authenticated)
    }

    pub fn flash(&self, category: FlashCategory, message: impl Into<String>) {
        push_flash(self.store, category, message);
    }

    pub fn flash_success(&self, message: impl Into<String>) {
        self.flash(FlashCategory::Success, message);
    }

    pub fn flash_error(&self, message: impl Into<String>) {
        self.flash(FlashCategory::Error, message);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
