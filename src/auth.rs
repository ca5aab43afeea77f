//! Auth Gate
//!
//! Blocks clicks on `.requires-auth` controls for anonymous visitors.
//! UX only; the server enforces authorization on its own.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::flash::{FlashCategory, FlashQueue};
use crate::store::{flash_with, AppStore};

pub const GATED_SELECTOR: &str = ".requires-auth";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Devi aver effettuato l'accesso per eseguire questa azione.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDecision {
    Allow,
    Block,
}

/// Decide a click on a gated control, queueing the error flash when blocked
pub fn gate_click(authenticated: bool, flashes: &mut FlashQueue) -> Option<u32> {
    match decide(authenticated) {
        ClickDecision::Allow => None,
        ClickDecision::Block => Some(flashes.push(FlashCategory::Error, LOGIN_REQUIRED_MESSAGE)),
    }
}

pub fn decide(authenticated: bool) -> ClickDecision {
    if authenticated {
        ClickDecision::Allow
    } else {
        ClickDecision::Block
    }
}

/// Install one capture-phase click listener on `window`.
///
/// Capturing at the window runs before the target's own listeners and before
/// Leptos' delegated handlers, so `stop_immediate_propagation` keeps them all
/// from firing. Controls rendered later are covered too.
pub fn install_auth_gate(store: AppStore, authenticated: bool) {
    if decide(authenticated) == ClickDecision::Allow {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let gated = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(GATED_SELECTOR).ok().flatten())
            .is_some();
        if !gated {
            return;
        }
        event.prevent_default();
        event.stop_immediate_propagation();
        log::info!("[AUTH] Blocked click on gated control");
        flash_with(store, |flashes| gate_click(authenticated, flashes));
    });

    let _ = window.add_event_listener_with_callback_and_bool("click", callback.as_ref().unchecked_ref(), true);
    callback.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_click_blocked_with_one_flash() {
        let mut flashes = FlashQueue::default();
        assert!(gate_click(false, &mut flashes).is_some());
        assert_eq!(flashes.len(), 1);
        let flash = &flashes.entries()[0];
        assert_eq!(flash.category, FlashCategory::Error);
        assert_eq!(flash.message, LOGIN_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_each_blocked_click_adds_exactly_one_flash() {
        let mut flashes = FlashQueue::default();
        for n in 1..=3 {
            gate_click(false, &mut flashes);
            assert_eq!(flashes.len(), n);
        }
    }

    #[test]
    fn test_authenticated_click_passes_silently() {
        let mut flashes = FlashQueue::default();
        assert_eq!(gate_click(true, &mut flashes), None);
        assert!(flashes.is_empty());
        assert_eq!(decide(true), ClickDecision::Allow);
    }
}
