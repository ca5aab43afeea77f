#![allow(warnings)]
//! Magazzino Frontend Entry Point

mod models;
mod config;
mod error;
mod messages;
mod urls;
mod filter;
mod flash;
mod inventory;
mod store;
mod context;
mod auth;
mod dom;
mod bootstrap;
mod commands;
mod components;
mod app;

use app::App;
use bootstrap::{Bootstrap, MOUNT_ID};
use config::PageConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(doc) = dom::web_document() else {
        return;
    };

    let config = PageConfig::from_body();
    let bootstrap = Bootstrap::from_document(&doc);
    // Scraped markup may sit outside the mount root too
    bootstrap::remove_replaced_markup(&doc);

    if let Some(root) = doc
        .get_element_by_id(MOUNT_ID)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
    {
        root.set_inner_html("");
        leptos::mount::mount_to(root, move || view! { <App config=config bootstrap=bootstrap /> }).forget();
    } else {
        leptos::mount::mount_to_body(move || view! { <App config=config bootstrap=bootstrap /> });
    }
}
