#![allow(non_snake_case)]

mod api;
mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use tracing::Level;
use tripmate_core::PageBootstrap;

/// Page bootstrap, read once from the host page at startup
static BOOTSTRAP: OnceLock<PageBootstrap> = OnceLock::new();

/// Get the page bootstrap (defaults if the host page supplied none)
pub fn get_bootstrap() -> &'static PageBootstrap {
    BOOTSTRAP.get_or_init(PageBootstrap::default)
}

fn main() {
    // Routes tracing output to the browser console
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        // No subscriber to go through, so write to the console directly
        gloo::console::warn!(format!("Tracing logger not installed: {}", e));
    }

    let bootstrap = match context::read_bootstrap() {
        Ok(boot) => boot,
        Err(e) => {
            tracing::warn!("Ignoring page bootstrap: {:#}", e);
            PageBootstrap::default()
        }
    };

    tracing::info!(
        signed_in = !bootstrap.user_email.is_empty(),
        plans = bootstrap.plans.len(),
        "Starting Tripmate"
    );

    let _ = BOOTSTRAP.set(bootstrap);

    dioxus::launch(app::App);
}
