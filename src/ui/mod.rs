//! Browser bindings: each controller owns the elements it needs and turns
//! DOM events into calls on the matching `core` state machine.

pub mod dom;
pub mod form;
pub mod intro;
pub mod layers;
pub mod modal;
pub mod navigation;
pub mod reveal;

use chrono::Utc;
use leptos::logging::{log, warn};
use web_sys::{Document, Event};

use crate::core::config::ENDPOINT_META_NAME;
use crate::core::{LandingConfig, LandingResult, PageContext};

pub use form::SpreadsheetSink;
pub use intro::IntroController;
pub use layers::LayerController;
pub use modal::ModalController;
pub use navigation::toggle_cta;

/// Capture the page context and mount every controller once the DOM is ready
pub fn boot() {
    let loaded_at = Utc::now();

    if let Err(err) = navigation::expose_toggle_cta() {
        warn!("cadence: toggleCTA not installed: {}", err);
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            warn!("cadence: {}", err);
            return;
        }
    };

    let ctx = PageContext::new(loaded_at, config_from_document(&document));

    if document.ready_state() == "loading" {
        let mut ctx = Some(ctx);
        let ready = document.clone();
        let result = dom::listen(&document, "DOMContentLoaded", move |_: Event| {
            if let Some(ctx) = ctx.take() {
                mount(&ready, &ctx);
            }
        });
        if let Err(err) = result {
            warn!("cadence: failed to wait for DOMContentLoaded: {}", err);
        }
    } else {
        mount(&document, &ctx);
    }
}

/// Built-in configuration with the endpoint meta tag applied
pub fn config_from_document(document: &Document) -> LandingConfig {
    let selector = format!("meta[name=\"{}\"]", ENDPOINT_META_NAME);
    let endpoint = dom::query(document, &selector).and_then(|meta| meta.get_attribute("content"));
    LandingConfig::default().with_endpoint_override(endpoint.as_deref())
}

/// Mount all controllers. A controller that can't find its elements is
/// skipped; the others still run.
pub fn mount(document: &Document, ctx: &PageContext) {
    let modal = match ModalController::mount(document, ctx.config.timing.modal_hide_delay_ms) {
        Ok(modal) => Some(modal),
        Err(err) => {
            warn!("cadence: success modal unavailable: {}", err);
            None
        }
    };

    match form::mount(document, ctx, modal) {
        Ok(count) => log!("cadence: wired {} waitlist form(s)", count),
        Err(err) => warn!("cadence: waitlist forms not wired: {}", err),
    }

    if let Err(err) = mount_visualization(document, &ctx.config) {
        log!("cadence: visualization not initialised: {}", err);
    }

    if let Err(err) = navigation::mount_anchor_scrolling(document) {
        warn!("cadence: anchor scrolling not wired: {}", err);
    }
}

/// Layer hover, intro sequence and scroll reveal. All three depend on the
/// cards and the diagram being present.
fn mount_visualization(document: &Document, config: &LandingConfig) -> LandingResult<()> {
    LayerController::mount(document)?;

    if let Err(err) = IntroController::mount(document, config) {
        log!("cadence: intro skipped: {}", err);
    }

    let revealed = reveal::mount(document, &config.reveal)?;
    log!("cadence: watching {} element(s) for scroll reveal", revealed);
    Ok(())
}
