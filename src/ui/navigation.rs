//! Call-to-action panel toggle and smooth in-page scrolling

use js_sys::Reflect;
use wasm_bindgen::prelude::{Closure, wasm_bindgen};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlAnchorElement, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::dom;
use crate::core::navigation::{TOGGLE_CTA_GLOBAL, anchor_target_id};
use crate::core::{CtaOption, LandingResult};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Switch between the hosted and self-host call-to-action panels.
///
/// Exported for the inline `onclick` handlers in the page markup.
#[wasm_bindgen(js_name = toggleCTA)]
pub fn toggle_cta(option: &str) {
    let Ok(document) = dom::document() else {
        return;
    };
    let (shown, hidden) = CtaOption::parse(option).panel_ids();

    if let Some(panel) = panel(&document, hidden) {
        panel.set_hidden(true);
    }
    if let Some(panel) = panel(&document, shown) {
        panel.set_hidden(false);
    }
}

/// Install [`toggle_cta`] as `window.toggleCTA`.
///
/// The module export alone is not visible to inline handlers, which resolve
/// names on the global object.
pub fn expose_toggle_cta() -> LandingResult<()> {
    let window = dom::window()?;
    let handler = Closure::<dyn Fn(String)>::new(|option: String| toggle_cta(&option));
    Reflect::set(
        window.as_ref(),
        &JsValue::from_str(TOGGLE_CTA_GLOBAL),
        handler.as_ref(),
    )?;
    handler.forget();
    Ok(())
}

fn panel(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Make `#fragment` links scroll smoothly instead of jumping.
/// Returns how many links were wired.
pub fn mount_anchor_scrolling(document: &Document) -> LandingResult<usize> {
    let anchors: Vec<HtmlAnchorElement> = dom::query_all(document, ANCHOR_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .collect();

    for anchor in &anchors {
        let link = anchor.clone();
        let document = document.clone();
        dom::listen(anchor, "click", move |ev: MouseEvent| {
            ev.prevent_default();

            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target_id(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }

    Ok(anchors.len())
}
