//! Generic scroll-reveal: elements gain `animate-in` once they scroll into view

use web_sys::Document;

use super::dom;
use crate::core::{LandingResult, RevealOptions};

pub const REVEAL_SELECTOR: &str = ".cadence-visualization, [data-reveal]";
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Observe every reveal target. Returns how many elements are watched.
pub fn mount(document: &Document, options: &RevealOptions) -> LandingResult<usize> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(0);
    }

    dom::observe_intersections(
        &targets,
        options.threshold,
        Some(&options.root_margin),
        |entry, _| {
            if entry.is_intersecting() {
                dom::add_class(&entry.target(), ANIMATE_IN_CLASS);
            }
        },
    )?;

    Ok(targets.len())
}
