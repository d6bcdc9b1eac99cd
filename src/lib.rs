//! Cadence OS landing page
//!
//! Client-side behaviour for the landing page, compiled to WebAssembly:
//! the waitlist form, the success modal, the scroll-triggered intro and the
//! hover-driven layer highlighting of the cadence diagram.

pub mod core;
#[cfg(feature = "hydrate")]
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    ui::boot();
}
