//! Thin helpers over `web-sys` used by every controller

use crate::core::{LandingError, LandingResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, SvgElement,
};

pub fn window() -> LandingResult<web_sys::Window> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document() -> LandingResult<Document> {
    window()?.document().ok_or(LandingError::NoDocument)
}

/// Current page URL, empty if the location can't be read
pub fn location_href() -> String {
    window()
        .ok()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// First element under `root` matching `selector`.
///
/// An invalid selector is treated the same as no match.
pub fn query(root: &impl ParentNodeExt, selector: &str) -> Option<Element> {
    root.select_one(selector).ok().flatten()
}

/// Like [`query`] but a missing element is an error
pub fn require(root: &impl ParentNodeExt, selector: &str) -> LandingResult<Element> {
    query(root, selector).ok_or_else(|| LandingError::missing(selector))
}

/// All elements under `root` matching `selector`
pub fn query_all(root: &impl ParentNodeExt, selector: &str) -> Vec<Element> {
    let Ok(list) = root.select_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn require_html(document: &Document, selector: &str) -> LandingResult<HtmlElement> {
    require(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| LandingError::missing(selector))
}

/// Inline style of an HTML or SVG element
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        Some(html.style())
    } else {
        element.dyn_ref::<SvgElement>().map(SvgElement::style)
    }
}

/// Set an inline style property. An empty value removes the override.
pub fn set_style(element: &Element, property: &str, value: &str) {
    let Some(style) = inline_style(element) else {
        return;
    };
    if value.is_empty() {
        let _ = style.remove_property(property);
    } else {
        let _ = style.set_property(property, value);
    }
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

/// Attach `handler` to `event` on `target` for the lifetime of the page
pub fn listen<E, F>(target: &web_sys::EventTarget, event: &str, handler: F) -> LandingResult<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Observe `targets` and call `on_entry` for every intersection change.
///
/// The observer lives for the rest of the page; callers disconnect it
/// through the handle passed to `on_entry` when they are done.
pub fn observe_intersections<F>(
    targets: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: F,
) -> LandingResult<IntersectionObserver>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&threshold.into());
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}

/// Selector queries shared by `Document` and `Element`
pub trait ParentNodeExt {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, wasm_bindgen::JsValue>;
    fn select_all(&self, selector: &str) -> Result<web_sys::NodeList, wasm_bindgen::JsValue>;
}

impl ParentNodeExt for Document {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, wasm_bindgen::JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<web_sys::NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

impl ParentNodeExt for Element {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, wasm_bindgen::JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<web_sys::NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}
