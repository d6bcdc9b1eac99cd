//! Hover interactions between the layer cards and the cadence diagram

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, MouseEvent};

use super::dom;
use super::intro::SVG_SELECTOR;
use crate::core::layers::{ACTIVE_CARD_CLASS, CARD_SELECTOR, LAYER_ATTRIBUTE};
use crate::core::{Layer, LandingError, LandingResult, LayerHighlighter, StyleWrite};

pub struct LayerController {
    cards: Vec<Element>,
    svg: Element,
    highlighter: RefCell<LayerHighlighter>,
}

impl LayerController {
    /// Wire hover handlers on every layer card.
    ///
    /// Fails when the page has no cards or no diagram; the rest of the
    /// visualization is skipped in that case.
    pub fn mount(document: &Document) -> LandingResult<Rc<Self>> {
        let cards = dom::query_all(document, CARD_SELECTOR);
        if cards.is_empty() {
            return Err(LandingError::missing(CARD_SELECTOR));
        }
        let svg = dom::require(document, SVG_SELECTOR)?;

        let controller = Rc::new(Self {
            cards,
            svg,
            highlighter: RefCell::new(LayerHighlighter::new()),
        });

        for card in &controller.cards {
            let Some(name) = card.get_attribute(LAYER_ATTRIBUTE) else {
                continue;
            };
            let layer = Layer::new(name);

            let this = Rc::clone(&controller);
            let hovered = card.clone();
            dom::listen(card, "mouseenter", move |_: MouseEvent| {
                this.enter(&hovered, layer.clone());
            })?;

            let this = Rc::clone(&controller);
            let hovered = card.clone();
            dom::listen(card, "mouseleave", move |_: MouseEvent| {
                this.leave(&hovered);
            })?;
        }

        Ok(controller)
    }

    fn enter(&self, card: &Element, layer: Layer) {
        for other in &self.cards {
            dom::remove_class(other, ACTIVE_CARD_CLASS);
        }
        dom::add_class(card, ACTIVE_CARD_CLASS);

        let writes = self.highlighter.borrow_mut().enter(layer);
        self.apply(&writes);
    }

    fn leave(&self, card: &Element) {
        dom::remove_class(card, ACTIVE_CARD_CLASS);

        let writes = self.highlighter.borrow_mut().leave();
        self.apply(&writes);
    }

    /// Apply style writes inside the diagram, skipping targets it lacks
    fn apply(&self, writes: &[StyleWrite]) {
        for write in writes {
            let selector = write.target.selector();
            if write.target.is_group() {
                for el in dom::query_all(&self.svg, &selector) {
                    dom::set_style(&el, write.property, write.value);
                }
            } else if let Some(el) = dom::query(&self.svg, &selector) {
                dom::set_style(&el, write.property, write.value);
            }
        }
    }
}
