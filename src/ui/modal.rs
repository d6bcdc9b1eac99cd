//! Success modal shown after a waitlist sign-up

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::window_event_listener;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::dom;
use crate::core::modal::MODAL_VISIBLE_CLASS;
use crate::core::{LandingResult, ModalState};

pub const MODAL_SELECTOR: &str = "#success-modal";

/// Elements inside the modal that close it when clicked
const CLOSE_SELECTOR: &str = "[data-modal-close], .modal-close";

pub struct ModalController {
    element: HtmlElement,
    state: RefCell<ModalState>,
    hide_delay_ms: u32,
}

impl ModalController {
    /// Find the modal and wire its dismiss triggers
    pub fn mount(document: &Document, hide_delay_ms: u32) -> LandingResult<Rc<Self>> {
        let element = dom::require_html(document, MODAL_SELECTOR)?;
        let state = ModalState::from_rendered(element.hidden());

        let controller = Rc::new(Self {
            element,
            state: RefCell::new(state),
            hide_delay_ms,
        });

        // Close on backdrop click, but not on clicks inside the dialog
        let this = Rc::clone(&controller);
        dom::listen(&controller.element, "click", move |ev: MouseEvent| {
            let backdrop: &JsValue = this.element.as_ref();
            if ev.target().is_some_and(|target| {
                let target: &JsValue = target.as_ref();
                target == backdrop
            }) {
                this.close();
            }
        })?;

        for button in dom::query_all(&*controller.element, CLOSE_SELECTOR) {
            let this = Rc::clone(&controller);
            dom::listen(&button, "click", move |_: MouseEvent| this.close())?;
        }

        // Close on Escape key
        let this = Rc::clone(&controller);
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let dismiss = this.state.borrow().dismisses_on_key(&ev.key());
            if dismiss {
                this.close();
            }
        });
        std::mem::forget(handle);

        Ok(controller)
    }

    pub fn show(&self) {
        self.state.borrow_mut().show();
        self.element.set_hidden(false);
        // Force a reflow so the class change below animates
        let _ = self.element.offset_height();
        dom::add_class(&self.element, MODAL_VISIBLE_CLASS);
    }

    pub fn close(self: &Rc<Self>) {
        let Some(token) = self.state.borrow_mut().close() else {
            return;
        };
        dom::remove_class(&self.element, MODAL_VISIBLE_CLASS);

        let this = Rc::clone(self);
        Timeout::new(self.hide_delay_ms, move || {
            let hide = this.state.borrow_mut().hide_elapsed(token);
            if hide {
                this.element.set_hidden(true);
            }
        })
        .forget();
    }
}
