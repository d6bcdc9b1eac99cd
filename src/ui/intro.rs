//! Scroll-triggered intro animation
//!
//! Drives [`IntroSequence`] from the browser: an `IntersectionObserver`
//! starts it, the skip button and timers advance it, and every returned
//! effect is applied to the page here.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::logging::log;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::dom;
use crate::core::intro::{
    FADE_OUT_CLASS, HIDDEN_CLASS, SKIP_BUTTON_CLASS, SKIP_BUTTON_LABEL, VISIBLE_CLASS,
    reaches_threshold,
};
use crate::core::{IntroEffect, IntroSequence, IntroTimer, LandingConfig, LandingResult};

pub const INTRO_SELECTOR: &str = "#cadence-intro";
pub const SVG_SELECTOR: &str = ".cadence-svg";
pub const CARDS_SELECTOR: &str = ".cadence-cards";
pub const VISUALIZATION_SELECTOR: &str = ".cadence-visualization";

pub struct IntroController {
    intro: HtmlElement,
    svg: Element,
    cards: Option<Element>,
    document: Document,
    sequence: RefCell<IntroSequence>,
    timer: RefCell<Option<Timeout>>,
}

impl IntroController {
    /// Pause the intro, add the skip button and arm the one-shot trigger
    pub fn mount(document: &Document, config: &LandingConfig) -> LandingResult<Rc<Self>> {
        let intro = dom::require_html(document, INTRO_SELECTOR)?;
        let svg = dom::require(document, SVG_SELECTOR)?;
        let visualization = dom::require(document, VISUALIZATION_SELECTOR)?;

        let controller = Rc::new(Self {
            intro,
            svg,
            cards: dom::query(document, CARDS_SELECTOR),
            document: document.clone(),
            sequence: RefCell::new(IntroSequence::new(config.timing)),
            timer: RefCell::new(None),
        });

        controller.set_play_state("paused");

        let skip = document.create_element("button")?;
        skip.set_class_name(SKIP_BUTTON_CLASS);
        skip.set_text_content(Some(SKIP_BUTTON_LABEL));
        let this = Rc::clone(&controller);
        dom::listen(&skip, "click", move |_: MouseEvent| {
            let effects = this.sequence.borrow_mut().skip();
            this.apply(effects);
        })?;
        controller.intro.append_child(&skip)?;

        let this = Rc::clone(&controller);
        let threshold = config.intro_threshold;
        dom::observe_intersections(
            &[visualization],
            threshold,
            None,
            move |entry, observer| {
                let ratio = entry.intersection_ratio();
                if !reaches_threshold(entry.is_intersecting(), ratio, threshold) {
                    return;
                }
                let effects = this.sequence.borrow_mut().visible();
                this.apply(effects);
                observer.disconnect();
            },
        )?;

        Ok(controller)
    }

    fn apply(self: &Rc<Self>, effects: Vec<IntroEffect>) {
        for effect in effects {
            match effect {
                IntroEffect::LockScroll => self.set_scroll_overflow("hidden"),
                IntroEffect::UnlockScroll => self.set_scroll_overflow(""),
                IntroEffect::ResumeAnimations => {
                    log!("cadence: intro started");
                    self.set_play_state("running");
                }
                IntroEffect::FadeOutIntro => dom::add_class(&self.intro, FADE_OUT_CLASS),
                IntroEffect::ShowMain => {
                    dom::add_class(&self.intro, HIDDEN_CLASS);
                    dom::add_class(&self.svg, VISIBLE_CLASS);
                }
                IntroEffect::ShowCards => {
                    if let Some(cards) = &self.cards {
                        dom::add_class(cards, VISIBLE_CLASS);
                    }
                }
                IntroEffect::CancelTimer => {
                    // Dropping a Timeout clears it
                    self.timer.borrow_mut().take();
                }
                IntroEffect::Schedule { timer, delay_ms } => {
                    let this = Rc::clone(self);
                    let handle = Timeout::new(delay_ms, move || this.fire(timer));
                    *self.timer.borrow_mut() = Some(handle);
                }
            }
        }
    }

    fn fire(self: &Rc<Self>, timer: IntroTimer) {
        // The firing handle is still stored; dropping it here would free the
        // closure that is currently running.
        if let Some(spent) = self.timer.borrow_mut().take() {
            let _ = spent.forget();
        }
        let effects = self.sequence.borrow_mut().timer_fired(timer);
        self.apply(effects);
    }

    fn set_play_state(&self, state: &str) {
        dom::set_style(&self.intro, "animation-play-state", state);
        for el in dom::query_all(&*self.intro, "*") {
            dom::set_style(&el, "animation-play-state", state);
        }
    }

    fn set_scroll_overflow(&self, value: &str) {
        if let Some(root) = self.document.document_element() {
            dom::set_style(&root, "overflow", value);
        }
        if let Some(body) = self.document.body() {
            dom::set_style(&body, "overflow", value);
        }
    }
}
