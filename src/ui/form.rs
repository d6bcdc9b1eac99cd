//! Waitlist form handling

use std::rc::Rc;

use chrono::Utc;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use leptos::logging::{log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, RequestMode};

use super::dom;
use super::modal::ModalController;
use crate::core::{
    FormAction, LandingResult, PageContext, SubmissionRecord, Waitlist, WaitlistSink,
};

pub const FORM_SELECTOR: &str = ".waitlist-form";
const EMAIL_INPUT_SELECTOR: &str = "input[name=\"email\"]";
const FORM_GROUP_SELECTOR: &str = ".form-group";

/// Posts sign-ups to the spreadsheet endpoint.
///
/// The request uses `no-cors`, so the response is opaque and never read.
/// Transport errors only reach the console.
pub struct SpreadsheetSink {
    endpoint: String,
}

impl SpreadsheetSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl WaitlistSink for SpreadsheetSink {
    fn notify(&self, record: SubmissionRecord) {
        let request = Request::post(&self.endpoint)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/json")
            .json(&record);

        spawn_local(async move {
            let result = match request {
                Ok(request) => request.send().await.map(|_| ()),
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                warn!("cadence: waitlist submission failed: {}", err);
            }
        });
    }
}

struct FormController {
    waitlist: Waitlist<SpreadsheetSink>,
    modal: Option<Rc<ModalController>>,
    shake_duration_ms: u32,
}

impl FormController {
    fn handle_submit(&self, form: &HtmlFormElement) {
        let root: &Element = form;
        let email = dom::query(root, EMAIL_INPUT_SELECTOR)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();

        let outcome = self
            .waitlist
            .submit(&email, &dom::location_href(), Utc::now());

        for action in outcome.actions() {
            match action {
                FormAction::Shake => {
                    if let Some(group) = dom::query(root, FORM_GROUP_SELECTOR) {
                        self.shake(group);
                    }
                }
                FormAction::ShowModal => {
                    if let Some(modal) = &self.modal {
                        modal.show();
                    }
                }
                FormAction::ResetForm => form.reset(),
            }
        }
    }

    /// Run the shake animation once and clear it afterwards
    fn shake(&self, group: Element) {
        let duration = self.shake_duration_ms;
        dom::set_style(&group, "animation", &format!("shake {}ms ease", duration));
        Timeout::new(duration, move || dom::set_style(&group, "animation", "")).forget();
    }
}

/// Wire every waitlist form on the page. Returns how many were found.
pub fn mount(
    document: &Document,
    ctx: &PageContext,
    modal: Option<Rc<ModalController>>,
) -> LandingResult<usize> {
    let sink = ctx
        .config
        .waitlist_endpoint
        .as_deref()
        .map(SpreadsheetSink::new);
    if sink.is_none() {
        log!("cadence: no waitlist endpoint configured, sign-ups stay local");
    }

    let controller = Rc::new(FormController {
        waitlist: Waitlist::new(sink, ctx.loaded_at),
        modal,
        shake_duration_ms: ctx.config.timing.shake_duration_ms,
    });

    let forms: Vec<HtmlFormElement> = dom::query_all(document, FORM_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .collect();

    for form in &forms {
        let this = Rc::clone(&controller);
        let target = form.clone();
        dom::listen(form, "submit", move |ev: Event| {
            ev.prevent_default();
            this.handle_submit(&target);
        })?;
    }

    Ok(forms.len())
}
