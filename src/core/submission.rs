//! Waitlist sign-ups
//!
//! A valid email becomes a [`SubmissionRecord`] which is handed to a
//! [`WaitlistSink`]. Sinks are best-effort: they return nothing and report
//! nothing, and the caller shows the success modal regardless.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::config::LandingConfig;
use super::validation::is_valid_email;

/// One sign-up as posted to the waitlist endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub email: String,
    /// ISO-8601 UTC timestamp with millisecond precision
    pub timestamp: String,
    /// URL of the page the form was submitted from
    pub source: String,
    /// Whole seconds between page load and submission
    pub time_on_page: i64,
}

impl SubmissionRecord {
    pub fn new(
        email: impl Into<String>,
        source: impl Into<String>,
        loaded_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: source.into(),
            time_on_page: seconds_between(loaded_at, now),
        }
    }
}

/// Elapsed seconds rounded to the nearest whole second, never negative
pub fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds().max(0);
    (millis as f64 / 1000.0).round() as i64
}

/// Destination for sign-ups.
///
/// `notify` is fire-and-forget: implementations must not block and have no
/// way to report failure back to the form.
pub trait WaitlistSink {
    fn notify(&self, record: SubmissionRecord);
}

/// What the form should do after a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Email failed validation: shake the input group, nothing else
    Rejected,
    /// Email accepted: show the success modal and reset the form
    Accepted,
}

/// One step the form controller performs after a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Play the shake animation on the input group
    Shake,
    ShowModal,
    ResetForm,
}

impl SubmitOutcome {
    /// Steps to run for this outcome, in order
    pub fn actions(self) -> &'static [FormAction] {
        match self {
            SubmitOutcome::Rejected => &[FormAction::Shake],
            SubmitOutcome::Accepted => &[FormAction::ShowModal, FormAction::ResetForm],
        }
    }
}

/// Page context captured once at startup and shared by the form handlers
#[derive(Debug, Clone)]
pub struct PageContext {
    pub loaded_at: DateTime<Utc>,
    pub config: LandingConfig,
}

impl PageContext {
    pub fn new(loaded_at: DateTime<Utc>, config: LandingConfig) -> Self {
        Self { loaded_at, config }
    }
}

/// Validates sign-ups and forwards accepted ones to an optional sink
pub struct Waitlist<S> {
    sink: Option<S>,
    loaded_at: DateTime<Utc>,
}

impl<S: WaitlistSink> Waitlist<S> {
    pub fn new(sink: Option<S>, loaded_at: DateTime<Utc>) -> Self {
        Self { sink, loaded_at }
    }

    /// Handle one submit of `email` from the page at `source`.
    ///
    /// Without a sink the email is still accepted; only the network call is
    /// skipped.
    pub fn submit(&self, email: &str, source: &str, now: DateTime<Utc>) -> SubmitOutcome {
        if !is_valid_email(email) {
            return SubmitOutcome::Rejected;
        }

        if let Some(sink) = &self.sink {
            sink.notify(SubmissionRecord::new(email, source, self.loaded_at, now));
        }

        SubmitOutcome::Accepted
    }
}
