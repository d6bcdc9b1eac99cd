//! Target-independent landing page logic: configuration, validation and the
//! state machines driven by the browser layer

pub mod config;
pub mod error;
pub mod intro;
pub mod layers;
pub mod modal;
pub mod navigation;
pub mod submission;
pub mod validation;
#[cfg(test)]
mod tests;

pub use config::{AnimationTiming, LandingConfig, RevealOptions};
pub use error::{LandingError, LandingResult};
pub use intro::{IntroEffect, IntroPhase, IntroSequence, IntroTimer};
pub use layers::{Layer, LayerHighlighter, StyleWrite, Target};
pub use modal::{HideToken, ModalPhase, ModalState};
pub use navigation::CtaOption;
pub use submission::{
    FormAction, PageContext, SubmissionRecord, SubmitOutcome, Waitlist, WaitlistSink,
};
pub use validation::is_valid_email;
