//! Intro sequence state machine
//!
//! The intro plays once per page load:
//!
//! ```text
//! Paused --visible--> Running --timer/skip--> FadingOut --fade--> Revealing --cards--> Complete
//!    \___________________skip____________________/^
//! ```
//!
//! Every transition returns the [`IntroEffect`]s the browser layer has to
//! perform, in order. At most one timer is pending at any time; a timer that
//! fires after it was superseded is ignored.

use super::config::AnimationTiming;

pub const FADE_OUT_CLASS: &str = "fade-out";
pub const HIDDEN_CLASS: &str = "hidden";
pub const VISIBLE_CLASS: &str = "visible";
pub const SKIP_BUTTON_CLASS: &str = "skip-intro";
pub const SKIP_BUTTON_LABEL: &str = "Skip →";

/// Whether an observer entry counts as the visualization coming into view.
///
/// Observers also report on creation and when the target leaves, so an
/// intersecting entry below `threshold` does not start the intro.
pub fn reaches_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntroPhase {
    /// Animations paused, waiting for the visualization to scroll into view
    #[default]
    Paused,
    /// Intro animating, page scroll locked
    Running,
    /// Intro zooming out, main diagram not yet shown
    FadingOut,
    /// Main diagram shown, cards pending
    Revealing,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroTimer {
    AutoTransition,
    RevealMain,
    RevealCards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEffect {
    LockScroll,
    UnlockScroll,
    ResumeAnimations,
    /// Add the fade-out class to the intro
    FadeOutIntro,
    /// Hide the intro and make the main diagram visible
    ShowMain,
    /// Make the cards visible, if the page has them
    ShowCards,
    CancelTimer,
    Schedule { timer: IntroTimer, delay_ms: u32 },
}

#[derive(Debug, Clone)]
pub struct IntroSequence {
    phase: IntroPhase,
    pending: Option<IntroTimer>,
    timing: AnimationTiming,
}

impl IntroSequence {
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            phase: IntroPhase::Paused,
            pending: None,
            timing,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn pending_timer(&self) -> Option<IntroTimer> {
        self.pending
    }

    /// The visualization crossed the visibility threshold.
    ///
    /// Only the first call out of `Paused` does anything.
    pub fn visible(&mut self) -> Vec<IntroEffect> {
        if self.phase != IntroPhase::Paused {
            return Vec::new();
        }
        self.phase = IntroPhase::Running;

        let mut effects = vec![IntroEffect::LockScroll, IntroEffect::ResumeAnimations];
        effects.push(self.schedule(IntroTimer::AutoTransition, self.timing.intro_duration_ms));
        effects
    }

    /// The visitor pressed the skip control
    pub fn skip(&mut self) -> Vec<IntroEffect> {
        self.transition()
    }

    /// A scheduled timer fired
    pub fn timer_fired(&mut self, timer: IntroTimer) -> Vec<IntroEffect> {
        if self.pending != Some(timer) {
            return Vec::new();
        }
        self.pending = None;

        match timer {
            IntroTimer::AutoTransition => self.transition(),
            IntroTimer::RevealMain => {
                self.phase = IntroPhase::Revealing;
                vec![
                    IntroEffect::ShowMain,
                    self.schedule(IntroTimer::RevealCards, self.timing.cards_after_reveal_ms()),
                ]
            }
            IntroTimer::RevealCards => {
                self.phase = IntroPhase::Complete;
                vec![IntroEffect::ShowCards]
            }
        }
    }

    fn transition(&mut self) -> Vec<IntroEffect> {
        if !matches!(self.phase, IntroPhase::Paused | IntroPhase::Running) {
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(4);
        if self.pending.take().is_some() {
            effects.push(IntroEffect::CancelTimer);
        }
        effects.push(IntroEffect::UnlockScroll);
        effects.push(IntroEffect::FadeOutIntro);

        self.phase = IntroPhase::FadingOut;
        effects.push(self.schedule(IntroTimer::RevealMain, self.timing.intro_fade_out_ms));
        effects
    }

    fn schedule(&mut self, timer: IntroTimer, delay_ms: u32) -> IntroEffect {
        debug_assert!(self.pending.is_none());
        self.pending = Some(timer);
        IntroEffect::Schedule { timer, delay_ms }
    }
}
