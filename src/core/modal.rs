//! Success modal state
//!
//! The modal cycles `Hidden -> Shown -> Closing -> Hidden`. Closing removes
//! the visible class at once and hides the element after a delay; each close
//! hands out a [`HideToken`] so a hide that was overtaken by a reopen can be
//! recognised and dropped.

/// CSS class that animates the modal in
pub const MODAL_VISIBLE_CLASS: &str = "show";

/// Key that dismisses the modal
pub const DISMISS_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Hidden,
    Shown,
    Closing,
}

/// Identifies the close that scheduled a pending hide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideToken(u64);

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    phase: ModalPhase,
    generation: u64,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from whatever the markup rendered
    pub fn from_rendered(hidden: bool) -> Self {
        Self {
            phase: if hidden {
                ModalPhase::Hidden
            } else {
                ModalPhase::Shown
            },
            generation: 0,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == ModalPhase::Hidden
    }

    /// Mark the modal shown. Any pending hide becomes stale.
    pub fn show(&mut self) {
        self.generation += 1;
        self.phase = ModalPhase::Shown;
    }

    /// Begin closing. Returns the token for the delayed hide, or `None`
    /// when the modal is not currently shown.
    pub fn close(&mut self) -> Option<HideToken> {
        if self.phase != ModalPhase::Shown {
            return None;
        }
        self.generation += 1;
        self.phase = ModalPhase::Closing;
        Some(HideToken(self.generation))
    }

    /// The hide delay for `token` elapsed. Returns whether the element
    /// should actually be hidden now.
    pub fn hide_elapsed(&mut self, token: HideToken) -> bool {
        if self.phase == ModalPhase::Closing && token.0 == self.generation {
            self.phase = ModalPhase::Hidden;
            true
        } else {
            false
        }
    }

    /// Whether a key press should dismiss the modal
    pub fn dismisses_on_key(&self, key: &str) -> bool {
        key == DISMISS_KEY && !self.is_hidden()
    }
}
