//! Landing page configuration.
//!
//! Built-in values live in `LandingConfig::default()`. In the browser the
//! waitlist endpoint can be overridden with a meta tag, see
//! `LandingConfig::with_endpoint_override`.

/// Google Apps Script web app that appends sign-ups to the waitlist sheet
pub const DEFAULT_WAITLIST_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwLG9aptCJuTIL_GeUC8uuNaD-qkQMwsBPDJRKzMUIabmuHFiyJChAiZum2Z28B9qYu/exec";

/// Name of the `<meta>` tag that overrides the waitlist endpoint
pub const ENDPOINT_META_NAME: &str = "cadence:waitlist-endpoint";

/// Animation timing constants, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    /// Delay between removing the modal's visible class and hiding it
    pub modal_hide_delay_ms: u32,
    /// Duration of the invalid-email shake animation
    pub shake_duration_ms: u32,
    /// How long the intro plays before transitioning on its own
    pub intro_duration_ms: u32,
    /// Zoom/fade of the intro before the main diagram is revealed
    pub intro_fade_out_ms: u32,
    /// Delay from the start of the transition until the cards appear
    pub cards_reveal_delay_ms: u32,
}

impl AnimationTiming {
    /// Time between the main diagram appearing and the cards appearing
    pub fn cards_after_reveal_ms(&self) -> u32 {
        self.cards_reveal_delay_ms
            .saturating_sub(self.intro_fade_out_ms)
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            modal_hide_delay_ms: 300,
            shake_duration_ms: 500,
            intro_duration_ms: 4500,
            intro_fade_out_ms: 700,
            cards_reveal_delay_ms: 1200,
        }
    }
}

/// Options for the generic scroll-reveal observer
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Page-wide configuration shared by all controllers.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    /// Where sign-ups are posted. `None` disables the network call.
    pub waitlist_endpoint: Option<String>,
    pub timing: AnimationTiming,
    /// Fraction of the visualization that must be visible to start the intro
    pub intro_threshold: f64,
    pub reveal: RevealOptions,
}

impl LandingConfig {
    /// Apply an endpoint override read from the page.
    ///
    /// `None` keeps the current endpoint; an empty or blank value disables
    /// submission entirely.
    pub fn with_endpoint_override(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            let value = value.trim();
            self.waitlist_endpoint = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        self
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            waitlist_endpoint: Some(DEFAULT_WAITLIST_ENDPOINT.to_string()),
            timing: AnimationTiming::default(),
            intro_threshold: 0.5,
            reveal: RevealOptions::default(),
        }
    }
}
