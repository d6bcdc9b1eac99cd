//! Call-to-action toggle and in-page anchor helpers

pub const CTA_HOSTED_ID: &str = "cta-hosted";
pub const CTA_SELFHOST_ID: &str = "cta-selfhost";

/// Window property the inline `onclick="toggleCTA('…')"` handlers call
pub const TOGGLE_CTA_GLOBAL: &str = "toggleCTA";

/// Which call-to-action panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CtaOption {
    #[default]
    Hosted,
    SelfHost,
}

impl CtaOption {
    /// Anything other than `selfhost` falls back to the hosted panel
    pub fn parse(s: &str) -> Self {
        match s {
            "selfhost" => CtaOption::SelfHost,
            _ => CtaOption::Hosted,
        }
    }

    /// Element ids as `(shown, hidden)`
    pub fn panel_ids(&self) -> (&'static str, &'static str) {
        match self {
            CtaOption::Hosted => (CTA_HOSTED_ID, CTA_SELFHOST_ID),
            CtaOption::SelfHost => (CTA_SELFHOST_ID, CTA_HOSTED_ID),
        }
    }
}

/// Id referenced by an in-page link such as `#features`.
///
/// A bare `#` and non-fragment hrefs yield `None`.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_parse() {
        assert_eq!(CtaOption::parse("selfhost"), CtaOption::SelfHost);
        assert_eq!(CtaOption::parse("hosted"), CtaOption::Hosted);
        assert_eq!(CtaOption::parse("anything"), CtaOption::Hosted);
    }

    #[test]
    fn test_cta_panel_ids() {
        assert_eq!(
            CtaOption::SelfHost.panel_ids(),
            ("cta-selfhost", "cta-hosted")
        );
        assert_eq!(CtaOption::Hosted.panel_ids(), ("cta-hosted", "cta-selfhost"));
    }

    #[test]
    fn test_toggle_global_name() {
        // Page markup calls `onclick="toggleCTA('selfhost')"`
        assert_eq!(TOGGLE_CTA_GLOBAL, "toggleCTA");
    }

    #[test]
    fn test_anchor_target_id() {
        assert_eq!(anchor_target_id("#features"), Some("features"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("/pricing"), None);
        assert_eq!(anchor_target_id(""), None);
    }
}
