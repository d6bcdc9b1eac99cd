//! Layer highlighting for the cadence diagram
//!
//! Hovering a card emphasises one layer of the SVG. The highlight and reset
//! routines are expressed as ordered lists of [`StyleWrite`]s against
//! [`Target`]s; the browser side resolves each target with a selector and
//! silently skips targets the markup doesn't contain.

use std::fmt;

/// Class marking the hovered card
pub const ACTIVE_CARD_CLASS: &str = "is-active";

/// Selector for hoverable layer cards
pub const CARD_SELECTOR: &str = ".cadence-card[data-layer]";

/// Data attribute on a card naming its layer
pub const LAYER_ATTRIBUTE: &str = "data-layer";

const WEEKLY: &str = "weekly";
const DAILY: &str = "daily";

/// A named band of the diagram, e.g. `daily` or `weekly`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layer(String);

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn is_weekly(&self) -> bool {
        self.0 == WEEKLY
    }

    pub fn is_daily(&self) -> bool {
        self.0 == DAILY
    }

    /// Stroke width of the glowing wave line
    pub fn stroke_width(&self) -> &'static str {
        if self.is_weekly() {
            "6"
        } else if self.is_daily() {
            "5"
        } else {
            "3"
        }
    }

    /// Timeline bar opacity while this layer is highlighted
    pub fn timeline_opacity(&self) -> &'static str {
        if self.is_weekly() { "1" } else { "0.4" }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element (or group of elements) inside the diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    WaveRows,
    WaveRow(Layer),
    /// Every wave line inside a wave row
    WaveLines,
    /// The wave line of one layer's row
    WaveLine(Layer),
    Annotations,
    Annotation(Layer),
    FlowArrows,
    TimelineBar,
}

impl Target {
    /// CSS selector resolving this target within the diagram
    pub fn selector(&self) -> String {
        match self {
            Target::WaveRows => ".wave-row".to_string(),
            Target::WaveRow(layer) => format!(".wave-{}", layer),
            Target::WaveLines => ".wave-row .wave-line".to_string(),
            Target::WaveLine(layer) => format!(".wave-{} .wave-line", layer),
            Target::Annotations => ".layer-annotation".to_string(),
            Target::Annotation(layer) => format!(".annotation-{}", layer),
            Target::FlowArrows => ".flow-arrow".to_string(),
            Target::TimelineBar => ".timeline-bar".to_string(),
        }
    }

    /// Whether every match is styled, rather than only the first
    pub fn is_group(&self) -> bool {
        matches!(
            self,
            Target::WaveRows | Target::WaveLines | Target::Annotations | Target::FlowArrows
        )
    }
}

/// One inline style property write. An empty value removes the override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleWrite {
    pub target: Target,
    pub property: &'static str,
    pub value: &'static str,
}

impl StyleWrite {
    fn new(target: Target, property: &'static str, value: &'static str) -> Self {
        Self {
            target,
            property,
            value,
        }
    }
}

/// Style writes that emphasise `layer` and dim everything else
pub fn highlight_plan(layer: &Layer) -> Vec<StyleWrite> {
    use Target::*;

    vec![
        StyleWrite::new(WaveRows, "opacity", "0.25"),
        StyleWrite::new(WaveRows, "transition", "opacity 0.3s ease"),
        StyleWrite::new(WaveRow(layer.clone()), "opacity", "1"),
        StyleWrite::new(WaveLine(layer.clone()), "filter", "url(#glow)"),
        StyleWrite::new(WaveLine(layer.clone()), "stroke-width", layer.stroke_width()),
        StyleWrite::new(Annotations, "opacity", "0"),
        StyleWrite::new(Annotations, "transition", "opacity 0.4s ease"),
        StyleWrite::new(Annotations, "pointer-events", "none"),
        StyleWrite::new(Annotation(layer.clone()), "opacity", "1"),
        StyleWrite::new(Annotation(layer.clone()), "pointer-events", "auto"),
        StyleWrite::new(FlowArrows, "opacity", "0.2"),
        StyleWrite::new(FlowArrows, "transition", "opacity 0.3s ease"),
        StyleWrite::new(TimelineBar, "opacity", layer.timeline_opacity()),
        StyleWrite::new(TimelineBar, "transition", "opacity 0.3s ease"),
    ]
}

/// Style writes that return the diagram to its resting state
pub fn reset_plan() -> Vec<StyleWrite> {
    use Target::*;

    vec![
        StyleWrite::new(WaveRows, "opacity", ""),
        StyleWrite::new(WaveLines, "filter", ""),
        StyleWrite::new(WaveLines, "stroke-width", ""),
        StyleWrite::new(Annotations, "opacity", "0"),
        StyleWrite::new(Annotations, "pointer-events", "none"),
        StyleWrite::new(FlowArrows, "opacity", ""),
        StyleWrite::new(TimelineBar, "opacity", ""),
    ]
}

/// Tracks which layer is highlighted. Last hover wins.
#[derive(Debug, Clone, Default)]
pub struct LayerHighlighter {
    active: Option<Layer>,
}

impl LayerHighlighter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&Layer> {
        self.active.as_ref()
    }

    /// Pointer entered the card for `layer`
    pub fn enter(&mut self, layer: Layer) -> Vec<StyleWrite> {
        let plan = highlight_plan(&layer);
        self.active = Some(layer);
        plan
    }

    /// Pointer left a card; the diagram is reset whichever layer it was
    pub fn leave(&mut self) -> Vec<StyleWrite> {
        self.active = None;
        reset_plan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_for<'a>(plan: &'a [StyleWrite], target: &Target, property: &str) -> Option<&'a str> {
        plan.iter()
            .rev()
            .find(|w| &w.target == target && w.property == property)
            .map(|w| w.value)
    }

    // ========================================================================
    // Layer
    // ========================================================================

    #[test]
    fn test_stroke_widths() {
        assert_eq!(Layer::new("weekly").stroke_width(), "6");
        assert_eq!(Layer::new("daily").stroke_width(), "5");
        assert_eq!(Layer::new("quarterly").stroke_width(), "3");
    }

    #[test]
    fn test_selectors() {
        let layer = Layer::new("daily");
        assert_eq!(Target::WaveRow(layer.clone()).selector(), ".wave-daily");
        assert_eq!(Target::WaveLine(layer.clone()).selector(), ".wave-daily .wave-line");
        assert_eq!(Target::Annotation(layer).selector(), ".annotation-daily");
        assert!(Target::FlowArrows.is_group());
        assert!(!Target::TimelineBar.is_group());
    }

    #[test]
    fn test_reset_covers_every_wave_line() {
        // Reset clears the line in every row, not only the first match
        assert_eq!(Target::WaveLines.selector(), ".wave-row .wave-line");
        assert!(Target::WaveLines.is_group());
        assert!(!Target::WaveLine(Layer::new("weekly")).is_group());
    }

    // ========================================================================
    // Highlight
    // ========================================================================

    #[test]
    fn test_weekly_timeline_full_opacity() {
        let plan = highlight_plan(&Layer::new("weekly"));
        assert_eq!(value_for(&plan, &Target::TimelineBar, "opacity"), Some("1"));
    }

    #[test]
    fn test_daily_timeline_partial_opacity() {
        let plan = highlight_plan(&Layer::new("daily"));
        assert_eq!(value_for(&plan, &Target::TimelineBar, "opacity"), Some("0.4"));
    }

    #[test]
    fn test_target_wave_restored_after_dimming() {
        let layer = Layer::new("daily");
        let plan = highlight_plan(&layer);

        let dim = plan
            .iter()
            .position(|w| w.target == Target::WaveRows && w.property == "opacity")
            .unwrap();
        let restore = plan
            .iter()
            .position(|w| w.target == Target::WaveRow(layer.clone()) && w.property == "opacity")
            .unwrap();
        assert!(dim < restore);
        assert_eq!(plan[restore].value, "1");
        assert_eq!(
            value_for(&plan, &Target::WaveLine(layer), "stroke-width"),
            Some("5")
        );
    }

    #[test]
    fn test_only_selected_annotation_interactive() {
        let layer = Layer::new("weekly");
        let plan = highlight_plan(&layer);

        assert_eq!(value_for(&plan, &Target::Annotations, "pointer-events"), Some("none"));
        assert_eq!(
            value_for(&plan, &Target::Annotation(layer), "pointer-events"),
            Some("auto")
        );
    }

    // ========================================================================
    // Reset
    // ========================================================================

    #[test]
    fn test_reset_clears_overrides() {
        let plan = reset_plan();

        for target in [Target::WaveRows, Target::FlowArrows, Target::TimelineBar] {
            assert_eq!(value_for(&plan, &target, "opacity"), Some(""));
        }
        assert_eq!(value_for(&plan, &Target::WaveLines, "filter"), Some(""));
        assert_eq!(value_for(&plan, &Target::WaveLines, "stroke-width"), Some(""));
        assert_eq!(value_for(&plan, &Target::Annotations, "opacity"), Some("0"));
        assert_eq!(value_for(&plan, &Target::Annotations, "pointer-events"), Some("none"));
    }

    #[test]
    fn test_highlighter_tracks_single_layer() {
        let mut highlighter = LayerHighlighter::new();
        assert!(highlighter.active().is_none());

        highlighter.enter(Layer::new("daily"));
        highlighter.enter(Layer::new("weekly"));
        assert_eq!(highlighter.active(), Some(&Layer::new("weekly")));

        let plan = highlighter.leave();
        assert!(highlighter.active().is_none());
        assert_eq!(plan, reset_plan());
    }
}
