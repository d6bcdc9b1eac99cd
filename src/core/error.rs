//! Error type for wiring the landing page to the DOM.

use thiserror::Error;

/// Failures while locating or mutating page elements.
///
/// None of these reach the visitor. Callers log them and skip the
/// affected controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandingError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl LandingError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for LandingError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

pub type LandingResult<T> = Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = LandingError::missing("#success-modal");
        assert_eq!(err.to_string(), "element not found: #success-modal");
    }
}
