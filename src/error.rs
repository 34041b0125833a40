//! Engine error types and handling

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Faults raised by the engine for caller contract violations.
///
/// A field failing a rule is never an error — that outcome lives in
/// [`Feedback`](crate::feedback::Feedback). These variants cover
/// configuration and usage mistakes only.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A mode string did not name a known stage.
    #[error("unknown validation mode `{0}`")]
    UnknownMode(String),

    /// A field's explicit pattern attribute failed to compile.
    #[error("field `{field}` declares an invalid pattern: {source}")]
    Pattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// `stop_on_fail` is set but no triggering event was supplied.
    #[error("stop_on_fail is set but no triggering event was supplied")]
    MissingEvent,

    /// Render output was requested but no renderer was supplied.
    #[error("render output requested but no renderer was supplied")]
    MissingRenderer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = EngineError::UnknownMode("bogus".to_string());
        assert_eq!(error.to_string(), "unknown validation mode `bogus`");

        let error = EngineError::MissingEvent;
        assert!(error.to_string().contains("stop_on_fail"));
    }

    #[test]
    fn test_pattern_error_carries_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = EngineError::Pattern {
            field: "zip".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("field `zip`"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
