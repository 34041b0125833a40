//! Engine configuration: mode, output shape, messages and flags

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Which part of the pipeline a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Full pipeline: required, then format, then match, with cleanup
    /// on success. The default.
    Full,
    Required,
    Format,
    Match,
    /// Invoke the fail handler against the current feedback.
    Fail,
    /// Run the markup builder against the current feedback.
    Markup,
    Cleanup,
}

impl Mode {
    /// Resolve a mode by its method-name string. Unknown names are a
    /// configuration error, not a silent no-op.
    pub fn parse(name: &str) -> EngineResult<Self> {
        Ok(match name {
            "init" | "full" => Mode::Full,
            "required" => Mode::Required,
            "format" => Mode::Format,
            "match" => Mode::Match,
            "fail" => Mode::Fail,
            "markup" => Mode::Markup,
            "cleanup" => Mode::Cleanup,
            other => return Err(EngineError::UnknownMode(other.to_string())),
        })
    }
}

/// Output shape of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Return the feedback object only.
    #[serde(rename = "data")]
    Data,
    /// Additionally drive the presentation renderer on failure.
    #[serde(rename = "html")]
    Render,
}

/// Settings for a validation run. `Config::default()` supplies every
/// value; the chainable setters override individual keys. Option
/// values are not validated here — a bad combination surfaces when
/// the engine dispatches on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub mode: Mode,
    pub output: Output,
    /// Container the error panel is appended under in render output.
    pub anchor: String,
    pub required_message: String,
    pub format_message: String,
    pub match_message: String,
    /// List the labels of failing fields under the panel message.
    pub list_fields: bool,
    /// Cancel the default action of the triggering event on failure.
    pub stop_on_fail: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Full,
            output: Output::Data,
            anchor: "form".to_string(),
            required_message: "At least one required field is missing. Please make sure \
                               you've filled out every field."
                .to_string(),
            format_message: "[format message goes here]".to_string(),
            match_message: "[mismatch message goes here]".to_string(),
            list_fields: false,
            stop_on_fail: false,
        }
    }
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    pub fn format_message(mut self, message: impl Into<String>) -> Self {
        self.format_message = message.into();
        self
    }

    pub fn match_message(mut self, message: impl Into<String>) -> Self {
        self.match_message = message.into();
        self
    }

    pub fn list_fields(mut self, list_fields: bool) -> Self {
        self.list_fields = list_fields;
        self
    }

    pub fn stop_on_fail(mut self, stop_on_fail: bool) -> Self {
        self.stop_on_fail = stop_on_fail;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::Full);
        assert_eq!(config.output, Output::Data);
        assert!(!config.list_fields);
        assert!(!config.stop_on_fail);
        assert!(config.required_message.contains("required field"));
    }

    #[test]
    fn test_setters_override_defaults_only() {
        let config = Config::new()
            .mode(Mode::Required)
            .list_fields(true)
            .match_message("Those don't match.");

        assert_eq!(config.mode, Mode::Required);
        assert!(config.list_fields);
        assert_eq!(config.match_message, "Those don't match.");
        // Untouched keys keep their defaults.
        assert_eq!(config.output, Output::Data);
        assert!(!config.stop_on_fail);
    }

    #[test]
    fn test_mode_parse_known_names() {
        assert_eq!(Mode::parse("init").unwrap(), Mode::Full);
        assert_eq!(Mode::parse("full").unwrap(), Mode::Full);
        assert_eq!(Mode::parse("required").unwrap(), Mode::Required);
        assert_eq!(Mode::parse("format").unwrap(), Mode::Format);
        assert_eq!(Mode::parse("match").unwrap(), Mode::Match);
        assert_eq!(Mode::parse("fail").unwrap(), Mode::Fail);
        assert_eq!(Mode::parse("markup").unwrap(), Mode::Markup);
        assert_eq!(Mode::parse("cleanup").unwrap(), Mode::Cleanup);
    }

    #[test]
    fn test_mode_parse_unknown_name_is_an_error() {
        let result = Mode::parse("bogus");
        assert!(matches!(result, Err(EngineError::UnknownMode(name)) if name == "bogus"));
    }
}
