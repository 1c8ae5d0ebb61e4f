//! Render options forwarded to the math renderer
//!
//! Options are an opaque JSON object. The engine only ever adds one key,
//! `displayMode`, taken from the delimiter that produced a match; every
//! other key is interpreted by the renderer alone.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::EngineError;

/// Key carrying the delimiter's display flag
pub const DISPLAY_MODE_KEY: &str = "displayMode";

/// Key/value options for a renderer call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderOptions(Map<String, Value>);

impl RenderOptions {
    /// Empty options
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parse options from a JSON object
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` unless `json` is a JSON object.
    ///
    /// # Examples
    ///
    /// ```
    /// use html_math_renderer::options::RenderOptions;
    ///
    /// let options = RenderOptions::from_json(r#"{"output":"html","throwOnError":true}"#)
    ///     .expect("valid options");
    /// assert_eq!(options.get("output").and_then(|v| v.as_str()), Some("html"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(format!("invalid render options: {e}")))
    }

    /// Set `key` to `value`, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set `key` to `value`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Copy of these options with the display flag set
    pub fn with_display_mode(&self, display: bool) -> Self {
        self.clone().with(DISPLAY_MODE_KEY, display)
    }

    /// Value for `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Display flag, if set to a boolean
    pub fn display_mode(&self) -> Option<bool> {
        self.get(DISPLAY_MODE_KEY).and_then(Value::as_bool)
    }

    /// Iterate over all options
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of options set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no option is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for RenderOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
