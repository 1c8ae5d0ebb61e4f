//! Engine configuration: delimiter pairs and ignored tags
//!
//! The configuration is constructed once per engine and never changes
//! afterwards. It can be built in code or loaded from JSON:
//!
//! ```rust
//! use html_math_renderer::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(
//!     r#"{"delimiters":[{"left":"§§","right":"§§","display":false}],"ignoredTags":["span"]}"#,
//! )
//! .expect("valid configuration");
//! assert_eq!(config.delimiters.len(), 1);
//! assert_eq!(config.ignored_tags, vec!["span".to_string()]);
//! ```
//!
//! # Delimiter Order
//!
//! Delimiters are applied in list order and each one is fully applied before
//! the next is attempted. A delimiter that is a prefix of another one (`$`
//! versus `$$`) must therefore come after the longer one, otherwise it
//! consumes the longer delimiter's text first. The defaults contain no such
//! pair.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::ignore::DEFAULT_IGNORED_TAGS;

/// A delimiter pair locating math in text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiter {
    /// Opening marker, matched literally
    pub left: String,
    /// Closing marker, matched literally
    pub right: String,
    /// Render the enclosed expression in display mode
    pub display: bool,
}

impl Delimiter {
    /// Create a delimiter pair
    pub fn new(left: impl Into<String>, right: impl Into<String>, display: bool) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            display,
        }
    }

    /// Inline delimiter pair
    pub fn inline(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(left, right, false)
    }

    /// Display delimiter pair
    pub fn display(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(left, right, true)
    }

    /// Check that both markers are non-empty
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if either marker is empty.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.left.is_empty() || self.right.is_empty() {
            return Err(EngineError::InvalidConfig(format!(
                "delimiter has an empty marker (left: {:?}, right: {:?})",
                self.left, self.right
            )));
        }
        Ok(())
    }
}

/// Default delimiter list, longest-prefix-safe order
pub fn default_delimiters() -> Vec<Delimiter> {
    vec![
        Delimiter::display("$$", "$$"),
        Delimiter::inline(r"\(", r"\)"),
        Delimiter::display(r"\begin{equation}", r"\end{equation}"),
        Delimiter::display(r"\begin{align}", r"\end{align}"),
        Delimiter::display(r"\begin{alignat}", r"\end{alignat}"),
        Delimiter::display(r"\begin{gather}", r"\end{gather}"),
        Delimiter::display(r"\begin{CD}", r"\end{CD}"),
        Delimiter::display(r"\[", r"\]"),
    ]
}

fn default_ignored_tags() -> Vec<String> {
    DEFAULT_IGNORED_TAGS.iter().map(|tag| tag.to_string()).collect()
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Ordered delimiter pairs
    pub delimiters: Vec<Delimiter>,
    /// Tags whose subtrees are never scanned
    pub ignored_tags: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
            ignored_tags: default_ignored_tags(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from JSON text
    ///
    /// Missing fields take their default values. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` for malformed JSON or empty markers.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(format!("invalid JSON configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check delimiter invariants
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if any marker is empty.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.delimiters.iter().try_for_each(Delimiter::validate)
    }
}
