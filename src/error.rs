//! Error types for math rendering operations

use std::fmt;

/// Errors that can occur while rendering math in HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The math renderer rejected an expression
    RenderError {
        /// Expression text passed to the renderer
        expression: String,
        /// Message reported by the renderer
        message: String,
    },
    /// HTML input could not be accepted by the parser
    ParseError(String),
    /// Document tree could not be serialized
    SerializeError(String),
    /// Invalid delimiter configuration or render options
    InvalidConfig(String),
    /// Internal error
    InternalError(String),
}

impl EngineError {
    /// Build a render error for `expression`
    pub fn render(expression: &str, message: impl Into<String>) -> Self {
        EngineError::RenderError {
            expression: expression.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::RenderError {
                expression,
                message,
            } => write!(f, "Render error in '{}': {}", expression, message),
            EngineError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            EngineError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
            EngineError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            EngineError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
