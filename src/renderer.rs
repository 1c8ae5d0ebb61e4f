//! Math renderer adapters
//!
//! The engine treats the typesetter as a black box behind [`MathRenderer`]:
//! an expression and options go in, an HTML string or an error comes out.
//! Each call blocks until the renderer returns.
//!
//! [`KatexRenderer`] is the default adapter, backed by the `katex` crate
//! (KaTeX running in an embedded JavaScript engine). Any closure with the
//! right signature is also a renderer, which keeps tests and custom
//! typesetters simple:
//!
//! ```rust
//! use html_math_renderer::options::RenderOptions;
//! use html_math_renderer::renderer::MathRenderer;
//! use html_math_renderer::error::EngineError;
//!
//! let upper = |expr: &str, _: &RenderOptions| -> Result<String, EngineError> {
//!     Ok(expr.to_uppercase())
//! };
//! assert_eq!(upper.render("x", &RenderOptions::new()).unwrap(), "X");
//! ```
//!
//! # Error Tolerance
//!
//! With `throwOnError: true` KaTeX rejects malformed input and the adapter
//! returns `EngineError::RenderError`. With `throwOnError: false` KaTeX
//! returns error markup instead and the call succeeds.

use serde_json::Value;

use crate::error::EngineError;
use crate::options::RenderOptions;

/// Converts a math expression into HTML
pub trait MathRenderer {
    /// Render `expression` with `options`
    ///
    /// # Errors
    ///
    /// Returns `EngineError::RenderError` when the expression is rejected.
    fn render(&self, expression: &str, options: &RenderOptions) -> Result<String, EngineError>;
}

impl<F> MathRenderer for F
where
    F: Fn(&str, &RenderOptions) -> Result<String, EngineError>,
{
    fn render(&self, expression: &str, options: &RenderOptions) -> Result<String, EngineError> {
        self(expression, options)
    }
}

/// Renderer backed by KaTeX
#[derive(Debug, Clone, Copy, Default)]
pub struct KatexRenderer;

impl KatexRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Translate render options into KaTeX options
    ///
    /// Recognized keys: `displayMode`, `output`, `leqno`, `fleqn`,
    /// `throwOnError`, `trust` and `macros`. Other keys are logged and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` for values of the wrong type or
    /// an unknown output format.
    pub fn katex_opts(options: &RenderOptions) -> Result<katex::Opts, EngineError> {
        let mut builder = katex::Opts::builder();

        for (key, value) in options.iter() {
            match key.as_str() {
                "displayMode" => {
                    builder.display_mode(expect_bool(key, value)?);
                }
                "output" => {
                    builder.output_type(output_type(value)?);
                }
                "leqno" => {
                    builder.leqno(expect_bool(key, value)?);
                }
                "fleqn" => {
                    builder.fleqn(expect_bool(key, value)?);
                }
                "throwOnError" => {
                    builder.throw_on_error(expect_bool(key, value)?);
                }
                "trust" => {
                    builder.trust(expect_bool(key, value)?);
                }
                "macros" => {
                    let Value::Object(macros) = value else {
                        return Err(EngineError::InvalidConfig(
                            "option 'macros' must be an object".to_string(),
                        ));
                    };
                    for (name, expansion) in macros {
                        let Some(expansion) = expansion.as_str() else {
                            return Err(EngineError::InvalidConfig(format!(
                                "macro '{}' must expand to a string",
                                name
                            )));
                        };
                        builder = builder.add_macro(name.clone(), expansion.to_string());
                    }
                }
                other => {
                    tracing::debug!(option = other, "Ignoring option unknown to KaTeX renderer");
                }
            }
        }

        builder
            .build()
            .map_err(|e| EngineError::InvalidConfig(format!("KaTeX options error: {e}")))
    }
}

impl MathRenderer for KatexRenderer {
    fn render(&self, expression: &str, options: &RenderOptions) -> Result<String, EngineError> {
        let opts = Self::katex_opts(options)?;
        katex::render_with_opts(expression, &opts)
            .map_err(|e| EngineError::render(expression, e.to_string()))
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool, EngineError> {
    value
        .as_bool()
        .ok_or_else(|| EngineError::InvalidConfig(format!("option '{}' must be a boolean", key)))
}

fn output_type(value: &Value) -> Result<katex::OutputType, EngineError> {
    match value.as_str() {
        Some("html") => Ok(katex::OutputType::Html),
        Some("mathml") => Ok(katex::OutputType::Mathml),
        Some("htmlAndMathml") => Ok(katex::OutputType::HtmlAndMathml),
        _ => Err(EngineError::InvalidConfig(format!(
            "option 'output' must be one of html, mathml, htmlAndMathml (got {})",
            value
        ))),
    }
}
