//! Public entry points for rendering math
//!
//! [`MathHtmlEngine`] ties the pieces together: it owns the compiled
//! delimiter patterns, the ignore set and a renderer, and exposes the two
//! operations callers need.
//!
//! - [`MathHtmlEngine::render_to_string`] renders a single expression whose
//!   boundaries the caller already knows.
//! - [`MathHtmlEngine::render_in_html`] finds and renders every delimited
//!   expression in an HTML fragment or document and returns the mutated
//!   tree.
//!
//! # Usage
//!
//! ```rust,no_run
//! use html_math_renderer::engine::MathHtmlEngine;
//! use html_math_renderer::options::RenderOptions;
//!
//! let engine = MathHtmlEngine::new().expect("default configuration");
//! let options = RenderOptions::new().with("throwOnError", true);
//!
//! let tree = engine
//!     .render_in_html(r"<p>Euler: \(e^{i\pi} + 1 = 0\)</p>", &options)
//!     .expect("render");
//! let html = tree.to_html().expect("serialize");
//! assert!(html.contains("katex"));
//! ```
//!
//! # Concurrency
//!
//! An engine is read-only after construction. Each call parses and owns its
//! own tree, so separate calls never share mutable state.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::ignore::IgnoreSet;
use crate::matcher::DelimiterPattern;
use crate::options::RenderOptions;
use crate::parser::{DocumentTree, decode_html};
use crate::renderer::{KatexRenderer, MathRenderer};
use crate::substitution::{SubstitutionReport, substitute};

/// HTML accepted by [`MathHtmlEngine::render_in_html`]
pub enum HtmlInput<'a> {
    /// Markup parsed as a fragment
    Markup(&'a str),
    /// UTF-8 bytes parsed as a fragment
    Bytes(&'a [u8]),
    /// An already parsed tree, mutated in place
    Tree(DocumentTree),
}

impl<'a> From<&'a str> for HtmlInput<'a> {
    fn from(html: &'a str) -> Self {
        HtmlInput::Markup(html)
    }
}

impl<'a> From<&'a String> for HtmlInput<'a> {
    fn from(html: &'a String) -> Self {
        HtmlInput::Markup(html.as_str())
    }
}

impl<'a> From<&'a [u8]> for HtmlInput<'a> {
    fn from(html: &'a [u8]) -> Self {
        HtmlInput::Bytes(html)
    }
}

impl From<DocumentTree> for HtmlInput<'_> {
    fn from(tree: DocumentTree) -> Self {
        HtmlInput::Tree(tree)
    }
}

impl HtmlInput<'_> {
    fn into_tree(self) -> Result<DocumentTree, EngineError> {
        match self {
            HtmlInput::Markup(html) => Ok(DocumentTree::parse_fragment(html)),
            HtmlInput::Bytes(bytes) => Ok(DocumentTree::parse_fragment(decode_html(bytes)?)),
            HtmlInput::Tree(tree) => Ok(tree),
        }
    }
}

/// Renders delimited math inside HTML
pub struct MathHtmlEngine<R = KatexRenderer> {
    config: EngineConfig,
    patterns: Vec<DelimiterPattern>,
    ignore_set: IgnoreSet,
    renderer: R,
}

impl MathHtmlEngine<KatexRenderer> {
    /// Create an engine with the default configuration and KaTeX
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if the default delimiters fail
    /// to compile.
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a KaTeX-backed engine with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` for empty markers or delimiters
    /// that cannot be compiled.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_renderer(config, KatexRenderer::new())
    }
}

impl<R: MathRenderer> MathHtmlEngine<R> {
    /// Create an engine with a custom configuration and renderer
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` for empty markers or delimiters
    /// that cannot be compiled.
    ///
    /// # Examples
    ///
    /// ```
    /// use html_math_renderer::config::{Delimiter, EngineConfig};
    /// use html_math_renderer::engine::MathHtmlEngine;
    /// use html_math_renderer::error::EngineError;
    /// use html_math_renderer::options::RenderOptions;
    ///
    /// let config = EngineConfig {
    ///     delimiters: vec![Delimiter::inline("§§", "§§")],
    ///     ignored_tags: vec!["span".to_string()],
    /// };
    /// let renderer = |expr: &str, _: &RenderOptions| -> Result<String, EngineError> {
    ///     Ok(format!("<var>{expr}</var>"))
    /// };
    /// let engine = MathHtmlEngine::with_renderer(config, renderer).unwrap();
    ///
    /// let html = engine
    ///     .render_in_html_to_string(
    ///         "<div>§§x§§</div><span>§§x§§</span>",
    ///         &RenderOptions::new(),
    ///     )
    ///     .unwrap();
    /// assert_eq!(html, "<div><var>x</var></div><span>§§x§§</span>");
    /// ```
    pub fn with_renderer(config: EngineConfig, renderer: R) -> Result<Self, EngineError> {
        let patterns = config
            .delimiters
            .iter()
            .cloned()
            .map(DelimiterPattern::new)
            .collect::<Result<Vec<_>, _>>()?;
        let ignore_set = IgnoreSet::from_tags(&config.ignored_tags);

        tracing::debug!(
            delimiters = patterns.len(),
            ignored_tags = ignore_set.len(),
            "Math engine configured"
        );

        Ok(Self {
            config,
            patterns,
            ignore_set,
            renderer,
        })
    }

    /// The configuration this engine was built from
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Render a single expression
    ///
    /// No delimiter matching is involved; `options` are passed to the
    /// renderer unchanged.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error unchanged.
    pub fn render_to_string(
        &self,
        expression: &str,
        options: &RenderOptions,
    ) -> Result<String, EngineError> {
        self.renderer.render(expression, options)
    }

    /// Render every delimited expression in `input`
    ///
    /// String and byte input is parsed as a fragment; a [`DocumentTree`] is
    /// mutated in place. The mutated tree is returned for the caller to
    /// serialize.
    ///
    /// # Errors
    ///
    /// - `EngineError::ParseError` for byte input that is not UTF-8
    /// - `EngineError::RenderError` as soon as any expression fails to
    ///   render; the rest of the document is not processed
    pub fn render_in_html<'a>(
        &self,
        input: impl Into<HtmlInput<'a>>,
        options: &RenderOptions,
    ) -> Result<DocumentTree, EngineError> {
        let tree = input.into().into_tree()?;
        self.render_tree(&tree, options)?;
        Ok(tree)
    }

    /// Render every delimited expression in `tree`, in place
    ///
    /// # Errors
    ///
    /// Returns the first renderer error.
    pub fn render_tree(
        &self,
        tree: &DocumentTree,
        options: &RenderOptions,
    ) -> Result<SubstitutionReport, EngineError> {
        let report = substitute(
            &tree.root(),
            &self.patterns,
            &self.ignore_set,
            &self.renderer,
            options,
        )?;

        tracing::debug!(
            nodes_replaced = report.nodes_replaced,
            expressions_rendered = report.expressions_rendered,
            "Rendered math in HTML"
        );

        Ok(report)
    }

    /// Render every delimited expression in `input` and serialize the result
    ///
    /// # Errors
    ///
    /// Same as [`render_in_html`](Self::render_in_html), plus
    /// `EngineError::SerializeError`.
    pub fn render_in_html_to_string<'a>(
        &self,
        input: impl Into<HtmlInput<'a>>,
        options: &RenderOptions,
    ) -> Result<String, EngineError> {
        self.render_in_html(input, options)?.to_html()
    }
}
