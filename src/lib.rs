//! HTML Math Renderer
//!
//! This library locates LaTeX math embedded in HTML documents, delimited by
//! configurable marker pairs such as `\(...\)` or `$$...$$`, and replaces
//! each occurrence with markup produced by KaTeX. The rendered markup is
//! spliced into the document tree as parsed HTML; every other node is left
//! untouched.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `config`: Delimiter pairs and engine configuration
//! - `ignore`: Tags whose subtrees are never scanned
//! - `walker`: Depth-first traversal over eligible text nodes
//! - `matcher`: Literal, non-greedy delimiter matching
//! - `options`: Render options forwarded to the renderer
//! - `renderer`: Renderer trait and the KaTeX adapter
//! - `parser`: HTML5 parsing and serialization using html5ever
//! - `substitution`: Replacement of matched text with rendered fragments
//! - `engine`: Public entry points
//!
//! # Example
//!
//! ```rust,no_run
//! use html_math_renderer::{MathHtmlEngine, RenderOptions};
//!
//! let engine = MathHtmlEngine::new()?;
//! let html = engine.render_in_html_to_string(
//!     r"<div><span>\(x\)</span><code>\(x\)</code></div>",
//!     &RenderOptions::new(),
//! )?;
//! assert!(html.contains(r"<code>\(x\)</code>"));
//! # Ok::<(), html_math_renderer::EngineError>(())
//! ```

// Module declarations
pub mod config;
pub mod engine;
pub mod error;
pub mod ignore;
pub mod matcher;
pub mod options;
pub mod parser;
pub mod renderer;
pub mod substitution;
pub mod walker;

// Re-export main types for convenience
pub use config::{Delimiter, EngineConfig};
pub use engine::{HtmlInput, MathHtmlEngine};
pub use error::EngineError;
pub use ignore::IgnoreSet;
pub use options::RenderOptions;
pub use parser::DocumentTree;
pub use renderer::{KatexRenderer, MathRenderer};
