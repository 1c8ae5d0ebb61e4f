//! Delimiter substitution over a document tree
//!
//! This module holds the core of the crate: it finds delimited math in the
//! text nodes of a tree, renders every expression and splices the rendered
//! markup back into the tree as parsed HTML.
//!
//! # Algorithm
//!
//! For each delimiter, in configuration order:
//!
//! 1. Walk the tree with a [`TreeWalker`], skipping ignored subtrees.
//! 2. For every text node containing at least one match, render each match
//!    left to right with the caller's options plus `displayMode` from the
//!    delimiter.
//! 3. Rebuild the node's content: unmatched text (escaped, so it reparses to
//!    the same characters) interleaved with the rendered markup (inserted as
//!    is).
//! 4. Parse the result as a fragment and replace the text node with the
//!    fragment's nodes.
//!
//! Text nodes without a match are neither reparsed nor replaced. Each
//! delimiter re-walks the tree, so later delimiters see the output of
//! earlier ones.
//!
//! # Failure
//!
//! A renderer error aborts the whole call and is returned unchanged. Nodes
//! already replaced stay replaced; the tree is not rolled back.

use markup5ever_rcdom::Handle;

use crate::error::EngineError;
use crate::ignore::IgnoreSet;
use crate::matcher::DelimiterPattern;
use crate::options::RenderOptions;
use crate::parser::{DocumentTree, replace_with_fragment};
use crate::renderer::MathRenderer;
use crate::walker::{TreeWalker, text_content};

/// Counts gathered during a substitution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Text nodes replaced by rendered fragments
    pub nodes_replaced: usize,
    /// Renderer calls made
    pub expressions_rendered: usize,
}

/// Render all delimited math below `root`, mutating the tree in place
///
/// # Errors
///
/// Returns the first error reported by `renderer`, or
/// `EngineError::InternalError` if the tree structure is inconsistent.
pub fn substitute<R>(
    root: &Handle,
    patterns: &[DelimiterPattern],
    ignore_set: &IgnoreSet,
    renderer: &R,
    options: &RenderOptions,
) -> Result<SubstitutionReport, EngineError>
where
    R: MathRenderer + ?Sized,
{
    let mut report = SubstitutionReport::default();

    for pattern in patterns {
        let display_options = options.with_display_mode(pattern.delimiter().display);

        for node in TreeWalker::new(root, ignore_set) {
            let Some(text) = text_content(&node) else {
                continue;
            };
            if !pattern.is_match(&text) {
                continue;
            }

            let (markup, rendered) = render_text(&text, pattern, renderer, &display_options)?;
            let fragment = DocumentTree::parse_fragment(&markup);
            replace_with_fragment(&node, &fragment)?;

            tracing::trace!(
                left = %pattern.delimiter().left,
                matches = rendered,
                "Replaced text node"
            );
            report.nodes_replaced += 1;
            report.expressions_rendered += rendered;
        }
    }

    Ok(report)
}

/// Build the replacement markup for one text node
///
/// Returns the markup and the number of expressions rendered.
fn render_text<R>(
    text: &str,
    pattern: &DelimiterPattern,
    renderer: &R,
    options: &RenderOptions,
) -> Result<(String, usize), EngineError>
where
    R: MathRenderer + ?Sized,
{
    let mut markup = String::with_capacity(text.len() * 4);
    let mut cursor = 0;
    let mut rendered = 0;

    for found in pattern.find_all(text) {
        escape_text_into(&mut markup, &text[cursor..found.range.start]);
        markup.push_str(&renderer.render(found.expression, options)?);
        cursor = found.range.end;
        rendered += 1;
    }
    escape_text_into(&mut markup, &text[cursor..]);

    Ok((markup, rendered))
}

/// Append `text` to `output` escaped for HTML text content
fn escape_text_into(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(ch),
        }
    }
}
