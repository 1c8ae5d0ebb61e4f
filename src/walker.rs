//! Depth-first walk over text nodes eligible for math scanning
//!
//! [`TreeWalker`] yields the text nodes of a tree in document order
//! (pre-order, depth-first, left-to-right). Elements listed in the
//! [`IgnoreSet`] are opaque: none of their descendants are yielded.
//!
//! # Traversal Strategy
//!
//! The walker keeps an explicit stack of node handles instead of recursing,
//! so deeply nested markup cannot overflow the call stack. When an element
//! is popped its children are pushed in reverse order, which means the
//! handles of all pending siblings are already on the stack before any of
//! them is yielded. A caller may therefore replace the node it was just
//! handed: the walk continues with the original siblings and never visits
//! the nodes spliced in as replacement.
//!
//! ```rust
//! use html_math_renderer::ignore::IgnoreSet;
//! use html_math_renderer::parser::DocumentTree;
//! use html_math_renderer::walker::{TreeWalker, text_content};
//!
//! let tree = DocumentTree::parse_fragment("<p>a<code>b</code>c</p>");
//! let ignore = IgnoreSet::new();
//! let texts: Vec<String> = TreeWalker::new(&tree.root(), &ignore)
//!     .filter_map(|node| text_content(&node))
//!     .collect();
//! assert_eq!(texts, vec!["a", "c"]);
//! ```

use markup5ever_rcdom::{Handle, NodeData};

use crate::ignore::{IgnoreSet, ScanAction};

/// Lazy iterator over eligible text nodes
pub struct TreeWalker<'a> {
    stack: Vec<Handle>,
    ignore_set: &'a IgnoreSet,
}

impl<'a> TreeWalker<'a> {
    /// Start a walk below `root`
    ///
    /// `root` itself is not subject to the ignore set; its children are.
    pub fn new(root: &Handle, ignore_set: &'a IgnoreSet) -> Self {
        let stack = root.children.borrow().iter().rev().cloned().collect();
        Self { stack, ignore_set }
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        while let Some(node) = self.stack.pop() {
            match node.data {
                NodeData::Text { .. } => return Some(node),
                NodeData::Element { ref name, .. } => {
                    if self.ignore_set.check_element(name.local.as_ref()) == ScanAction::Skip {
                        continue;
                    }
                    self.stack
                        .extend(node.children.borrow().iter().rev().cloned());
                }
                NodeData::Document => {
                    self.stack
                        .extend(node.children.borrow().iter().rev().cloned());
                }
                // Comments, doctypes and processing instructions hold no scannable text
                NodeData::Comment { .. }
                | NodeData::Doctype { .. }
                | NodeData::ProcessingInstruction { .. } => {}
            }
        }
        None
    }
}

/// Text of a text node, `None` for other node kinds
pub fn text_content(node: &Handle) -> Option<String> {
    match node.data {
        NodeData::Text { ref contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}
