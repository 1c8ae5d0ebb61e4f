//! HTML5 parsing and serialization using html5ever
//!
//! This module wraps the html5ever collaborator: it turns markup into a
//! mutable [`DocumentTree`], turns the tree back into markup, and provides
//! the node splicing the substitution engine needs.
//!
//! # Overview
//!
//! html5ever implements the WHATWG parsing algorithm, so malformed markup is
//! repaired the way browsers repair it rather than rejected. Fragments are
//! parsed in `<body>` context; the resulting tree keeps the fragment nodes
//! under a synthetic `html` element which serves as the tree root.
//!
//! # Examples
//!
//! ```rust
//! use html_math_renderer::parser::DocumentTree;
//!
//! let tree = DocumentTree::parse_fragment("<div><p>Content</p></div>");
//! assert_eq!(tree.to_html().unwrap(), "<div><p>Content</p></div>");
//! ```

use std::rc::Rc;

use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, QualName, local_name, ns, parse_document, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::error::EngineError;

/// Shape of a parsed tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    /// Markup parsed without a document wrapper
    Fragment,
    /// A complete document
    Document,
}

/// A parsed, mutable HTML tree
///
/// The tree is owned by the caller; rendering math mutates it in place and
/// hands it back.
pub struct DocumentTree {
    dom: RcDom,
    kind: TreeKind,
}

impl DocumentTree {
    /// Parse an HTML fragment
    pub fn parse_fragment(html: &str) -> Self {
        let dom = parse_fragment(
            RcDom::default(),
            ParseOpts::default(),
            QualName::new(None, ns!(html), local_name!("body")),
            Vec::new(),
            false,
        )
        .one(html);

        Self {
            dom,
            kind: TreeKind::Fragment,
        }
    }

    /// Parse a complete HTML document
    pub fn parse_document(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

        Self {
            dom,
            kind: TreeKind::Document,
        }
    }

    /// Whether the tree was parsed as a fragment or a whole document
    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// Node whose children make up the tree's content
    ///
    /// For fragments this is the synthetic `html` element; for documents it
    /// is the document node itself.
    pub fn root(&self) -> Handle {
        match self.kind {
            TreeKind::Fragment => fragment_root(&self.dom),
            TreeKind::Document => self.dom.document.clone(),
        }
    }

    /// Serialize the tree's content back to markup
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SerializeError` if the serializer fails.
    pub fn to_html(&self) -> Result<String, EngineError> {
        serialize_children(&self.root())
    }
}

impl std::fmt::Debug for DocumentTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentTree")
            .field("kind", &self.kind)
            .field("html", &self.to_html().unwrap_or_default())
            .finish()
    }
}

fn fragment_root(dom: &RcDom) -> Handle {
    dom.document
        .children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .unwrap_or_else(|| dom.document.clone())
}

/// Decode HTML bytes for parsing
///
/// # Errors
///
/// Returns `EngineError::ParseError` if the bytes are not valid UTF-8.
pub fn decode_html(html: &[u8]) -> Result<&str, EngineError> {
    std::str::from_utf8(html).map_err(|e| {
        EngineError::ParseError(format!(
            "Invalid UTF-8 at byte position {}: {}",
            e.valid_up_to(),
            e
        ))
    })
}

/// Serialize the children of `node`
///
/// # Errors
///
/// Returns `EngineError::SerializeError` if the serializer fails.
pub fn serialize_children(node: &Handle) -> Result<String, EngineError> {
    serialize_with_scope(node, TraversalScope::ChildrenOnly(None))
}

/// Serialize `node` itself, including its own tag
///
/// # Errors
///
/// Returns `EngineError::SerializeError` if the serializer fails.
pub fn serialize_node(node: &Handle) -> Result<String, EngineError> {
    serialize_with_scope(node, TraversalScope::IncludeNode)
}

fn serialize_with_scope(node: &Handle, scope: TraversalScope) -> Result<String, EngineError> {
    let mut buf = Vec::new();
    let handle = SerializableHandle::from(node.clone());
    let opts = SerializeOpts {
        traversal_scope: scope,
        ..Default::default()
    };
    serialize(&mut buf, &handle, opts).map_err(|e| EngineError::SerializeError(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| EngineError::SerializeError(e.to_string()))
}

/// Replace `target` with the content nodes of a parsed fragment
///
/// The fragment's nodes are moved, in order, into the slot `target`
/// occupied; `target` is detached.
///
/// # Errors
///
/// Returns `EngineError::InternalError` if `target` has no parent or is not
/// among its parent's children.
pub fn replace_with_fragment(target: &Handle, fragment: &DocumentTree) -> Result<(), EngineError> {
    let parent = target
        .parent
        .take()
        .and_then(|weak| weak.upgrade())
        .ok_or_else(|| EngineError::InternalError("node has no parent".to_string()))?;

    let mut siblings = parent.children.borrow_mut();
    let index = siblings
        .iter()
        .position(|child| Rc::ptr_eq(child, target))
        .ok_or_else(|| {
            EngineError::InternalError("node missing from its parent's children".to_string())
        })?;

    let replacement = fragment.root().children.take();
    for node in &replacement {
        node.parent.set(Some(Rc::downgrade(&parent)));
    }
    siblings.splice(index..=index, replacement);

    Ok(())
}
