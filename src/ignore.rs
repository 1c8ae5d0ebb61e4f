//! Ignored-tag set for math scanning
//!
//! Some elements hold text that must never be treated as math: program
//! source, stylesheets, form controls, preformatted code and the TeX source
//! that KaTeX keeps in MathML annotations. The walker
//! consults an [`IgnoreSet`] on every element it enters and skips the whole
//! subtree of any element whose tag is listed.
//!
//! # Case Rules
//!
//! html5ever lowercases HTML tag names while parsing, so membership is
//! tested against lowercase names. Tags are lowercased when the set is
//! built, and mixed-case names from foreign content (`foreignObject`) are
//! lowercased before lookup.

use std::collections::HashSet;

/// Elements skipped by default
pub const DEFAULT_IGNORED_TAGS: &[&str] = &[
    "script",     // Program source
    "noscript",   // Alternative content for scripting-disabled agents
    "style",      // Stylesheets
    "textarea",   // Editable text, rendered verbatim
    "pre",        // Preformatted text
    "code",       // Inline and block code
    "option",     // Form control labels
    "title",      // Document title, RCDATA
    "annotation", // MathML source annotations
];

/// Action to take when the walker enters an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAction {
    /// Scan the element's children
    Descend,
    /// Skip the element and all its children
    Skip,
}

/// Set of tag names whose subtrees are excluded from math scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    tags: HashSet<String>,
}

impl IgnoreSet {
    /// Create an ignore set with the default tags
    pub fn new() -> Self {
        Self::from_tags(DEFAULT_IGNORED_TAGS.iter().copied())
    }

    /// Create an ignore set from tag names
    ///
    /// # Examples
    ///
    /// ```
    /// use html_math_renderer::ignore::{IgnoreSet, ScanAction};
    ///
    /// let ignore = IgnoreSet::from_tags(["span"]);
    /// assert_eq!(ignore.check_element("span"), ScanAction::Skip);
    /// assert_eq!(ignore.check_element("code"), ScanAction::Descend);
    /// ```
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|tag| tag.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Check whether `tag_name` is ignored
    pub fn contains(&self, tag_name: &str) -> bool {
        if tag_name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.tags.contains(&tag_name.to_ascii_lowercase())
        } else {
            self.tags.contains(tag_name)
        }
    }

    /// Decide how the walker treats an element
    ///
    /// # Examples
    ///
    /// ```
    /// use html_math_renderer::ignore::{IgnoreSet, ScanAction};
    ///
    /// let ignore = IgnoreSet::new();
    /// assert_eq!(ignore.check_element("script"), ScanAction::Skip);
    /// assert_eq!(ignore.check_element("div"), ScanAction::Descend);
    /// ```
    pub fn check_element(&self, tag_name: &str) -> ScanAction {
        if self.contains(tag_name) {
            ScanAction::Skip
        } else {
            ScanAction::Descend
        }
    }

    /// Number of ignored tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if no tag is ignored
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new()
    }
}
