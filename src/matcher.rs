//! Delimited-span extraction
//!
//! Each [`Delimiter`] is compiled once into a [`DelimiterPattern`]: both
//! markers are escaped with [`regex::escape`] so that characters such as
//! `$`, `\`, `(` or `[` match literally, and joined by a lazy capture group.
//!
//! # Matching Semantics
//!
//! - A match starts at an occurrence of the left marker and ends at the
//!   *next* occurrence of the right marker (shortest span).
//! - Matches never overlap; scanning resumes right after a match.
//! - A left marker with no closing marker after it produces nothing.
//! - The enclosed expression may span lines and may be empty.
//!
//! ```rust
//! use html_math_renderer::config::Delimiter;
//! use html_math_renderer::matcher::DelimiterPattern;
//!
//! let pattern = DelimiterPattern::new(Delimiter::display("$$", "$$")).expect("valid");
//! let found: Vec<_> = pattern.find_all("$$a$$ and $$b$$").map(|m| m.expression).collect();
//! assert_eq!(found, vec!["a", "b"]);
//! ```

use std::ops::Range;

use regex::Regex;

use crate::config::Delimiter;
use crate::error::EngineError;

/// One delimited span found in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathMatch<'t> {
    /// Byte range of the whole span, markers included
    pub range: Range<usize>,
    /// Text between the markers
    pub expression: &'t str,
}

/// A delimiter compiled for literal, non-greedy matching
#[derive(Debug, Clone)]
pub struct DelimiterPattern {
    delimiter: Delimiter,
    regex: Regex,
}

impl DelimiterPattern {
    /// Compile a delimiter pair
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if a marker is empty or the
    /// pattern exceeds the regex engine's size limits.
    pub fn new(delimiter: Delimiter) -> Result<Self, EngineError> {
        delimiter.validate()?;

        let source = format!(
            "(?s){}(.*?){}",
            regex::escape(&delimiter.left),
            regex::escape(&delimiter.right)
        );
        let regex = Regex::new(&source).map_err(|e| {
            EngineError::InvalidConfig(format!(
                "cannot compile delimiter {:?}...{:?}: {}",
                delimiter.left, delimiter.right, e
            ))
        })?;

        Ok(Self { delimiter, regex })
    }

    /// The delimiter this pattern was compiled from
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Returns true if `text` contains at least one match
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// All non-overlapping matches in `text`, left to right
    pub fn find_all<'p, 't>(&'p self, text: &'t str) -> impl Iterator<Item = MathMatch<'t>> + 'p
    where
        't: 'p,
    {
        self.regex.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(MathMatch {
                range: whole.range(),
                expression: inner.as_str(),
            })
        })
    }
}
