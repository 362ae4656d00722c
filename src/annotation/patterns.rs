//! Static matching patterns for the tagged annotation format.
//!
//! Component records look like `T1<TAB>MajorClaim 503 575<TAB>covered text`.
//! Each category gets two patterns: one capturing the two offsets, one
//! capturing the trailing text. Keyword matching is case-insensitive,
//! offsets are word-bounded so partial numbers never match.
use std::collections::HashMap;

use lazy_static::lazy_static;
use regex_lite::Regex;

use super::Category;

/// Span and text patterns for one category keyword.
pub struct CategoryPatterns {
    span: Regex,
    text: Regex,
}

impl CategoryPatterns {
    fn compile(keyword: &str) -> Self {
        let span = Regex::new(&format!(r"(?i)\t\b{}\b\s+\b(\d+)\b\s+\b(\d+)\b", keyword)).unwrap();
        let text = Regex::new(&format!(
            r"(?i)\t\b{}\b\s+\b\d+\b\s+\b\d+\b\t(.+)",
            keyword
        ))
        .unwrap();

        Self { span, text }
    }

    /// Get a reference to the offsets pattern.
    pub fn span(&self) -> &Regex {
        &self.span
    }

    /// Get a reference to the covered-text pattern.
    pub fn text(&self) -> &Regex {
        &self.text
    }
}

lazy_static! {
    /// Read-only category → patterns table, shared across parse calls.
    pub static ref PATTERNS: HashMap<Category, CategoryPatterns> = Category::ALL
        .iter()
        .map(|category| (*category, CategoryPatterns::compile(category.keyword())))
        .collect();
}
