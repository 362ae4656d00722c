//! Component types for annotated essays.
use serde::{Deserialize, Serialize};

/// Argument component categories found in annotation documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MajorClaim,
    Claim,
    Premise,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::MajorClaim, Category::Claim, Category::Premise];

    /// Keyword as it appears in annotation documents (lowercased).
    pub fn keyword(&self) -> &'static str {
        match self {
            Category::MajorClaim => "majorclaim",
            Category::Claim => "claim",
            Category::Premise => "premise",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major_claim" | "majorclaim" => Ok(Category::MajorClaim),
            "claims" | "claim" => Ok(Category::Claim),
            "premises" | "premise" => Ok(Category::Premise),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// A character span into the source essay.
///
/// Serializes as the two-element array `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the span's start offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the span's end offset.
    pub fn end(&self) -> usize {
        self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<Span> for (usize, usize) {
    fn from(s: Span) -> Self {
        (s.start, s.end)
    }
}

/// One annotated unit: a span and the verbatim covered text.
///
/// The text is what the annotation tool recorded, not a re-slice of the
/// essay at the span offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentComponent {
    span: Span,
    text: String,
}

impl ArgumentComponent {
    pub fn new(span: Span, text: String) -> Self {
        Self { span, text }
    }

    /// Get a reference to the component's span.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Get a reference to the component's text.
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }
}

/// Per-category component lists for one essay, in document order.
///
/// Immutable once parsed; the caller composes it with the other
/// per-essay data into a corpus record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssayAnnotations {
    major_claim: Vec<ArgumentComponent>,
    claims: Vec<ArgumentComponent>,
    premises: Vec<ArgumentComponent>,
}

impl EssayAnnotations {
    /// Get a reference to a category's component list.
    pub fn components(&self, category: Category) -> &[ArgumentComponent] {
        match category {
            Category::MajorClaim => &self.major_claim,
            Category::Claim => &self.claims,
            Category::Premise => &self.premises,
        }
    }

    pub(crate) fn set_components(&mut self, category: Category, components: Vec<ArgumentComponent>) {
        match category {
            Category::MajorClaim => self.major_claim = components,
            Category::Claim => self.claims = components,
            Category::Premise => self.premises = components,
        }
    }
}
