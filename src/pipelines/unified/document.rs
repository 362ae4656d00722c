//! Unified corpus records.
use lazy_static::lazy_static;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::annotation::EssayAnnotations;
use crate::error::Error;
use crate::sources::Paragraph;

lazy_static! {
    /// first run of digits in an essay stem
    static ref ESSAY_ID: Regex = Regex::new(r"\d+").unwrap();
}

/// Numeric essay id from a file stem (`essay042` → 42).
pub fn essay_id(name: &str) -> Result<usize, Error> {
    let digits = ESSAY_ID
        .find(name)
        .ok_or_else(|| Error::Custom(format!("no numeric id in essay name: {}", name)))?;

    Ok(digits.as_str().parse()?)
}

/// One merged per-essay record.
///
/// Serializes with the annotation lists flattened between the essay
/// text and the label fields:
/// `{id, text, major_claim, claims, premises, confirmation_bias, paragraphs}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssayRecord {
    id: usize,
    text: String,
    #[serde(flatten)]
    annotations: EssayAnnotations,
    confirmation_bias: bool,
    paragraphs: Vec<Paragraph>,
}

impl EssayRecord {
    pub fn new(
        id: usize,
        text: String,
        annotations: EssayAnnotations,
        confirmation_bias: bool,
        paragraphs: Vec<Paragraph>,
    ) -> Self {
        Self {
            id,
            text,
            annotations,
            confirmation_bias,
            paragraphs,
        }
    }

    /// Get the record's essay id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get a reference to the record's essay text.
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    /// Get a reference to the record's annotations.
    pub fn annotations(&self) -> &EssayAnnotations {
        &self.annotations
    }

    pub fn confirmation_bias(&self) -> bool {
        self.confirmation_bias
    }

    /// Get a reference to the record's paragraphs.
    pub fn paragraphs(&self) -> &[Paragraph] {
        self.paragraphs.as_ref()
    }
}
