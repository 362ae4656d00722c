//! Unified-corpus pipeline and its record types.
mod document;
mod pipeline;

pub use document::{essay_id, EssayRecord};
pub use pipeline::UnifiedCorpus;
