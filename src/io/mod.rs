/*!
# IO utilities

Corpus saving. Loading is left to consumers; the generated corpus is a
plain JSON array.
!*/
pub mod writer;

pub use writer::CorpusWriter;
