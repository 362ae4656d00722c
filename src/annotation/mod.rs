/*! Span-annotation parsing.

Annotation documents are line-oriented: each component record carries a
category keyword, two character offsets and the covered text. [parse]
turns one document into per-category, document-ordered component lists.

Relation and stance lines share the same files but are not component
records; they are skipped.
!*/
mod component;
mod parser;
mod patterns;

pub use component::{ArgumentComponent, Category, EssayAnnotations, Span};
pub use parser::parse;
