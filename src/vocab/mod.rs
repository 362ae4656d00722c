/*! Discriminative vocabulary extraction.

Given externally supplied per-category word counts, [top_specific] finds
the words most characteristic of one argument category by deconflicting
the per-category top-n sets against each other.

Counts are inputs; nothing in this module tokenizes or counts words.
!*/
mod specific;
mod table;

pub use specific::top_specific;
pub use table::{CategoryTables, FrequencyTable};
