//! Category-specific top-n word extraction.
//!
//! Taking the raw top-n of each category over-represents words every
//! category shares (function words, topic vocabulary). [top_specific]
//! disqualifies words ranking top-n in more than one category and
//! backfills from the next-most-frequent words until the focus set no
//! longer overlaps the other two.
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use log::debug;

use crate::annotation::Category;
use crate::error::Error;

use super::table::{CategoryTables, FrequencyTable};

/// Pops words by descending count; equal counts pop lexicographically.
struct RankedWords<'t> {
    category: Category,
    heap: BinaryHeap<(u64, Reverse<&'t str>)>,
}

impl<'t> RankedWords<'t> {
    fn new(category: Category, table: &'t FrequencyTable) -> Self {
        let heap = table
            .iter()
            .map(|(word, count)| (*count, Reverse(word.as_str())))
            .collect();

        Self { category, heap }
    }

    /// Next word, or an error once the vocabulary is exhausted.
    fn pop(&mut self, needed: usize) -> Result<&'t str, Error> {
        match self.heap.pop() {
            Some((_, Reverse(word))) => Ok(word),
            None => Err(Error::InsufficientVocabulary {
                category: self.category,
                needed,
            }),
        }
    }
}

/// Extract the `n` words most specific to `focus`.
///
/// The result always has exactly `n` words and, at termination, shares
/// none with the stabilized top-n sets of the two other categories.
/// Shared words are removed from every set involved, not only the focus
/// one, so extractions over the same tables with different focus
/// categories yield mutually disjoint sets.
///
/// Input tables are left untouched.
pub fn top_specific(
    focus: Category,
    tables: &CategoryTables,
    n: usize,
) -> Result<HashSet<String>, Error> {
    if n == 0 {
        return Err(Error::Custom("n must be positive".to_string()));
    }

    // one priority ordering per category, in Category::ALL order
    let mut ranked: Vec<RankedWords> = Category::ALL
        .iter()
        .map(|category| RankedWords::new(*category, tables.get(*category)))
        .collect();

    // initial working sets: the raw top n of every category
    let mut sets: Vec<HashSet<&str>> = Vec::with_capacity(Category::ALL.len());
    for ranking in ranked.iter_mut() {
        let mut set = HashSet::with_capacity(n);
        for _ in 0..n {
            set.insert(ranking.pop(n)?);
        }
        sets.push(set);
    }

    // guards against duplicate entries in a malformed table
    if sets.iter().any(|set| set.len() != n) {
        return Err(Error::Custom(
            "initial top-n sets have diverging lengths".to_string(),
        ));
    }

    let (focus_idx, other1, other2) = match focus {
        Category::MajorClaim => (0, 1, 2),
        Category::Claim => (1, 0, 2),
        Category::Premise => (2, 1, 0),
    };

    loop {
        let common1: Vec<&str> = sets[focus_idx]
            .intersection(&sets[other1])
            .copied()
            .collect();
        let common2: Vec<&str> = sets[focus_idx]
            .intersection(&sets[other2])
            .copied()
            .collect();

        // terminal state: focus words are specific to the focus category
        if common1.is_empty() && common2.is_empty() {
            return Ok(sets[focus_idx]
                .iter()
                .map(|word| word.to_string())
                .collect());
        }

        debug!(
            "{:?}: dropping {} words shared with other categories",
            focus,
            common1.len() + common2.len()
        );

        // shared words are disqualified from both sides, keeping the
        // relation symmetric across calls with another focus category
        for word in &common1 {
            sets[focus_idx].remove(word);
            sets[other1].remove(word);
        }
        for word in &common2 {
            sets[focus_idx].remove(word);
            sets[other2].remove(word);
        }

        // refill every deficient set from its own ordering
        for idx in [focus_idx, other1, other2] {
            while sets[idx].len() < n {
                let word = ranked[idx].pop(n)?;
                sets[idx].insert(word);
            }
        }
    }
}
