//! Locale-aware title comparison.
//!
//! Titles are compared with the Unicode Collation Algorithm over the CLDR root
//! order. Punctuation and symbols are non-ignorable and sort ahead of digits
//! and letters. Base letters outweigh accents, and accents outweigh case.

use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;

/// A root-locale collator for recipe titles.
///
/// Keeps the collator's scratch buffers between comparisons, so one instance
/// should be reused across a whole sort.
pub struct TitleCollator {
    inner: Collator,
}

impl TitleCollator {
    pub fn new() -> Self {
        // Non-shifted, no code point tiebreak: equal titles stay equal so a
        // stable sort keeps their load order.
        Self {
            inner: Collator::new(Tailoring::Cldr(Locale::Root), false, false),
        }
    }

    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two titles once. Prefer [`TitleCollator`] when sorting.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    TitleCollator::new().compare(a, b)
}
