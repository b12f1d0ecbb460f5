//! Fuzzy description index backed by `nucleo-matcher`.
//!
//! Scores are normalized against the needle's score on itself, giving a
//! distance where `0.0` is an exact match and `1.0` is no match at all.
//!
//! The needle is split on whitespace and each word is matched on its own.
//! Word order and the gap between words do not affect the score, so
//! `heart red` is an exact match for `red heart`. A misspelt word must still
//! match as a subsequence somewhere in the description: `thumbs uo` misses
//! `thumbs up` because no `o` follows the `u`, but hits `thumbs down`.

use std::fmt;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str, Utf32String};

use crate::record::EmojiRecord;

/// Default maximum distance for a description to count as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// A record position in the indexed slice and its distance from the needle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyHit {
    pub index: usize,
    pub distance: f64,
}

/// Pre-converted descriptions, one per record, in record order.
pub struct FuzzyIndex {
    haystacks: Vec<Utf32String>,
}

impl FuzzyIndex {
    pub fn build(records: &[EmojiRecord]) -> Self {
        let haystacks = records
            .iter()
            .map(|record| Utf32String::from(record.description))
            .collect();
        Self { haystacks }
    }

    /// Hits within `threshold`, best first; equal distances keep record order.
    ///
    /// The matcher's scratch space is allocated per call so the index can be
    /// shared across threads without locking.
    pub fn search(&self, needle: &str, threshold: f64) -> Vec<FuzzyHit> {
        let needle = needle.trim();
        if needle.is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::new(
            needle,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let perfect = match pattern.score(Utf32Str::new(needle, &mut buf), &mut matcher) {
            Some(score) if score > 0 => f64::from(score),
            _ => return Vec::new(),
        };

        let mut hits: Vec<FuzzyHit> = self
            .haystacks
            .iter()
            .enumerate()
            .filter_map(|(index, haystack)| {
                let score = pattern.score(haystack.slice(..), &mut matcher)?;
                let distance = (1.0 - f64::from(score) / perfect).max(0.0);
                (distance <= threshold).then_some(FuzzyHit { index, distance })
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.index.cmp(&b.index))
        });
        hits
    }
}

impl fmt::Debug for FuzzyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyIndex")
            .field("entries", &self.haystacks.len())
            .finish()
    }
}
