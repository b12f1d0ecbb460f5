//! Keyword search and predicate filtering over a record slice.

use std::env;

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::fuzzy::{FuzzyIndex, DEFAULT_THRESHOLD};
use crate::projection::{self, GroupedByGroup, GroupedBySubgroup};
use crate::query::Query;
use crate::record::EmojiRecord;

/// Environment variable overriding the fuzzy threshold of the global catalog.
pub const THRESHOLD_ENV: &str = "EMOJIQ_FUZZY_THRESHOLD";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Maximum fuzzy distance (0 = exact, 1 = anything) for keyword hits.
    pub threshold: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SearchOptions {
    /// Set the threshold, clamped into `0.0..=1.0`. NaN is ignored.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        if !threshold.is_nan() {
            self.threshold = threshold.clamp(0.0, 1.0);
        }
        self
    }

    /// Defaults, with the threshold taken from `EMOJIQ_FUZZY_THRESHOLD` when
    /// it holds a number in `0.0..=1.0`.
    pub fn from_env() -> Self {
        let opts = Self::default();
        match env::var(THRESHOLD_ENV) {
            Ok(raw) => match parse_threshold(&raw) {
                Some(threshold) => opts.with_threshold(threshold),
                None => {
                    warn!(value = %raw, "ignoring {THRESHOLD_ENV}: expected a number in 0.0..=1.0");
                    opts
                }
            },
            Err(_) => opts,
        }
    }
}

fn parse_threshold(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (0.0..=1.0).contains(&value).then_some(value)
}

/// A record slice together with its fuzzy description index.
#[derive(Debug)]
pub struct Catalog<'a> {
    records: &'a [EmojiRecord],
    index: FuzzyIndex,
    options: SearchOptions,
}

impl<'a> Catalog<'a> {
    pub fn new(records: &'a [EmojiRecord]) -> Self {
        Self::with_options(records, SearchOptions::default())
    }

    pub fn with_options(records: &'a [EmojiRecord], options: SearchOptions) -> Self {
        let index = FuzzyIndex::build(records);
        debug!(
            records = records.len(),
            threshold = options.threshold,
            "built fuzzy description index"
        );
        Self {
            records,
            index,
            options,
        }
    }

    pub fn records(&self) -> &'a [EmojiRecord] {
        self.records
    }

    /// Ranked keyword hits with their distances, best first.
    pub fn search(&self, keyword: &str) -> Vec<(&'a EmojiRecord, f64)> {
        self.index
            .search(keyword, self.options.threshold)
            .into_iter()
            .map(|hit| (&self.records[hit.index], hit.distance))
            .collect()
    }

    /// Run the keyword stage, then the predicate stage, keeping record order.
    ///
    /// A malformed version range fails before any record is examined.
    pub fn filter(&self, query: &Query) -> Result<Vec<&'a EmojiRecord>> {
        let predicate = query.predicate()?;

        let keyword_mask = query.keyword().map(|keyword| {
            let mut mask = vec![false; self.records.len()];
            for hit in self.index.search(keyword, self.options.threshold) {
                mask[hit.index] = true;
            }
            mask
        });

        let working = self
            .records
            .iter()
            .enumerate()
            .filter(|(idx, _)| keyword_mask.as_ref().map_or(true, |mask| mask[*idx]))
            .map(|(_, record)| record);

        let matches: Vec<&'a EmojiRecord> = if query.has_predicates() {
            working.filter(|record| predicate.matches(record)).collect()
        } else {
            working.collect()
        };

        trace!(
            keyword = query.keyword(),
            keyword_hits = keyword_mask
                .as_ref()
                .map(|mask| mask.iter().filter(|hit| **hit).count()),
            matches = matches.len(),
            "filtered catalog"
        );

        Ok(matches)
    }

    /// Character sequences of the filtered records, duplicates kept.
    pub fn characters(&self, query: &Query) -> Result<Vec<&'static str>> {
        Ok(projection::characters(&self.filter(query)?))
    }

    pub fn grouped_by_group(&self, query: &Query) -> Result<GroupedByGroup> {
        Ok(projection::group_by_group(&self.filter(query)?))
    }

    pub fn grouped_by_subgroup(&self, query: &Query) -> Result<GroupedBySubgroup> {
        Ok(projection::group_by_subgroup(&self.filter(query)?))
    }
}
