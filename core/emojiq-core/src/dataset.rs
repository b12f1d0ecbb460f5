//! The embedded emoji catalog.
//!
//! Records are generated at build time from `data/emoji-test.txt` and kept in
//! file order. The count constants pin the bundled release so that a data
//! update shows up as a test failure rather than a silent change.

use indexmap::IndexSet;

use crate::record::{EmojiRecord, EmojiVersion, Status};

include!(concat!(env!("OUT_DIR"), "/dataset.rs"));

/// Every record of the bundled release, in file order.
pub fn records() -> &'static [EmojiRecord] {
    &RECORDS
}

/// Expected number of records with the given status.
pub fn status_count(status: Status) -> usize {
    match status {
        Status::FullyQualified => FULLY_QUALIFIED_COUNT,
        Status::MinimallyQualified => MINIMALLY_QUALIFIED_COUNT,
        Status::Unqualified => UNQUALIFIED_COUNT,
        Status::Component => COMPONENT_COUNT,
    }
}

/// Distinct group names in first-appearance order.
pub fn groups() -> Vec<&'static str> {
    records()
        .iter()
        .map(|record| record.group)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
