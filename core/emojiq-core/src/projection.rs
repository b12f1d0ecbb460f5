//! Presentation transforms over filtered records.
//!
//! Groupings keep first-appearance order of groups, subgroups, and
//! characters, and deduplicate characters within each bucket.

use indexmap::{IndexMap, IndexSet};

use crate::record::EmojiRecord;

/// `group` → distinct characters in that group.
pub type GroupedByGroup = IndexMap<&'static str, IndexSet<&'static str>>;

/// `group` → `subgroup` → distinct characters in that subgroup.
pub type GroupedBySubgroup = IndexMap<&'static str, IndexMap<&'static str, IndexSet<&'static str>>>;

pub fn characters(records: &[&EmojiRecord]) -> Vec<&'static str> {
    records.iter().map(|record| record.emoji).collect()
}

pub fn group_by_group(records: &[&EmojiRecord]) -> GroupedByGroup {
    let mut grouped = GroupedByGroup::new();
    for record in records {
        grouped
            .entry(record.group)
            .or_default()
            .insert(record.emoji);
    }
    grouped
}

pub fn group_by_subgroup(records: &[&EmojiRecord]) -> GroupedBySubgroup {
    let mut grouped = GroupedBySubgroup::new();
    for record in records {
        grouped
            .entry(record.group)
            .or_default()
            .entry(record.subgroup)
            .or_default()
            .insert(record.emoji);
    }
    grouped
}
