//! emojiq-core: queryable access to the Unicode emoji catalog.
//!
//! The catalog is generated at build time from the bundled `emoji-test.txt`
//! release and never changes at runtime. Queries run in two stages:
//!
//! 1. **Keyword**: a fuzzy search over record descriptions narrows the
//!    working set. Ranking only decides membership.
//! 2. **Predicates**: emoji, version range, status, group, subgroup, and
//!    skin tone are ANDed over the working set. The stage is skipped when
//!    none of them is set.
//!
//! Results keep catalog order and can be projected to characters or grouped
//! by taxonomy.
//!
//! ```rust,no_run
//! use emojiq_core::{query_grouped_by_group, query_records, Query};
//!
//! let smiles = query_records("smile")?;
//! println!("{} records mention smiling", smiles.len());
//!
//! let query = Query::new()
//!     .with_groups(["Smileys & Emotion", "People & Body"])
//!     .with_status("fully-qualified")
//!     .with_skin_tone(false)
//!     .with_version("<15.0.0");
//! for (group, chars) in query_grouped_by_group(query)? {
//!     println!("{group}: {}", chars.len());
//! }
//! # Ok::<(), emojiq_core::QueryError>(())
//! ```

use std::sync::LazyLock;

pub mod dataset;
pub mod error;
pub mod fuzzy;
#[cfg(test)]
mod parse;
pub mod projection;
pub mod query;
pub mod record;
pub mod search;
pub mod version;

pub use error::{QueryError, Result};
pub use projection::{GroupedByGroup, GroupedBySubgroup};
pub use query::{FieldFilter, Query};
pub use record::{EmojiRecord, EmojiVersion, Status};
pub use search::{Catalog, SearchOptions};

static CATALOG: LazyLock<Catalog<'static>> =
    LazyLock::new(|| Catalog::with_options(dataset::records(), SearchOptions::from_env()));

/// The process-wide catalog over the embedded dataset, built on first use.
pub fn catalog() -> &'static Catalog<'static> {
    &CATALOG
}

/// Filtered records in catalog order.
pub fn query_records(query: impl Into<Query>) -> Result<Vec<&'static EmojiRecord>> {
    catalog().filter(&query.into())
}

/// Character sequences of the filtered records, in catalog order with
/// duplicates kept.
pub fn query_characters(query: impl Into<Query>) -> Result<Vec<&'static str>> {
    catalog().characters(&query.into())
}

/// Distinct characters per group.
pub fn query_grouped_by_group(query: impl Into<Query>) -> Result<GroupedByGroup> {
    catalog().grouped_by_group(&query.into())
}

/// Distinct characters per group and subgroup.
pub fn query_grouped_by_subgroup(query: impl Into<Query>) -> Result<GroupedBySubgroup> {
    catalog().grouped_by_subgroup(&query.into())
}
