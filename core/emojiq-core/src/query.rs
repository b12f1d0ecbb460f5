//! Query construction and per-record matching.

use crate::error::Result;
use crate::record::EmojiRecord;
use crate::version::VersionRange;

/// A filter on one record field: unset, a single value, or a set of values.
///
/// `Many(vec![])` is set but empty and matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldFilter<T> {
    #[default]
    Unset,
    One(T),
    Many(Vec<T>),
}

impl<T> FieldFilter<T> {
    pub fn is_set(&self) -> bool {
        !matches!(self, FieldFilter::Unset)
    }
}

impl FieldFilter<String> {
    fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldFilter::Many(values.into_iter().map(Into::into).collect())
    }

    /// Exact comparison for both forms.
    fn matches_exact(&self, value: &str) -> bool {
        match self {
            FieldFilter::Unset => true,
            FieldFilter::One(wanted) => wanted == value,
            FieldFilter::Many(wanted) => wanted.iter().any(|w| w == value),
        }
    }

    /// Case-insensitive for `One`, exact membership for `Many`.
    // The set form does not fold case; callers depend on the difference.
    fn matches_scalar_folded(&self, value: &str) -> bool {
        match self {
            FieldFilter::One(wanted) => eq_folded(wanted, value),
            other => other.matches_exact(value),
        }
    }
}

fn eq_folded(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Filter specification for catalog queries.
///
/// An empty query is the identity filter. A bare string converts into a
/// keyword-only query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    keyword: Option<String>,
    emoji: FieldFilter<String>,
    version: Option<String>,
    status: FieldFilter<String>,
    group: FieldFilter<String>,
    subgroup: FieldFilter<String>,
    skin_tone: Option<bool>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = FieldFilter::One(emoji.into());
        self
    }

    pub fn with_emojis<I, S>(mut self, emojis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emoji = FieldFilter::many(emojis);
        self
    }

    /// Version range expression such as `<17.0.0` or `>=13.0 <15.0`.
    pub fn with_version(mut self, range: impl Into<String>) -> Self {
        self.version = Some(range.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = FieldFilter::One(status.into());
        self
    }

    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status = FieldFilter::many(statuses);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = FieldFilter::One(group.into());
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group = FieldFilter::many(groups);
        self
    }

    pub fn with_subgroup(mut self, subgroup: impl Into<String>) -> Self {
        self.subgroup = FieldFilter::One(subgroup.into());
        self
    }

    pub fn with_subgroups<I, S>(mut self, subgroups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subgroup = FieldFilter::many(subgroups);
        self
    }

    pub fn with_skin_tone(mut self, skin_tone: bool) -> Self {
        self.skin_tone = Some(skin_tone);
        self
    }

    /// The keyword to search for, if one is present and not blank.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
    }

    /// Whether any field other than the keyword is set.
    pub fn has_predicates(&self) -> bool {
        self.emoji.is_set()
            || self.version.is_some()
            || self.status.is_set()
            || self.group.is_set()
            || self.subgroup.is_set()
            || self.skin_tone.is_some()
    }

    /// Compile the predicate fields, parsing the version range once.
    pub fn predicate(&self) -> Result<Predicate<'_>> {
        let version = self.version.as_deref().map(VersionRange::parse).transpose()?;
        Ok(Predicate {
            query: self,
            version,
        })
    }
}

impl From<&str> for Query {
    fn from(keyword: &str) -> Self {
        Query::new().with_keyword(keyword)
    }
}

impl From<String> for Query {
    fn from(keyword: String) -> Self {
        Query::new().with_keyword(keyword)
    }
}

impl From<&Query> for Query {
    fn from(query: &Query) -> Self {
        query.clone()
    }
}

/// The conjunctive record predicate of a [`Query`].
#[derive(Debug, Clone)]
pub struct Predicate<'q> {
    query: &'q Query,
    version: Option<VersionRange>,
}

impl Predicate<'_> {
    /// Check whether a record satisfies every set field; unset fields pass.
    pub fn matches(&self, record: &EmojiRecord) -> bool {
        let query = self.query;

        if !query.emoji.matches_exact(record.emoji) {
            return false;
        }

        if let Some(range) = &self.version {
            if !range.matches_emoji(record.version) {
                return false;
            }
        }

        if !query.status.matches_scalar_folded(record.status.as_str()) {
            return false;
        }

        if !query.group.matches_scalar_folded(record.group) {
            return false;
        }

        if !query.subgroup.matches_scalar_folded(record.subgroup) {
            return false;
        }

        if let Some(skin_tone) = query.skin_tone {
            if record.skin_tone != skin_tone {
                return false;
            }
        }

        true
    }
}
