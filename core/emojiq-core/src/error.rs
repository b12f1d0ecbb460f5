use thiserror::Error;

/// Errors surfaced by catalog queries.
///
/// Unknown status, group, or subgroup values are not errors; they simply
/// match nothing.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid version range {range:?}: {source}")]
    InvalidRange {
        range: String,
        #[source]
        source: semver::Error,
    },
}

pub type Result<T> = std::result::Result<T, QueryError>;
