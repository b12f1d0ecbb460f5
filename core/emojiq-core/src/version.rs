//! Version range matching for emoji versions.
//!
//! Ranges use the npm-style surface (`<17.0.0`, `>=13.0 <15.0`, `12 - 13.1`,
//! `13.x || 15.x`) and are evaluated with `semver::VersionReq`. Emoji
//! versions only carry `major.minor`, so they are matched as `major.minor.0`.

use semver::{Version, VersionReq};

use crate::error::{QueryError, Result};
use crate::record::EmojiVersion;

/// A parsed range expression: a version matches if any alternative does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    pub fn parse(expr: &str) -> Result<Self> {
        let alternatives = expr
            .split("||")
            .map(|alt| {
                let translated = translate(alt);
                if translated.is_empty() {
                    return Ok(VersionReq::STAR);
                }
                VersionReq::parse(&translated).map_err(|source| QueryError::InvalidRange {
                    range: expr.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { alternatives })
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }

    pub fn matches_emoji(&self, version: EmojiVersion) -> bool {
        self.matches(&version.to_semver())
    }
}

/// Check a single emoji version against a range expression.
pub fn satisfies(version: EmojiVersion, range: &str) -> Result<bool> {
    Ok(VersionRange::parse(range)?.matches_emoji(version))
}

/// Rewrite one `||` alternative into `VersionReq` syntax.
fn translate(alternative: &str) -> String {
    let alternative = alternative.trim();
    if let Some((lo, hi)) = alternative.split_once(" - ") {
        return format!(">={}, <={}", lo.trim(), hi.trim());
    }

    let mut comparators: Vec<String> = Vec::new();
    let mut pending_op = String::new();

    for token in alternative.split_whitespace() {
        let token = token.trim_end_matches(',');
        if token.is_empty() {
            continue;
        }
        if token.chars().all(is_operator_char) {
            pending_op.push_str(token);
            continue;
        }

        if pending_op.is_empty() {
            comparators.push(bare_comparator(token));
        } else {
            comparators.push(format!("{pending_op}{token}"));
            pending_op.clear();
        }
    }

    // A dangling operator is kept so that semver rejects it.
    if !pending_op.is_empty() {
        comparators.push(pending_op);
    }

    comparators.join(", ")
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '~' | '^')
}

/// A bare `13.1` names that release line, not a caret range.
fn bare_comparator(token: &str) -> String {
    let plain_version = token.starts_with(|c: char| c.is_ascii_digit())
        && !token.contains(|c: char| matches!(c, 'x' | 'X' | '*'));
    if plain_version {
        format!("={token}")
    } else {
        token.to_string()
    }
}
