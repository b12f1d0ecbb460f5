//! Parser for the Unicode `emoji-test.txt` data file.
//!
//! The build script includes this module to turn the bundled release into the
//! static dataset; the crate compiles it again under `cfg(test)` to check the
//! generated records against a fresh parse.

use std::ops::RangeInclusive;

use anyhow::{anyhow, bail, Context, Result};
use regex::Regex;

/// Qualification statuses in the spelling used by the data file.
pub const STATUSES: [&str; 4] = [
    "fully-qualified",
    "minimally-qualified",
    "unqualified",
    "component",
];

const SKIN_TONE_MODIFIERS: RangeInclusive<u32> = 0x1F3FB..=0x1F3FF;

const ENTRY_PATTERN: &str = r"^(?P<cps>[0-9A-Fa-f]+(?: [0-9A-Fa-f]+)*)\s*;\s*(?P<status>[a-z-]+)\s*#\s*(?P<emoji>\S+)\s+E(?P<major>\d+)\.(?P<minor>\d+)\s+(?P<name>.+)$";

/// One entry line together with the group and subgroup headers in effect
/// when it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntry {
    pub code_points: Vec<u32>,
    pub status: String,
    pub emoji: String,
    pub major: u16,
    pub minor: u16,
    pub description: String,
    pub group: String,
    pub subgroup: String,
}

impl TestEntry {
    /// True for modifier sequences; the bare modifiers in the `Component`
    /// group do not count.
    pub fn has_skin_tone(&self) -> bool {
        self.code_points.len() > 1
            && self
                .code_points
                .iter()
                .any(|cp| SKIN_TONE_MODIFIERS.contains(cp))
    }
}

/// Read the `# Version: x.y` header, if the file carries one.
pub fn parse_release(input: &str) -> Option<String> {
    input
        .lines()
        .take_while(|line| line.starts_with('#') || line.trim().is_empty())
        .find_map(|line| line.trim_start_matches('#').trim().strip_prefix("Version:"))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse every entry line of an `emoji-test.txt` file, in file order.
pub fn parse_emoji_test(input: &str) -> Result<Vec<TestEntry>> {
    let entry_re = Regex::new(ENTRY_PATTERN)?;
    let mut group: Option<String> = None;
    let mut subgroup: Option<String> = None;
    let mut entries = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();
            if let Some(name) = comment.strip_prefix("group:") {
                group = Some(header_value(name, lineno, "group")?);
                subgroup = None;
            } else if let Some(name) = comment.strip_prefix("subgroup:") {
                subgroup = Some(header_value(name, lineno, "subgroup")?);
            }
            continue;
        }

        let caps = entry_re
            .captures(line)
            .ok_or_else(|| anyhow!("line {lineno}: malformed entry: {line}"))?;

        let status = &caps["status"];
        if !STATUSES.contains(&status) {
            bail!("line {lineno}: unknown status {status:?}");
        }

        let code_points = parse_code_points(&caps["cps"])
            .with_context(|| format!("line {lineno}: bad code point column"))?;
        let emoji = &caps["emoji"];
        let expected: String = code_points
            .iter()
            .map(|&cp| char::from_u32(cp).ok_or_else(|| anyhow!("invalid scalar U+{cp:04X}")))
            .collect::<Result<_>>()
            .with_context(|| format!("line {lineno}: bad code point column"))?;
        if expected != emoji {
            bail!("line {lineno}: emoji column {emoji:?} does not match code points");
        }

        let major = caps["major"]
            .parse()
            .with_context(|| format!("line {lineno}: bad major version"))?;
        let minor = caps["minor"]
            .parse()
            .with_context(|| format!("line {lineno}: bad minor version"))?;

        let description = caps["name"].trim();
        if description.is_empty() {
            bail!("line {lineno}: empty description");
        }

        let group = group
            .clone()
            .ok_or_else(|| anyhow!("line {lineno}: entry before any group header"))?;
        let subgroup = subgroup
            .clone()
            .ok_or_else(|| anyhow!("line {lineno}: entry before any subgroup header"))?;

        entries.push(TestEntry {
            code_points,
            status: status.to_string(),
            emoji: emoji.to_string(),
            major,
            minor,
            description: description.to_string(),
            group,
            subgroup,
        });
    }

    Ok(entries)
}

fn header_value(raw: &str, lineno: usize, kind: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        bail!("line {lineno}: empty {kind} header");
    }
    Ok(value.to_string())
}

fn parse_code_points(raw: &str) -> Result<Vec<u32>> {
    raw.split_whitespace()
        .map(|hex| u32::from_str_radix(hex, 16).map_err(|_| anyhow!("invalid hex: {hex}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::record::Status;

    const SAMPLE: &str = "\
# Version: 17.0

# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face
263A FE0F                                              ; fully-qualified     # ☺️ E0.6 smiling face
263A                                                   ; unqualified         # ☺ E0.6 smiling face

# group: People & Body

# subgroup: hand-fingers-open
1F44B 1F3FB                                            ; fully-qualified     # 👋🏻 E1.0 waving hand: light skin tone
";

    #[test]
    fn parses_entries_with_headers() {
        let entries = parse_emoji_test(SAMPLE).expect("parse");

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].emoji, "😀");
        assert_eq!(entries[0].description, "grinning face");
        assert_eq!((entries[0].major, entries[0].minor), (1, 0));
        assert_eq!(entries[1].code_points, vec![0x263A, 0xFE0F]);
        assert_eq!(entries[2].status, "unqualified");
        assert_eq!(entries[3].group, "People & Body");
        assert_eq!(entries[3].subgroup, "hand-fingers-open");
    }

    #[test]
    fn skin_tone_requires_a_modified_sequence() {
        let entries = parse_emoji_test(SAMPLE).expect("parse");
        assert!(!entries[0].has_skin_tone());
        assert!(entries[3].has_skin_tone());

        let bare_modifier = parse_emoji_test(
            "# group: Component\n# subgroup: skin-tone\n1F3FB ; component # 🏻 E1.0 light skin tone\n",
        )
        .expect("parse");
        assert!(!bare_modifier[0].has_skin_tone());
    }

    #[test]
    fn reads_release_header() {
        assert_eq!(parse_release(SAMPLE).as_deref(), Some("17.0"));
        assert_eq!(parse_release("# group: Flags\n"), None);
    }

    #[test]
    fn rejects_entry_before_group_header() {
        let err = parse_emoji_test("1F600 ; fully-qualified # 😀 E1.0 grinning face\n")
            .expect_err("missing header");
        assert!(err.to_string().contains("group header"), "{err}");
    }

    #[test]
    fn rejects_unknown_status() {
        let input = "# group: G\n# subgroup: s\n1F600 ; half-qualified # 😀 E1.0 grinning face\n";
        let err = parse_emoji_test(input).expect_err("bad status");
        assert!(err.to_string().contains("unknown status"), "{err}");
    }

    #[test]
    fn rejects_emoji_that_disagrees_with_code_points() {
        let input = "# group: G\n# subgroup: s\n1F600 ; fully-qualified # 😃 E1.0 grinning face\n";
        let err = parse_emoji_test(input).expect_err("mismatch");
        assert!(err.to_string().contains("does not match"), "{err}");
    }

    #[test]
    fn generated_dataset_matches_bundled_file() {
        let raw = include_str!("../data/emoji-test.txt");
        let entries = parse_emoji_test(raw).expect("bundled data parses");
        let records = dataset::records();

        assert_eq!(entries.len(), records.len());
        for (entry, record) in entries.iter().zip(records) {
            assert_eq!(entry.emoji, record.emoji);
            assert_eq!(entry.description, record.description);
            assert_eq!((entry.major, entry.minor), (record.version.major, record.version.minor));
            assert_eq!(entry.status, record.status.as_str());
            assert_eq!(entry.group, record.group);
            assert_eq!(entry.subgroup, record.subgroup);
            assert_eq!(entry.has_skin_tone(), record.skin_tone);
        }

        let fully = entries.iter().filter(|e| e.status == Status::FullyQualified.as_str()).count();
        assert_eq!(fully, dataset::FULLY_QUALIFIED_COUNT);
        assert_eq!(parse_release(raw).as_deref(), Some(dataset::UNICODE_RELEASE));
    }
}
