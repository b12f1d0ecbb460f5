//! Generates the static emoji dataset from `data/emoji-test.txt`.
//!
//! The output lands in `$OUT_DIR/dataset.rs` and is pulled into
//! `src/dataset.rs` with `include!`. Any malformed entry fails the build.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

#[allow(dead_code)]
#[path = "src/parse.rs"]
mod parse;

const DATA_FILE: &str = "data/emoji-test.txt";

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/parse.rs");
    println!("cargo:rerun-if-changed={DATA_FILE}");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR is not set")?);
    let data_path = manifest_dir.join(DATA_FILE);
    let raw = fs::read_to_string(&data_path)
        .with_context(|| format!("reading {}", data_path.display()))?;

    let entries = parse::parse_emoji_test(&raw)
        .with_context(|| format!("parsing {}", data_path.display()))?;
    if entries.is_empty() {
        bail!("{} contains no entries", data_path.display());
    }
    let release = parse::parse_release(&raw).unwrap_or_else(|| "unknown".to_string());

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR is not set")?);
    let out_path = out_dir.join("dataset.rs");
    fs::write(&out_path, render(&entries, &release)?)
        .with_context(|| format!("writing {}", out_path.display()))?;

    Ok(())
}

fn render(entries: &[parse::TestEntry], release: &str) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "// @generated by build.rs from {DATA_FILE}; do not edit.")?;
    writeln!(out)?;
    writeln!(out, "/// Unicode emoji release of the bundled data file.")?;
    writeln!(out, "pub const UNICODE_RELEASE: &str = {release:?};")?;
    writeln!(out)?;

    let mut counts = [0usize; 4];
    writeln!(out, "static RECORDS: [EmojiRecord; {}] = [", entries.len())?;
    for entry in entries {
        let slot = parse::STATUSES
            .iter()
            .position(|s| *s == entry.status)
            .with_context(|| format!("unknown status {:?}", entry.status))?;
        counts[slot] += 1;

        writeln!(
            out,
            "    EmojiRecord {{ emoji: {:?}, description: {:?}, version: EmojiVersion::new({}, {}), \
             status: Status::{}, group: {:?}, subgroup: {:?}, skin_tone: {} }},",
            entry.emoji,
            entry.description,
            entry.major,
            entry.minor,
            status_variant(slot),
            entry.group,
            entry.subgroup,
            entry.has_skin_tone(),
        )?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "/// Number of records in the bundled release.")?;
    writeln!(out, "pub const TOTAL_COUNT: usize = {};", entries.len())?;
    for (slot, count) in counts.iter().enumerate() {
        writeln!(out, "/// Records with status `{}`.", parse::STATUSES[slot])?;
        writeln!(
            out,
            "pub const {}_COUNT: usize = {count};",
            parse::STATUSES[slot].replace('-', "_").to_uppercase()
        )?;
    }

    Ok(out)
}

fn status_variant(slot: usize) -> &'static str {
    ["FullyQualified", "MinimallyQualified", "Unqualified", "Component"][slot]
}
