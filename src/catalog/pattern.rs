//! Filename matcher for survey images.
//!
//! Names follow the fixed convention
//! `<zoneLabel>_<DRY|RAPID|WET>_<degreeDigits>_<depthDigits>m.png`. The
//! pattern is anchored at both ends so trailing junk between the depth token
//! and the extension never sneaks a record into the catalog. Names that do
//! not match are not an error; callers skip them silently.

use crate::catalog::model::WaterTag;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// Digits stay ASCII-only on purpose: the degree capture feeds u64 parsing,
// which does not accept other Unicode digit sets.
static IMAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9]+)_(DRY|RAPID|WET)_([0-9]+)_([0-9]+m)\.png$")
        .expect("image name pattern compiles")
});

/// Metadata extracted from one matching filename.
///
/// Serializes with the catalog field names so `match-name` output lines up
/// with catalog records, minus the `File` path the matcher cannot know.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ParsedName {
    #[serde(rename = "Zone")]
    pub zone: String,
    #[serde(rename = "Water")]
    pub water: WaterTag,
    #[serde(rename = "Degree")]
    pub degree: u64,
    #[serde(rename = "Depth")]
    pub depth: String,
}

/// Match `name` against the catalog pattern.
///
/// Returns `Ok(None)` for names that do not match. A name that matches but
/// carries a degree beyond `u64` range is an explicit error rather than a
/// silent skip: the name is well formed, the value just cannot be
/// represented, and dropping it would make the catalog silently incomplete.
pub fn parse_image_name(name: &str) -> Result<Option<ParsedName>> {
    let Some(caps) = IMAGE_NAME.captures(name) else {
        return Ok(None);
    };

    let water = WaterTag::from_tag(&caps[2]).expect("pattern restricts water tags");
    let degree: u64 = caps[3]
        .parse()
        .with_context(|| format!("degree '{}' in '{name}' overflows u64", &caps[3]))?;

    Ok(Some(ParsedName {
        zone: caps[1].to_string(),
        water,
        degree,
        depth: caps[4].to_string(),
    }))
}
