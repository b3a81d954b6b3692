//! Record types shared by the walker, the serializer, and the helper
//! binaries.
//!
//! The serde field names (`Zone`, `Water`, ...) and their declaration order
//! are part of the output contract: downstream consumers read the catalog
//! file positionally and key on the exact strings, so renaming or reordering
//! fields here is a breaking change.

use serde::{Deserialize, Serialize};

/// Water-condition label encoded in survey image names.
///
/// The set is closed; a name carrying any other token simply fails the
/// pattern and is skipped by the walker.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WaterTag {
    Dry,
    Rapid,
    Wet,
}

impl WaterTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterTag::Dry => "DRY",
            WaterTag::Rapid => "RAPID",
            WaterTag::Wet => "WET",
        }
    }

    /// Resolve the literal tag captured out of a filename.
    pub(crate) fn from_tag(value: &str) -> Option<Self> {
        match value {
            "DRY" => Some(WaterTag::Dry),
            "RAPID" => Some(WaterTag::Rapid),
            "WET" => Some(WaterTag::Wet),
            _ => None,
        }
    }
}

/// One catalog entry for a matched survey image.
///
/// Immutable once built; the walker appends entries in traversal order and
/// nothing mutates or removes them afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Zone label taken from the filename capture, not the directory name.
    #[serde(rename = "Zone")]
    pub zone: String,
    #[serde(rename = "Water")]
    pub water: WaterTag,
    /// Degree value with leading zeros dropped (`007` parses to `7`).
    #[serde(rename = "Degree")]
    pub degree: u64,
    /// Depth token kept verbatim, digits plus the trailing `m`.
    #[serde(rename = "Depth")]
    pub depth: String,
    /// Mixed-separator path in the legacy catalog shape; see
    /// [`legacy_file_path`].
    #[serde(rename = "File")]
    pub file: String,
}

/// Build the `File` field in the exact shape the legacy catalog emits:
/// backslashes between root, zone, and subfolder, then a forward slash
/// before the filename.
///
/// Consumers key on this literal format, so the mixed separators are load
/// bearing. Do not normalize without coordinating a format bump.
pub fn legacy_file_path(root: &str, zone_dir: &str, subfolder: &str, file_name: &str) -> String {
    format!("{root}\\{zone_dir}\\{subfolder}/{file_name}")
}
