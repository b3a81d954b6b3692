//! Catalog serialization.
//!
//! The pretty form reproduces the legacy catalog byte-for-byte: a JSON array
//! indented with four spaces and non-ASCII characters written literally
//! (serde_json never escapes them, matching the legacy writer). The whole
//! document is rendered in memory first so a failed write never leaves a
//! half-serialized file behind a successful return.

use crate::catalog::model::ImageRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Render the record sequence as a JSON array string.
pub fn render_catalog(records: &[ImageRecord], pretty: bool) -> Result<String> {
    if !pretty {
        return serde_json::to_string(records).context("serializing catalog records");
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .context("serializing catalog records")?;
    String::from_utf8(buf).context("catalog JSON was not valid UTF-8")
}

/// Write the catalog to `path`, creating or truncating the file.
pub fn write_catalog(path: &Path, records: &[ImageRecord], pretty: bool) -> Result<()> {
    let rendered = render_catalog(records, pretty)?;
    fs::write(path, rendered).with_context(|| format!("writing catalog to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{WaterTag, legacy_file_path};
    use tempfile::TempDir;

    fn sample() -> ImageRecord {
        ImageRecord {
            zone: "ZoneA".to_string(),
            water: WaterTag::Wet,
            degree: 15,
            depth: "30m".to_string(),
            file: legacy_file_path("PTT_PICTURE", "ZoneA", "Sub1", "ZoneA_WET_015_30m.png"),
        }
    }

    #[test]
    fn pretty_form_uses_four_space_indent() {
        let rendered = render_catalog(&[sample()], true).unwrap();
        let expected = concat!(
            "[\n",
            "    {\n",
            "        \"Zone\": \"ZoneA\",\n",
            "        \"Water\": \"WET\",\n",
            "        \"Degree\": 15,\n",
            "        \"Depth\": \"30m\",\n",
            "        \"File\": \"PTT_PICTURE\\\\ZoneA\\\\Sub1/ZoneA_WET_015_30m.png\"\n",
            "    }\n",
            "]"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn empty_catalog_renders_as_bare_array() {
        assert_eq!(render_catalog(&[], true).unwrap(), "[]");
        assert_eq!(render_catalog(&[], false).unwrap(), "[]");
    }

    #[test]
    fn compact_form_is_single_line() {
        let rendered = render_catalog(&[sample()], false).unwrap();
        assert!(!rendered.contains('\n'));
        assert!(rendered.starts_with("[{\"Zone\":\"ZoneA\""));
    }

    #[test]
    fn non_ascii_path_bytes_stay_literal() {
        let mut record = sample();
        record.file = "PTT_PICTURE\\โซน\\Sub1/ZoneA_WET_015_30m.png".to_string();
        let rendered = render_catalog(&[record], true).unwrap();
        assert!(rendered.contains("โซน"));
        assert!(!rendered.contains("\\u"));
    }

    #[test]
    fn write_overwrites_an_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        fs::write(&path, "stale contents that are longer than the new file").unwrap();

        write_catalog(&path, &[], true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn write_into_missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent").join("catalog.json");
        let err = write_catalog(&path, &[], true).unwrap_err();
        assert!(err.to_string().contains("writing catalog"), "{err:#}");
    }
}
