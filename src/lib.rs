//! Survey picture catalog builder.
//!
//! Walks a fixed `root/zone/subfolder` tree of survey photos whose filenames
//! encode zone, water condition, degree, and depth, and emits one JSON
//! catalog document with a record per matched image. The whole run is a
//! single synchronous pipeline: walk, match, accumulate, serialize. The
//! `catalog-build` binary drives [`run_catalog_build`]; `match-name` exposes
//! the filename matcher on its own for quick checks.

use anyhow::Result;

pub mod catalog;
pub mod config;
pub mod output;

pub use catalog::{ImageRecord, ParsedName, WaterTag, legacy_file_path, parse_image_name, scan_root};
pub use config::{CatalogConfig, DEFAULT_OUTPUT, DEFAULT_ROOT};
pub use output::{render_catalog, write_catalog};

/// Run the full pipeline: scan the configured root and write the catalog.
///
/// Returns the number of records written. Filesystem errors during the walk
/// abort before the output file is touched, so a failed run never clobbers a
/// previous catalog.
pub fn run_catalog_build(config: &CatalogConfig) -> Result<usize> {
    let records = catalog::scan_root(config)?;
    output::write_catalog(&config.output, &records, config.pretty)?;
    Ok(records.len())
}
