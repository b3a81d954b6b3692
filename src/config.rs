//! Run configuration for the catalog builder.
//!
//! The legacy tool baked the scan root and the output filename into its
//! control flow; here they live in an explicit structure handed to the
//! pipeline, with defaults matching the legacy values so a bare
//! `catalog-build` run behaves identically.

use std::path::PathBuf;

/// Scan root used when no `--root` flag is given.
pub const DEFAULT_ROOT: &str = "PTT_PICTURE";

/// Output file used when no `--output` flag is given.
pub const DEFAULT_OUTPUT: &str = "images_output.json";

/// Everything one catalog run needs to know.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Directory holding the `zone/subfolder/image` tree.
    pub root: PathBuf,
    /// Destination for the JSON catalog; created or truncated on write.
    pub output: PathBuf,
    /// Pretty-print with 4-space indentation (the legacy shape) when true,
    /// single-line compact JSON otherwise.
    pub pretty: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            pretty: true,
        }
    }
}
