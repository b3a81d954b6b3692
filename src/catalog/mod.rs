//! Catalog extraction pipeline.
//!
//! `pattern` owns the filename contract, `model` the record shape, and
//! `walk` the fixed three-level traversal that ties them together. The
//! serializer lives in `crate::output` so the record types stay free of any
//! formatting concerns.

pub mod model;
pub mod pattern;
pub mod walk;

pub use model::{ImageRecord, WaterTag, legacy_file_path};
pub use pattern::{ParsedName, parse_image_name};
pub use walk::scan_root;
