//! Three-level directory walk that accumulates the catalog.
//!
//! The layout contract is fixed: `root/zone/subfolder/file`. Anything that
//! is not a directory at the zone or subfolder level, and any file that does
//! not match the image pattern, is skipped without comment. Only filesystem
//! listing failures (and degree overflow, see `pattern`) abort the walk.

use crate::catalog::model::{ImageRecord, legacy_file_path};
use crate::catalog::pattern::parse_image_name;
use crate::config::CatalogConfig;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSION: &str = ".png";

/// Walk `config.root` and build the full record sequence.
///
/// Entries are visited in lexicographic name order at every level, so two
/// runs over the same tree always produce byte-identical catalogs. A missing
/// or unreadable root is fatal; an empty root yields an empty catalog.
pub fn scan_root(config: &CatalogConfig) -> Result<Vec<ImageRecord>> {
    let root_label = config.root.display().to_string();
    let mut records = Vec::new();

    for (zone_dir, zone_path) in sorted_dirs(&config.root)
        .with_context(|| format!("listing zones under {}", config.root.display()))?
    {
        for (subfolder, sub_path) in sorted_dirs(&zone_path)
            .with_context(|| format!("listing subfolders under {}", zone_path.display()))?
        {
            for file_name in sorted_image_names(&sub_path)
                .with_context(|| format!("listing images under {}", sub_path.display()))?
            {
                let Some(parsed) = parse_image_name(&file_name)? else {
                    continue;
                };
                records.push(ImageRecord {
                    zone: parsed.zone,
                    water: parsed.water,
                    degree: parsed.degree,
                    depth: parsed.depth,
                    file: legacy_file_path(&root_label, &zone_dir, &subfolder, &file_name),
                });
            }
        }
    }

    Ok(records)
}

/// Subdirectories of `dir`, keyed by name for deterministic order.
///
/// Symlinks that resolve to directories count, mirroring the walk's original
/// `is_dir` semantics. Entries with non-UTF-8 names can never match the
/// ASCII filename pattern, so they are skipped like any other non-candidate.
fn sorted_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs: BTreeMap<String, PathBuf> = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            dirs.insert(name.to_string(), path);
        }
    }
    Ok(dirs.into_iter().collect())
}

/// File names under `dir` carrying the image extension, in sorted order.
fn sorted_image_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(IMAGE_EXTENSION) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
