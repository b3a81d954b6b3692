//! Builds the survey image catalog.
//!
//! Scans the zone/subfolder photo tree, extracts metadata from every
//! filename that matches the fixed naming convention, and writes the full
//! catalog as one JSON array. Defaults mirror the legacy tool (scan
//! `PTT_PICTURE`, write `images_output.json`, pretty-print with four-space
//! indentation); flags override each piece independently.

use anyhow::{Result, anyhow, bail};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use surveycat::{CatalogConfig, run_catalog_build};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = CliArgs::parse()?.into_config();
    let written = run_catalog_build(&config)?;
    println!(
        "Wrote {written} image records to {}",
        config.output.display()
    );
    Ok(())
}

struct CliArgs {
    root: Option<PathBuf>,
    output: Option<PathBuf>,
    compact: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut root: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut compact = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--root" => {
                    if root.is_some() {
                        bail!("--root may only be provided once");
                    }
                    root = Some(PathBuf::from(next_value(&mut args, "--root")?));
                }
                "--output" => {
                    if output.is_some() {
                        bail!("--output may only be provided once");
                    }
                    output = Some(PathBuf::from(next_value(&mut args, "--output")?));
                }
                "--compact" => compact = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        Ok(CliArgs {
            root,
            output,
            compact,
        })
    }

    fn into_config(self) -> CatalogConfig {
        let defaults = CatalogConfig::default();
        CatalogConfig {
            root: self.root.unwrap_or(defaults.root),
            output: self.output.unwrap_or(defaults.output),
            pretty: !self.compact,
        }
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: catalog-build [--root PATH] [--output PATH] [--compact]\n\
Scans PATH (default: PTT_PICTURE) for zone/subfolder/image entries matching\n\
<zone>_<DRY|RAPID|WET>_<degree>_<depth>m.png and writes the extracted records\n\
as a JSON array (default: images_output.json, pretty-printed).\n"
}

fn print_usage() {
    print!("{}", usage());
}
