//! Checks filenames against the catalog naming convention.
//!
//! For each name given on the command line, prints the extracted fields as
//! one compact JSON object per line, without touching the filesystem. A name
//! that does not match the convention is an error so shell pipelines can use
//! the exit status directly.

use anyhow::{Result, bail};
use std::env;
use surveycat::parse_image_name;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() || names.iter().any(|n| n == "--help" || n == "-h") {
        print!("{}", usage());
        return Ok(());
    }

    for name in &names {
        let Some(parsed) = parse_image_name(name)? else {
            bail!("name does not match the catalog pattern: {name}");
        };
        println!("{}", serde_json::to_string(&parsed)?);
    }

    Ok(())
}

fn usage() -> &'static str {
    "Usage: match-name NAME [NAME ...]\n\
Parses each NAME against <zone>_<DRY|RAPID|WET>_<degree>_<depth>m.png and\n\
prints the extracted fields as compact JSON, one object per line.\n"
}
