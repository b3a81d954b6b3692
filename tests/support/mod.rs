use anyhow::{Context, Result, bail};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Create an empty fixture image at `root/zone/sub/name`, building the
/// intermediate directories as needed.
pub fn place_image(root: &Path, zone: &str, sub: &str, name: &str) -> PathBuf {
    let dir = root.join(zone).join(sub);
    fs::create_dir_all(&dir).expect("fixture directories");
    let path = dir.join(name);
    File::create(&path).expect("fixture image");
    path
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {cmd:?}"))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
