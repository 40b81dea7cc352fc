//! Small filesystem helpers shared by the packagers

use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// Recursively copy `src` into `dest`, overwriting files that already exist
///
/// Files in `dest` that have no counterpart in `src` are left alone.
pub fn merge_copy_dir(src: &Path, dest: &Path) -> Result<()> {
    info!("Copying \"{}\" into \"{}\"", src.display(), dest.display());

    if !src.is_dir() {
        return Err(Error::Other(format!(
            "Config directory not found: {}",
            src.display()
        )));
    }

    fs::create_dir_all(dest)?;

    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry?;
        let target = dest.join(entry.path().strip_prefix(src)?);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Write `lines` joined by newlines, with a trailing newline
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let mut content = lines
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}
