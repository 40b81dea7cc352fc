//! ZIP packing, unpacking and in-place editing
//!
//! Both `.mrpack` files and shader packs are plain ZIP containers. [`edit_archive`]
//! unpacks one into a scratch directory, lets the caller change files, and packs it
//! back to the same path.

use crate::Result;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

/// Pack the contents of `src_dir` into a ZIP at `archive_path`
///
/// Entry names are relative to `src_dir` with `/` separators, in sorted order, and
/// include explicit directory entries. An existing file at `archive_path` is replaced.
/// The archive is written next to its destination and renamed into place, so
/// `archive_path` may live inside `src_dir`'s parent but not inside `src_dir` itself.
pub fn zip_directory(src_dir: &Path, archive_path: &Path) -> Result<()> {
    info!(
        "Archiving the \"{}\" folder to \"{}\"",
        src_dir.display(),
        archive_path.display()
    );

    if let Some(parent) = archive_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_name = archive_path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = archive_path.with_file_name(tmp_name);

    if let Err(e) = write_zip(src_dir, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, archive_path)?;
    Ok(())
}

fn write_zip(src_dir: &Path, out: &Path) -> Result<()> {
    let file = File::create(out)?;
    let mut zip = zip::ZipWriter::new(file);

    let dir_opts = SimpleFileOptions::default();
    let file_opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(src_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let name = path
            .strip_prefix(src_dir)?
            .to_string_lossy()
            .replace('\\', "/");

        if entry.file_type().is_dir() {
            zip.add_directory(name, dir_opts)?;
        } else {
            zip.start_file(name, file_opts)?;
            let mut f = File::open(path)?;
            io::copy(&mut f, &mut zip)?;
        }
    }

    zip.finish()?;
    Ok(())
}

/// Unpack a ZIP into `dest_dir`, skipping entries that would escape it
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let Some(relative) = entry.enclosed_name() else {
            continue;
        };
        let output_path = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
            continue;
        }

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut outfile = File::create(&output_path)?;
        io::copy(&mut entry, &mut outfile)?;
    }

    Ok(())
}

/// Rewrite the ZIP at `archive_path` after applying `mutate` to its extracted tree
///
/// The scratch directory is removed whether `mutate` or re-packing fails or not.
pub fn edit_archive<F>(archive_path: &Path, mutate: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    info!("Editing archive \"{}\"", archive_path.display());

    let scratch = tempfile::TempDir::new()?;
    extract_archive(archive_path, scratch.path())?;
    mutate(scratch.path())?;
    zip_directory(scratch.path(), archive_path)?;

    scratch.close()?;
    Ok(())
}
