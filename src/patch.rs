//! Shader pack patching
//!
//! Complementary Unbound ships `block.10024=` empty in `shaders/block.properties`.
//! Listing the modded ores there makes the shader treat them like vanilla ores.

use crate::config::ShaderPatchConfig;
use crate::{edit_archive, Error, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::info;

/// Append `ids` to every `key=` line of `properties`
///
/// Ids are space separated; an existing value is kept after them.
/// Returns `None` when no line defines `key`.
pub fn append_block_ids(properties: &str, key: &str, ids: &[String]) -> Option<String> {
    let pattern = format!(r"(?m)^{}=([^\r\n]*)", regex::escape(key));
    let re = Regex::new(&pattern).ok()?;

    if !re.is_match(properties) {
        return None;
    }

    let joined = ids.join(" ");
    let patched = re.replace_all(properties, |caps: &regex::Captures| {
        let existing = &caps[1];
        if existing.trim().is_empty() {
            format!("{}={}", key, joined)
        } else {
            format!("{}={} {}", key, joined, existing.trim_start())
        }
    });

    Some(patched.into_owned())
}

/// Apply the patch to an extracted shader pack rooted at `root`
pub fn patch_extracted_shader(root: &Path, patch: &ShaderPatchConfig) -> Result<()> {
    let file = root.join(&patch.properties_file);
    let content = fs::read_to_string(&file)?;

    let patched = append_block_ids(&content, &patch.key, &patch.block_ids).ok_or_else(|| {
        Error::MissingPatchTarget {
            file: file.clone(),
            key: patch.key.clone(),
        }
    })?;

    fs::write(&file, patched)?;
    Ok(())
}

/// Patch the shader pack ZIP at `archive_path` in place
pub fn patch_shader_archive(archive_path: &Path, patch: &ShaderPatchConfig) -> Result<()> {
    info!(
        "Adding {} block ids to '{}' in \"{}\"",
        patch.block_ids.len(),
        patch.key,
        archive_path.display()
    );

    edit_archive(archive_path, |root| patch_extracted_shader(root, patch))
}
