//! `modrinth.index.json` generation
//!
//! The index is the manifest a Modrinth-compatible launcher reads from an `.mrpack`.
//! Field names and nesting follow the launcher's schema exactly; renaming anything here
//! breaks import.
//!
//! # Examples
//!
//! ```
//! use mekkapack::{build_entry, ModMetadata, ModrinthIndex};
//!
//! let mut index = ModrinthIndex::new("Mekka", "0.1.0", "1.21.1", "21.1.218");
//! index.push(build_entry(&ModMetadata {
//!     filename: "foo.jar".to_string(),
//!     url: "http://x/foo.jar".to_string(),
//!     size: 10,
//!     sha1: "a".to_string(),
//!     sha512: "b".to_string(),
//! }));
//!
//! assert_eq!(index.files[0].path, "mods/foo.jar");
//! ```

use crate::{Error, ModMetadata, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Manifest file name at the root of an `.mrpack`
pub const INDEX_FILE_NAME: &str = "modrinth.index.json";

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModrinthIndex {
    pub format_version: u32,
    pub game: String,
    pub version_id: String,
    pub name: String,
    pub dependencies: IndexDependencies,
    pub files: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDependencies {
    pub minecraft: String,
    pub neoforge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Destination relative to the instance root
    pub path: String,
    pub hashes: FileHashes,
    pub env: FileEnv,
    pub downloads: Vec<String>,
    pub file_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileHashes {
    pub sha1: String,
    pub sha512: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEnv {
    pub client: EnvRequirement,
    pub server: EnvRequirement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvRequirement {
    Required,
    Optional,
    Unsupported,
}

impl ModrinthIndex {
    pub fn new(name: &str, version: &str, minecraft_version: &str, neoforge_version: &str) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            game: "minecraft".to_string(),
            version_id: version.to_string(),
            name: name.to_string(),
            dependencies: IndexDependencies {
                minecraft: minecraft_version.to_string(),
                neoforge: neoforge_version.to_string(),
            },
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.files.push(entry);
    }

    /// Pretty-printed JSON with four-space indentation
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(|e| Error::Other(e.to_string()))
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut content = self.to_json()?;
        content.push('\n');
        fs::write(path, content)?;
        Ok(())
    }
}

/// Turn a fetched file record into a manifest entry under `mods/`
pub fn build_entry(record: &ModMetadata) -> ManifestEntry {
    ManifestEntry {
        path: format!("mods/{}", record.filename),
        hashes: FileHashes {
            sha1: record.sha1.clone(),
            sha512: record.sha512.clone(),
        },
        env: FileEnv {
            client: EnvRequirement::Required,
            server: EnvRequirement::Required,
        },
        downloads: vec![record.url.clone()],
        file_size: record.size,
    }
}
