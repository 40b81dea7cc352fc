//! Modrinth API access and artifact downloads
//!
//! [`ModrinthClient::fetch`] resolves a version id to the first file of that version,
//! and [`ModrinthClient::materialize`] downloads the file into a directory unless it is
//! already there. Everything is blocking and sequential; the first failure aborts.
//!
//! # Examples
//!
//! ```no_run
//! use mekkapack::ModrinthClient;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ModrinthClient::new("https://api.modrinth.com");
//! let record = client.fetch("Jade", "VGRMP69T")?;
//! client.materialize(&record, Path::new("mods"))?;
//! # Ok(())
//! # }
//! ```

use crate::{Error, Result};
use serde::Deserialize;
use sha2::{Digest, Sha512};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The downloadable file of one mod version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModMetadata {
    pub filename: String,
    pub url: String,
    pub size: u64,
    pub sha1: String,
    pub sha512: String,
}

/// Outcome of [`ModrinthClient::materialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialized {
    Downloaded,
    Skipped,
}

pub struct ModrinthClient {
    base_url: String,
    client: reqwest::blocking::Client,
    verify_hashes: bool,
}

impl ModrinthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("mekkapack/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            verify_hashes: false,
        }
    }

    /// Check existing and fresh downloads against the record's sha512
    ///
    /// Off by default: an existing file is trusted by name alone.
    pub fn with_hash_verification(mut self, verify: bool) -> Self {
        self.verify_hashes = verify;
        self
    }

    pub fn version_url(&self, id: &str) -> String {
        format!("{}/v2/version/{}", self.base_url, id)
    }

    /// Fetch version metadata and keep the first listed file
    pub fn fetch(&self, name: &str, id: &str) -> Result<ModMetadata> {
        info!("Fetching metadata for \"{}\" with ID \"{}\"", name, id);

        let url = self.version_url(id);
        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() {
                Error::Other(format!(
                    "Cannot connect to Modrinth at {}\n\
                        Please check your network connection and the API URL.",
                    self.base_url
                ))
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let version: ApiVersion = response.json()?;
        version
            .files
            .into_iter()
            .next()
            .map(ModMetadata::from)
            .ok_or_else(|| Error::EmptyFileList(id.to_string()))
    }

    /// Download `record` into `dest_dir` unless a file with its name already exists
    ///
    /// `dest_dir` must exist. The body is written to a `.part` file and renamed into
    /// place once complete, so an interrupted run never leaves a truncated file under
    /// the final name.
    pub fn materialize(&self, record: &ModMetadata, dest_dir: &Path) -> Result<Materialized> {
        let path = dest_dir.join(&record.filename);

        if path.exists() {
            if !self.verify_hashes {
                debug!("Skipping \"{}\", already present", path.display());
                return Ok(Materialized::Skipped);
            }

            let actual = sha512_file(&path)?;
            if actual.eq_ignore_ascii_case(&record.sha512) {
                debug!("Skipping \"{}\", checksum matches", path.display());
                return Ok(Materialized::Skipped);
            }
            warn!(
                "Checksum mismatch for \"{}\", downloading again",
                path.display()
            );
        }

        self.download_file(&record.url, &path)?;

        if self.verify_hashes {
            let actual = sha512_file(&path)?;
            if !actual.eq_ignore_ascii_case(&record.sha512) {
                return Err(Error::ChecksumMismatch {
                    path,
                    expected: record.sha512.clone(),
                    actual,
                });
            }
        }

        Ok(Materialized::Downloaded)
    }

    /// Download `url` to `dest`, replacing whatever is there
    pub fn download_file(&self, url: &str, dest: &Path) -> Result<()> {
        info!("Downloading \"{}\" to \"{}\"", url, dest.display());

        let mut response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let part = part_path(dest);
        let mut file = File::create(&part)?;
        let written = response
            .copy_to(&mut file)
            .map_err(Error::from)
            .and_then(|_| file.flush().map_err(Error::from));
        if let Err(e) = written {
            drop(file);
            let _ = fs::remove_file(&part);
            return Err(e);
        }
        drop(file);

        fs::rename(&part, dest)?;
        Ok(())
    }
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}

/// Lowercase hex SHA-512 of a file
pub fn sha512_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha512::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

#[derive(Debug, Deserialize)]
struct ApiVersion {
    files: Vec<ApiFile>,
}

#[derive(Debug, Deserialize)]
struct ApiFile {
    filename: String,
    url: String,
    size: u64,
    hashes: ApiHashes,
}

#[derive(Debug, Deserialize)]
struct ApiHashes {
    sha1: String,
    sha512: String,
}

impl From<ApiFile> for ModMetadata {
    fn from(file: ApiFile) -> Self {
        Self {
            filename: file.filename,
            url: file.url,
            size: file.size,
            sha1: file.hashes.sha1,
            sha512: file.hashes.sha512,
        }
    }
}
