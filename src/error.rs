use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialize error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Path error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    #[error("Request to {url} failed with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Version '{0}' has no files\n\n\
             Hint: The Modrinth API returned an empty file list for this version id.\n\
             Check the id in the catalog; it must be a version id, not a project id.")]
    EmptyFileList(String),

    #[error("Checksum mismatch for {}\n  expected sha512: {expected}\n  actual sha512:   {actual}",
            .path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("Key '{key}' not found in {}", .file.display())]
    MissingPatchTarget { file: PathBuf, key: String },

    #[error("{0}")]
    Other(String),
}
