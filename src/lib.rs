//! mekkapack - builds the Mekka Minecraft modpack and its dedicated server
//!
//! Every mod is identified by a Modrinth version id. The client side becomes a portable
//! `.mrpack` (index + overrides) that any Modrinth-compatible launcher can import; the
//! server side becomes a `server/` directory with the NeoForge installer, mods, config
//! and a launch script.
//!
//! - Fixed pack definition overridable from TOML
//! - Ordered catalogs so the index is reproducible
//! - Download-or-skip materialization with optional sha512 verification
//! - In-place shader pack patching for modded ore ids
//!
//! # Examples
//!
//! ```no_run
//! use mekkapack::{ClientPackager, ModrinthClient, PackConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackConfig::default();
//! let modrinth = ModrinthClient::new(config.api.base_url.clone());
//!
//! let output = ClientPackager::new(&config, &modrinth, "config", ".").run()?;
//! println!("Wrote {}", output.archive_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`] - Pack definition and TOML overlay
//! - [`catalog`] - Ordered name → version id catalogs
//! - [`modrinth`] - Metadata fetching and artifact downloads
//! - [`manifest`] - `modrinth.index.json` model
//! - [`archive`] - ZIP packing, unpacking and editing
//! - [`patch`] - Shader `block.properties` patch
//! - [`client`] - Client `.mrpack` packager
//! - [`server`] - Dedicated server packager
//! - [`error`] - Error types and result handling

pub mod archive;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod logging;
pub mod manifest;
pub mod modrinth;
pub mod patch;
pub mod server;

pub use archive::{edit_archive, extract_archive, zip_directory};
pub use catalog::{Catalog, CatalogEntry};
pub use client::{ClientOutput, ClientPackager};
pub use config::PackConfig;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use manifest::{build_entry, ManifestEntry, ModrinthIndex};
pub use modrinth::{Materialized, ModMetadata, ModrinthClient};
pub use server::{ServerPackager, DEFAULT_MEMORY};
