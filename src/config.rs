//! Modpack configuration
//!
//! Every fixed value the build depends on (catalogs, versions, option lines) lives in
//! [`PackConfig`]. [`PackConfig::default`] describes the Mekka pack; an optional TOML
//! file can override any section, which is also how tests point the build at a stub API.
//!
//! # Examples
//!
//! ```no_run
//! use mekkapack::PackConfig;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackConfig::load(Some(Path::new("mekka.toml")))?;
//!
//! println!("Archive: {}", config.archive_file_name());
//! println!("Installer: {}", config.loader_installer_url());
//! # Ok(())
//! # }
//! ```

use crate::{Catalog, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides `api.base_url`
pub const API_URL_ENV: &str = "MEKKAPACK_API_URL";

/// Environment variable that overrides `loader.maven_url`
pub const MAVEN_URL_ENV: &str = "MEKKAPACK_MAVEN_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackConfig {
    #[serde(default)]
    pub pack: PackInfo,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub catalogs: CatalogConfig,

    #[serde(default)]
    pub shader_patch: ShaderPatchConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackInfo {
    pub name: String,
    pub version: String,
    pub minecraft_version: String,
}

impl Default for PackInfo {
    fn default() -> Self {
        Self {
            name: "Mekka".to_string(),
            version: "0.1.0".to_string(),
            minecraft_version: "1.21.1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Modrinth API root, without the `/v2` suffix
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.modrinth.com".to_string(),
        }
    }
}

/// NeoForge loader settings
///
/// The same version feeds both the manifest dependency map and the installer URL,
/// so client and server always agree on the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub neoforge_version: String,
    pub maven_url: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            neoforge_version: "21.1.218".to_string(),
            maven_url: "https://maven.neoforged.net/releases".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Mods installed on both sides
    pub shared: Catalog,
    pub client_only: Catalog,
    pub server_only: Catalog,
    pub resource_packs: Catalog,
    pub shaders: Catalog,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            shared: Catalog::from_pairs(SHARED_MODS),
            client_only: Catalog::from_pairs(CLIENT_ONLY_MODS),
            server_only: Catalog::from_pairs(SERVER_ONLY_MODS),
            resource_packs: Catalog::from_pairs(RESOURCE_PACKS),
            shaders: Catalog::from_pairs(SHADERS),
        }
    }
}

/// Patch applied to one shader pack's `shaders/block.properties`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderPatchConfig {
    /// Display name of the shader that receives the patch
    pub shader: String,
    pub properties_file: String,
    pub key: String,
    pub block_ids: Vec<String>,
}

impl Default for ShaderPatchConfig {
    fn default() -> Self {
        Self {
            shader: "Complementary Shaders - Unbound".to_string(),
            properties_file: "shaders/block.properties".to_string(),
            key: "block.10024".to_string(),
            block_ids: MODDED_ORES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// `key:value` lines for `overrides/options.txt`
    pub options: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            options: vec![
                "fullscreen:true".to_string(),
                "guiScale:2".to_string(),
                "renderDistance:8".to_string(),
                "simulationDistance:8".to_string(),
                r#"resourcePacks:["vanilla","fabric","bountifulfares:vanilla_item_override","file/Fast Better Grass.zip"]"#
                    .to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `key=value` lines for `server.properties`; `{name}` expands to the pack name
    pub properties: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            properties: vec![
                "motd=Welcome to the {name} Neoforge Server!".to_string(),
                "view-distance=8".to_string(),
                "simulation-distance=8".to_string(),
                "gamemode=survival".to_string(),
            ],
        }
    }
}

impl PackConfig {
    /// Load configuration
    ///
    /// With no path the built-in pack is used. A given path must exist; sections present
    /// in the file replace the defaults field by field.
    ///
    /// Environment variable overrides:
    /// - `MEKKAPACK_API_URL`: Overrides `api.base_url`
    /// - `MEKKAPACK_MAVEN_URL`: Overrides `loader.maven_url`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    Error::Other(format!(
                        "Failed to read config file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                toml::from_str(&content)?
            }
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.api.base_url = url;
            }
        }
        if let Ok(url) = std::env::var(MAVEN_URL_ENV) {
            if !url.is_empty() {
                config.loader.maven_url = url;
            }
        }

        Ok(config)
    }

    /// Mods listed in the client manifest (client-only first, then shared)
    pub fn client_mods(&self) -> Catalog {
        Catalog::merge(&self.catalogs.client_only, &self.catalogs.shared)
    }

    /// Mods downloaded into `server/mods` (server-only first, then shared)
    pub fn server_mods(&self) -> Catalog {
        Catalog::merge(&self.catalogs.server_only, &self.catalogs.shared)
    }

    /// File name of the client archive, e.g. `mekka_MC1.21.1_v0.1.0_client.mrpack`
    pub fn archive_file_name(&self) -> String {
        format!(
            "{}_MC{}_v{}_client.mrpack",
            self.pack.name.to_lowercase().replace(' ', "_"),
            self.pack.minecraft_version,
            self.pack.version
        )
    }

    pub fn loader_installer_url(&self) -> String {
        let version = &self.loader.neoforge_version;
        format!(
            "{}/net/neoforged/neoforge/{}/neoforge-{}-installer.jar",
            self.loader.maven_url.trim_end_matches('/'),
            version,
            version
        )
    }

    /// `server.properties` lines with the pack name substituted
    pub fn server_properties(&self) -> Vec<String> {
        self.server
            .properties
            .iter()
            .map(|line| line.replace("{name}", &self.pack.name))
            .collect()
    }
}

const SHARED_MODS: &[(&str, &str)] = &[
    ("Xaero's Minimap", "puXrtfcK"),
    ("Xaero's World Map", "xUpTkg0V"),
    ("AppleSkin", "kztxpjAA"),
    ("TerraBlender", "6e8GCrLb"),
    ("Biomes O' Plenty", "8vIRXPpR"),
    ("GlitchCore", "8wmCpbQ2"),
    ("Jade", "VGRMP69T"),
    ("Jade Addons", "Z9s9lM56"),
    ("EMI", "ouSj7NfF"),
    ("Artifacts", "bYbUZqGA"),
    ("Lithium", "G5SDYehn"),
    ("Tree Harvester", "OtzwmSlR"),
    ("Collective", "VTg6femX"),
    ("Veinminer", "jEnnLun7"),
    ("Distant Horizons", "bLPLghy9"),
    ("Mekanism", "D32JUF51"),
    ("Mekanism Generators", "bPzSK3o5"),
    ("Mekanism Tools", "KiWtMI2k"),
    ("Mekanism Additions", "wfPjzfo0"),
    ("Farmer's Delight", "opCbq7uB"),
    ("Storage Drawers", "px0CCB06"),
    ("GraveStone Mod", "AZm51eX1"),
    ("RightClickHarvest", "fVhkJu1j"),
    ("Sophisticated Backpacks", "ovVp31Ci"),
    ("FerriteCore", "CnpoQxCx"),
    ("YUNG's API", "ZB22DE9q"),
    ("YUNG's Better Nether Fortresses", "iopJiJQp"),
    ("YUNG's Better Ocean Monuments", "yFjEcj2g"),
    ("YUNG's Better Dungeons", "D6aZn0Em"),
    ("YUNG's Better Mineshafts", "Go3nbneL"),
    ("YUNG's Better Jungle Temples", "P00i2hJn"),
    ("YUNG's Better End Island", "I52NZ1qK"),
    ("YUNG's Better Strongholds", "8U0dIfSM"),
    ("YUNG's Better Desert Temples", "GQ9iNWkI"),
    ("YUNG's Bridges", "urkCzBf6"),
    ("YUNG's Extras", "N2EpMhR7"),
    ("Architectury API", "ZxYGwlk0"),
    ("Cloth Config API", "izKINKFg"),
    ("JamLib", "8Ph8BKRh"),
    ("Sophisticated Core", "BteMlDq5"),
    ("ModernFix", "8Be8uJW6"),
    ("Clumps", "jo7lDoK4"),
    ("Applied Energistics 2", "kfyIqgJ6"),
    ("GuideMe", "ILW6vM7o"),
    ("Sinytra Connector", "YCMXHxwl"),
    ("Forgified Fabric API", "tIUhtT2C"),
    ("Accessories", "CtRim6mz"),
    ("owo", "NMCHU6DZ"),
    ("ChoiceTheorem's Overhauled Village", "z24vsFwz"),
    ("Lithostitched", "HsoCbRc0"),
    ("Nature's Compass", "AqEmYPpi"),
    ("Explorer's Compass", "EpWAw9bz"),
    ("ME Requester", "kkJqmO8M"),
    ("Waystones", "f4A1aY3t"),
    ("Balm", "Yoii3Xj6"),
];

const SERVER_ONLY_MODS: &[(&str, &str)] = &[("Chunky", "LuFhm4eU")];

const CLIENT_ONLY_MODS: &[(&str, &str)] = &[
    ("Sodium", "Pb3OXVqC"),
    ("Iris", "t3ruzodq"),
    ("Entity Culling", "DwB2BGbW"),
    ("Better Advancements", "FjTYILOi"),
    ("BetterF3", "maXNB1dn"),
    ("ImmediatelyFast", "7TFPpGUU"),
    ("Continuity", "eXGUs5sy"),
    ("Mouse Tweaks", "9I21YYxf"),
];

const RESOURCE_PACKS: &[(&str, &str)] = &[("Fast Better Grass", "xteFNcow")];

const SHADERS: &[(&str, &str)] = &[
    ("BSL Shaders", "3WGx0wKu"),
    ("Complementary Shaders - Unbound", "LXrX6oqm"),
    ("Complementary Shaders - Reimagined", "OfRF7dTR"),
];

const MODDED_ORES: &[&str] = &[
    "mekanism:lead_ore",
    "mekanism:deepslate_lead_ore",
    "mekanism:fluorite_ore",
    "mekanism:deepslate_fluorite_ore",
    "mekanism:uranium_ore",
    "mekanism:deepslate_uranium_ore",
    "mekanism:osmium_ore",
    "mekanism:deepslate_osmium_ore",
    "mekanism:tin_ore",
    "mekanism:deepslate_tin_ore",
];
