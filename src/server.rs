//! Dedicated server assembly
//!
//! Unlike the client pack, the server directory is persistent and consumes raw mod
//! jars rather than an index:
//!
//! ```text
//! server/
//! ├── server.jar          NeoForge installer
//! ├── run.sh              0755
//! ├── eula.txt
//! ├── server.properties
//! ├── mods/
//! └── config/
//! ```

use crate::fsutil::{merge_copy_dir, write_lines};
use crate::{ModrinthClient, PackConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SERVER_DIR_NAME: &str = "server";
pub const INSTALLER_FILE_NAME: &str = "server.jar";
pub const DEFAULT_MEMORY: &str = "4G";

pub struct ServerPackager<'a> {
    config: &'a PackConfig,
    modrinth: &'a ModrinthClient,
    config_dir: PathBuf,
    output_dir: PathBuf,
    memory: String,
}

impl<'a> ServerPackager<'a> {
    pub fn new(
        config: &'a PackConfig,
        modrinth: &'a ModrinthClient,
        config_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            modrinth,
            config_dir: config_dir.into(),
            output_dir: output_dir.into(),
            memory: DEFAULT_MEMORY.to_string(),
        }
    }

    /// Maximum heap for the launch script, e.g. `4G`
    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = memory.into();
        self
    }

    pub fn server_dir(&self) -> PathBuf {
        self.output_dir.join(SERVER_DIR_NAME)
    }

    pub fn launch_command(&self) -> String {
        format!("java -Xmx{} -jar {}", self.memory, INSTALLER_FILE_NAME)
    }

    pub fn run(&self) -> Result<PathBuf> {
        let server_dir = self.server_dir();
        fs::create_dir_all(&server_dir)?;

        self.modrinth.download_file(
            &self.config.loader_installer_url(),
            &server_dir.join(INSTALLER_FILE_NAME),
        )?;

        let run_script = server_dir.join("run.sh");
        write_lines(&run_script, &[self.launch_command()])?;
        make_executable(&run_script)?;

        write_lines(&server_dir.join("eula.txt"), &["eula=true"])?;
        write_lines(
            &server_dir.join("server.properties"),
            &self.config.server_properties(),
        )?;

        let mods_dir = server_dir.join("mods");
        fs::create_dir_all(&mods_dir)?;

        for entry in &self.config.server_mods() {
            let record = self.modrinth.fetch(&entry.name, &entry.id)?;
            self.modrinth.materialize(&record, &mods_dir)?;
        }

        merge_copy_dir(&self.config_dir, &server_dir.join("config"))?;

        info!("Server files written to \"{}\"", server_dir.display());
        Ok(server_dir)
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
