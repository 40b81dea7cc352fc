//! Client modpack assembly
//!
//! Produces a single `.mrpack`: `modrinth.index.json` listing every client mod by
//! download URL, plus `overrides/` carrying resource packs, shader packs, `options.txt`
//! and the local `config/` tree. Resource packs and shaders are shipped as files rather
//! than index entries.

use crate::fsutil::{merge_copy_dir, write_lines};
use crate::manifest::INDEX_FILE_NAME;
use crate::patch::patch_shader_archive;
use crate::{build_entry, zip_directory, ModrinthClient, ModrinthIndex, PackConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct ClientPackager<'a> {
    config: &'a PackConfig,
    modrinth: &'a ModrinthClient,
    config_dir: PathBuf,
    output_dir: PathBuf,
}

/// What a client build produced
#[derive(Debug)]
pub struct ClientOutput {
    pub archive_path: PathBuf,
    pub index: ModrinthIndex,
}

impl<'a> ClientPackager<'a> {
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
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(self.config.archive_file_name())
    }

    /// Build the pack in a scratch directory and write the archive to the output dir
    pub fn run(&self) -> Result<ClientOutput> {
        let work = tempfile::TempDir::new()?;

        let index = self.assemble(work.path())?;

        let archive_path = self.archive_path();
        zip_directory(work.path(), &archive_path)?;
        work.close()?;

        info!(
            "Client modpack written to \"{}\" ({} mods)",
            archive_path.display(),
            index.files.len()
        );

        Ok(ClientOutput {
            archive_path,
            index,
        })
    }

    /// Lay out the unpacked `.mrpack` tree under `dir`
    pub fn assemble(&self, dir: &Path) -> Result<ModrinthIndex> {
        let overrides = dir.join("overrides");
        let resourcepacks = overrides.join("resourcepacks");
        let shaderpacks = overrides.join("shaderpacks");
        fs::create_dir_all(&resourcepacks)?;
        fs::create_dir_all(&shaderpacks)?;

        let mut index = ModrinthIndex::new(
            &self.config.pack.name,
            &self.config.pack.version,
            &self.config.pack.minecraft_version,
            &self.config.loader.neoforge_version,
        );

        for entry in &self.config.client_mods() {
            let record = self.modrinth.fetch(&entry.name, &entry.id)?;
            index.push(build_entry(&record));
        }

        for entry in &self.config.catalogs.resource_packs {
            let record = self.modrinth.fetch(&entry.name, &entry.id)?;
            self.modrinth.materialize(&record, &resourcepacks)?;
        }

        for entry in &self.config.catalogs.shaders {
            let record = self.modrinth.fetch(&entry.name, &entry.id)?;
            self.modrinth.materialize(&record, &shaderpacks)?;

            if entry.name == self.config.shader_patch.shader {
                patch_shader_archive(
                    &shaderpacks.join(&record.filename),
                    &self.config.shader_patch,
                )?;
            }
        }

        index.save_to(dir.join(INDEX_FILE_NAME))?;
        write_lines(&overrides.join("options.txt"), &self.config.client.options)?;
        merge_copy_dir(&self.config_dir, &overrides.join("config"))?;

        Ok(index)
    }
}
