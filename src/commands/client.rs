//! Client command - build the `.mrpack` distributable

use anyhow::{Context, Result};
use mekkapack::{ClientPackager, ModrinthClient, PackConfig};
use std::path::Path;

pub fn run(
    config: &PackConfig,
    modrinth: &ModrinthClient,
    config_dir: &Path,
    output_dir: &Path,
) -> Result<()> {
    println!(
        "Building {} v{} client modpack...",
        config.pack.name, config.pack.version
    );

    let output = ClientPackager::new(config, modrinth, config_dir, output_dir)
        .run()
        .context("Failed to build the client modpack")?;

    println!();
    println!("Client modpack created successfully!");
    println!();
    println!("  Output: {}", output.archive_path.display());
    println!("  Mods in index: {}", output.index.files.len());
    println!(
        "  Minecraft {} / NeoForge {}",
        output.index.dependencies.minecraft, output.index.dependencies.neoforge
    );

    Ok(())
}
