//! Server command - build the runnable `server/` directory

use anyhow::{Context, Result};
use mekkapack::{ModrinthClient, PackConfig, ServerPackager};
use std::path::Path;

pub fn run(
    config: &PackConfig,
    modrinth: &ModrinthClient,
    config_dir: &Path,
    output_dir: &Path,
    memory: &str,
) -> Result<()> {
    println!(
        "Building {} server (NeoForge {})...",
        config.pack.name, config.loader.neoforge_version
    );

    let server_dir = ServerPackager::new(config, modrinth, config_dir, output_dir)
        .with_memory(memory)
        .run()
        .context("Failed to build the server files")?;

    println!();
    println!("Server files created successfully!");
    println!();
    println!("  Output: {}", server_dir.display());
    println!("  Memory: {}", memory);
    println!();
    println!("To start the server:");
    println!("  cd {} && ./run.sh", server_dir.display());

    Ok(())
}
