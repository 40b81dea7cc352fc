use clap::Parser;
use mekkapack::{init_logging, ModrinthClient, PackConfig, DEFAULT_MEMORY};
use std::path::PathBuf;

mod commands;

/// Server and client generator for the Mekka modpack
#[derive(Parser)]
#[command(name = "mekkapack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Generate the client modpack
    #[arg(long)]
    client: bool,

    /// Generate the server files
    #[arg(long)]
    server: bool,

    /// Maximum memory allocation for the server
    #[arg(long, default_value = DEFAULT_MEMORY)]
    memory: String,

    /// TOML file overriding the built-in pack definition
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Local config tree copied into both outputs
    #[arg(long, value_name = "DIR", default_value = "config")]
    config_dir: PathBuf,

    /// Directory receiving the .mrpack and server/
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Check downloads against their sha512 and repair mismatching files
    #[arg(long)]
    verify_hashes: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.client && !cli.server {
        return Ok(());
    }

    let config = PackConfig::load(cli.config.as_deref())?;
    let modrinth =
        ModrinthClient::new(config.api.base_url.clone()).with_hash_verification(cli.verify_hashes);

    if cli.client {
        commands::client::run(&config, &modrinth, &cli.config_dir, &cli.output)?;
    }

    if cli.server {
        commands::server::run(
            &config,
            &modrinth,
            &cli.config_dir,
            &cli.output,
            &cli.memory,
        )?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
