use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use codenames_duet::config::AppConfig;
use codenames_duet::export::BoardExporter;
use codenames_duet::game::{generate_boards, generate_boards_with, Tile};

/// Generate a pair of complementary duet key boards.
#[derive(Parser)]
#[command(name = "codenames-duet", about = "Generate complementary duet key boards")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board size (must be a perfect square)
    #[arg(long)]
    size: Option<usize>,

    /// Override output directory
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Seed the random source for reproducible boards
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        config.board.size = size;
    }
    if let Some(out_dir) = cli.out_dir {
        config.export.out_dir = out_dir;
    }
    config.validate()?;

    let boards = match cli.seed {
        Some(seed) => generate_boards_with(&mut StdRng::seed_from_u64(seed), &config.board)?,
        None => generate_boards(&config.board)?,
    };

    let exporter = BoardExporter::new(config.export);
    let (one, two) = exporter
        .export_pair(&boards)
        .context("writing board files")?;

    println!(
        "Wrote {} ({} green, {} black)",
        one.display(),
        boards.player_one.count(Tile::Green),
        boards.player_one.count(Tile::Black),
    );
    println!(
        "Wrote {} ({} green, {} black)",
        two.display(),
        boards.player_two.count(Tile::Green),
        boards.player_two.count(Tile::Black),
    );
    Ok(())
}
