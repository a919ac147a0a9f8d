// Desktop/tooling crate - unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod check;
mod dev;
mod doc;
mod scan_library;
mod steps;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Folder Player development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the desktop emulator against a local music folder
    Dev {
        /// Local music directory - passed as MUSIC_PATH to the emulator.
        #[arg(long)]
        music_path: Option<std::path::PathBuf>,
        /// Release build
        #[arg(short, long)]
        release: bool,
    },
    /// Check the emulator build, the no_std player crates, clippy and formatting
    Check,
    /// Run unit tests per crate, then each integration target by name
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Document the player crates
    Doc {
        /// Open documentation in browser
        #[arg(long)]
        open: bool,
    },
    /// Build the catalog for a local folder and print it
    ScanLibrary {
        /// Directory laid out like the player's card: root files plus one folder level
        #[arg(long)]
        music_dir: std::path::PathBuf,
        /// Seed for the shuffle orders
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the per-folder and global shuffle orders
        #[arg(long)]
        shuffle: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dev {
            music_path,
            release,
        } => dev::run(music_path.as_deref(), release),
        Commands::Check => check::run(),
        Commands::Test { unit, integration } => test::run(unit, integration),
        Commands::Doc { open } => doc::run(open),
        Commands::ScanLibrary {
            music_dir,
            seed,
            shuffle,
        } => scan_library::run(&music_dir, seed, shuffle),
    }
}
