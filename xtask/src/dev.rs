//! xtask dev - run the desktop emulator.
//!
//! Builds and runs `folder-player` with the `emulator` feature, wiring stdin
//! through so the single-key controls work from this terminal. The music
//! directory comes from `--music-path` or an already exported `MUSIC_PATH`.

use anyhow::{Context, Result};
use colored::Colorize;
use platform::config;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

pub fn run(music_path: Option<&Path>, release: bool) -> Result<()> {
    clear_screen();
    print_banner();

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "-p", "firmware", "--bin", "folder-player", "--features", "emulator"]);
    if release {
        cmd.arg("--release");
    }
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    match music_path {
        Some(path) => {
            cmd.env("MUSIC_PATH", path);
        }
        None if std::env::var_os("MUSIC_PATH").is_none() => {
            anyhow::bail!("no music directory: pass --music-path or set MUSIC_PATH");
        }
        None => {}
    }

    // Forward RUST_LOG to the child process, defaulting to "info" so that
    // tracing::info!() calls inside the emulator are always visible.
    if std::env::var("RUST_LOG").is_err() {
        cmd.env("RUST_LOG", "info");
    }

    println!("{}", "Keys: n p t + - m ] [ q, or a remote line such as `goto 1 0`".dimmed());
    println!();

    let start = Instant::now();
    let status = cmd.status().context("Failed to run cargo")?;
    if !status.success() {
        anyhow::bail!("Emulator exited with {status}");
    }

    println!();
    println!(
        "{}",
        format!("Session ended after {:.1}s", start.elapsed().as_secs_f64()).green()
    );
    Ok(())
}

fn clear_screen() {
    // ANSI escape code to clear screen and move cursor to top-left
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush().ok();
}

fn print_banner() {
    let banner_text = format!("     {} - Development Mode       ", config::APP_NAME);
    println!("{}", "═════════════════════════════════════════════".cyan());
    println!("{}", banner_text.cyan().bold());
    println!("{}", "═════════════════════════════════════════════".cyan());
    println!();
}
