//! xtask check - everything that must hold before a change lands.
//!
//! The engine crates also have to build without `std` for the player's
//! Cortex-M target, so they are checked for it explicitly; the host build
//! would happily pull `std` in through a dev-dependency.

use anyhow::Result;

use crate::steps::{self, Step, PLAYER_CRATES};

/// Bare-metal target the player firmware ships on.
const EMBEDDED_TARGET: &str = "thumbv7em-none-eabihf";

fn plan() -> Vec<Step> {
    vec![
        Step::required(
            "Emulator build",
            &["check", "-p", "firmware", "--features", "emulator", "--all-targets"],
        ),
        Step::required(
            format!("Engine crates on {EMBEDDED_TARGET} (no_std)"),
            &["check", "--lib", "--no-default-features", "--target", EMBEDDED_TARGET],
        )
        .packages(&PLAYER_CRATES),
        Step::advisory("Clippy", &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"]),
        Step::advisory("Formatting", &["fmt", "--all", "--check"]),
    ]
}

pub fn run() -> Result<()> {
    steps::run_all("Checking the workspace", &plan())
}
