//! xtask doc - API docs for the player crates.
//!
//! Private items are included: most of the interesting invariants (shuffle
//! position syncing, the gate cadences) live on private helpers.

use anyhow::Result;
use colored::Colorize;

use crate::steps::{self, Step, PLAYER_CRATES};

fn plan(open: bool) -> Step {
    let mut args = vec!["doc", "--no-deps", "--document-private-items"];
    if open {
        args.push("--open");
    }
    Step::required("Player crate docs", &args).packages(&PLAYER_CRATES)
}

pub fn run(open: bool) -> Result<()> {
    steps::run_all("Building documentation", &[plan(open)])?;
    if !open {
        for name in PLAYER_CRATES {
            println!("   {}", format!("target/doc/{name}/index.html").dimmed());
        }
        println!();
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn documents_only_the_player_crates() {
        let step = plan(false);
        let packages: Vec<&str> = step
            .args
            .windows(2)
            .filter(|w| w[0] == "-p")
            .map(|w| w[1].as_str())
            .collect();
        assert_eq!(packages, PLAYER_CRATES);
        assert!(!step.args.iter().any(|a| a == "--open"));
        assert!(plan(true).args.iter().any(|a| a == "--open"));
    }
}
