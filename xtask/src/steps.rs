//! Shared runner for the cargo invocations behind `check`, `test` and `doc`.
//!
//! Each subcommand is a table of [`Step`]s. A step either gates the run
//! (`required`) or only reports, so clippy and rustfmt findings show up
//! without hiding the result of the build steps after them.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Crates that make up the player, in layering order.
pub const PLAYER_CRATES: [&str; 5] = ["platform", "library", "playback", "ui", "firmware"];

/// One cargo invocation.
pub struct Step {
    pub label: String,
    pub args: Vec<String>,
    pub required: bool,
}

impl Step {
    pub fn required(label: impl Into<String>, args: &[&str]) -> Self {
        Self {
            label: label.into(),
            args: args.iter().map(ToString::to_string).collect(),
            required: true,
        }
    }

    pub fn advisory(label: impl Into<String>, args: &[&str]) -> Self {
        Self {
            required: false,
            ..Self::required(label, args)
        }
    }

    /// Append `-p <crate>` for each crate.
    #[must_use]
    pub fn packages(mut self, crates: &[&str]) -> Self {
        for name in crates {
            self.args.push("-p".into());
            self.args.push((*name).into());
        }
        self
    }
}

/// Run every step in order; the first failing required step aborts.
pub fn run_all(title: &str, steps: &[Step]) -> Result<()> {
    println!();
    println!("{}", title.cyan().bold());
    println!();

    let total = Instant::now();
    let mut warnings = 0usize;
    for step in steps {
        if !run_one(step)? {
            warnings = warnings.saturating_add(1);
        }
    }

    let done = format!("Done in {:.2}s", total.elapsed().as_secs_f64());
    if warnings == 0 {
        println!("{}", done.green().bold());
    } else {
        println!("{}", format!("{done} ({warnings} advisory step(s) reported problems)").yellow().bold());
    }
    println!();
    Ok(())
}

/// `Ok(false)` for an advisory step that failed.
fn run_one(step: &Step) -> Result<bool> {
    println!("{}", format!("  {}...", step.label).cyan());
    let start = Instant::now();
    let output = Command::new("cargo")
        .args(&step.args)
        .output()
        .with_context(|| format!("spawning cargo {}", step.args.join(" ")))?;

    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        println!(
            "{}",
            format!(
                "  ✓ {} {}in {:.2}s",
                step.label,
                test_summary(&stdout).map(|s| format!("({s}) ")).unwrap_or_default(),
                start.elapsed().as_secs_f64()
            )
            .green()
        );
        return Ok(true);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    if step.required {
        eprintln!("{}", format!("  ✗ {} failed", step.label).red().bold());
        for line in stdout.lines().chain(stderr.lines()) {
            eprintln!("    {line}");
        }
        anyhow::bail!("{} failed", step.label);
    }
    eprintln!("{}", format!("  ⚠ {} reported problems", step.label).yellow().bold());
    for line in stderr.lines().take(40) {
        eprintln!("    {line}");
    }
    Ok(false)
}

/// Passed/failed counts summed over every `test result:` line.
pub fn test_summary(output: &str) -> Option<String> {
    let mut passed = 0u64;
    let mut failed = 0u64;
    let mut seen = false;
    for line in output.lines().filter_map(|l| l.split("test result:").nth(1)) {
        seen = true;
        for part in line.split(';') {
            let mut words = part.split_whitespace().rev();
            let (Some(kind), Some(count)) = (words.next(), words.next()) else {
                continue;
            };
            let Ok(count) = count.parse::<u64>() else {
                continue;
            };
            match kind {
                "passed" => passed = passed.saturating_add(count),
                "failed" => failed = failed.saturating_add(count),
                _ => {}
            }
        }
    }
    seen.then(|| format!("{passed} passed, {failed} failed"))
}
