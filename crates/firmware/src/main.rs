//! Folder Player - desktop emulator entry point.
//!
//! Plays a directory on the host as if it were the SD card. There is no audio
//! output: a simulated transport counts seconds and holds at the end of each
//! track, which the stall watchdog then turns into the next track.
//!
//! Controls, one per line on stdin:
//!
//! | Key | Action            |
//! |-----|-------------------|
//! | `n` | next              |
//! | `p` | previous          |
//! | `t` | pause / resume    |
//! | `+` | volume up         |
//! | `-` | volume down       |
//! | `m` | cycle policy      |
//! | `]` | next folder       |
//! | `[` | previous folder   |
//! | `q` | quit              |
//!
//! Anything else is handed to the remote channel, e.g. `goto 1 0`.

#![allow(clippy::print_stdout)] // the console is this binary's display

use std::time::Instant as StdInstant;

use anyhow::Context;
use clap::Parser;
use embassy_time::Duration;
use firmware::input::try_send_event;
use firmware::{FixedAmp, Peripherals, Player, PlayerConfig, QueuedInput, StatusDisplay, BUTTON_CHANNEL, REMOTE_SLOT};
use platform::storage_local::LocalDirStorage;
use platform::{AudioTransport, ControlEvent, VolumeLevel};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{NowPlayingState, Screen};

#[derive(Debug, Parser)]
#[command(name = "folder-player", about = "Folder Player desktop emulator")]
struct Args {
    /// Directory used as the media store root
    #[arg(long, env = "MUSIC_PATH")]
    music_path: std::path::PathBuf,

    /// Volume step applied at boot
    #[arg(long, default_value_t = platform::config::VOLUME_DEFAULT)]
    volume: u8,

    /// Stall watchdog sampling interval
    #[arg(long, default_value_t = platform::config::WATCHDOG_SAMPLE_MS)]
    watchdog_ms: u64,

    /// Simulated length of every track; the watchdog needs at least a second
    #[arg(long, default_value_t = 180, value_parser = clap::value_parser!(u32).range(1..))]
    track_secs: u32,

    /// Fixed seed for the shuffle orders (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Sleep between loop passes
    #[arg(long, default_value_t = 20)]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    if !args.music_path.is_dir() {
        anyhow::bail!("{} is not a directory", args.music_path.display());
    }
    println!("{}", platform::config::app_title());

    let mut storage = LocalDirStorage::new(&args.music_path);
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let config = PlayerConfig::default()
        .watchdog_ms(args.watchdog_ms)
        .initial_volume(args.volume);
    let parts = Peripherals {
        audio: SimulatedAudio::new(args.track_secs),
        input: QueuedInput::global(),
        display: ConsoleDisplay::default(),
        amp: FixedAmp,
    };
    let mut player = Player::new(parts, &REMOTE_SLOT, config);
    player
        .boot(&mut storage, &mut rng)
        .await
        .with_context(|| format!("reading {}", args.music_path.display()))?;

    let controls = tokio::spawn(read_controls());
    tokio::select! {
        () = player.run(Duration::from_millis(args.tick_ms)) => {}
        res = controls => res.context("control reader panicked")??,
    }
    Ok(())
}

/// Forward stdin lines to the button channel or the remote slot until `q` or EOF.
async fn read_controls() -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let line = line.trim();
        let event = match line {
            "" => continue,
            "q" => break,
            "n" => ControlEvent::Next,
            "p" => ControlEvent::Previous,
            "t" => ControlEvent::PlayPause,
            "+" => ControlEvent::VolumeUp,
            "-" => ControlEvent::VolumeDown,
            "m" => ControlEvent::CyclePolicy,
            "]" => ControlEvent::NextFolder,
            "[" => ControlEvent::PreviousFolder,
            other => {
                // Rejections are logged by the slot
                let _ = REMOTE_SLOT.post_line(other);
                continue;
            }
        };
        try_send_event(&BUTTON_CHANNEL, event);
    }
    Ok(())
}

// ---- simulated collaborators ----

/// Transport that plays silence for a fixed length per track.
struct SimulatedAudio {
    track_secs: u32,
    started: Option<StdInstant>,
    /// Seconds accumulated before the current run started.
    banked: u64,
    paused: bool,
}

impl SimulatedAudio {
    fn new(track_secs: u32) -> Self {
        Self {
            track_secs,
            started: None,
            banked: 0,
            paused: false,
        }
    }

    fn played(&self) -> u64 {
        let running = self.started.map_or(0, |s| s.elapsed().as_secs());
        self.banked.saturating_add(running)
    }
}

impl AudioTransport for SimulatedAudio {
    type Error = std::convert::Infallible;

    async fn load(&mut self, path: &str) -> Result<(), Self::Error> {
        tracing::debug!(path, "simulated load");
        self.started = Some(StdInstant::now());
        self.banked = 0;
        self.paused = false;
        Ok(())
    }

    async fn pause_resume(&mut self) -> Result<(), Self::Error> {
        if self.paused {
            self.started = Some(StdInstant::now());
        } else {
            self.banked = self.played();
            self.started = None;
        }
        self.paused = !self.paused;
        Ok(())
    }

    async fn set_volume(&mut self, level: VolumeLevel) -> Result<(), Self::Error> {
        tracing::debug!(level = level.get(), "simulated volume");
        Ok(())
    }

    fn elapsed_seconds(&mut self) -> u32 {
        // Holds at the end, which is what the watchdog looks for
        u32::try_from(self.played()).unwrap_or(u32::MAX).min(self.track_secs)
    }

    fn duration_seconds(&mut self) -> u32 {
        self.track_secs
    }
}

/// Prints one status line whenever it changes.
#[derive(Default)]
struct ConsoleDisplay {
    last: String,
}

impl StatusDisplay for ConsoleDisplay {
    fn show(&mut self, screen: Screen, state: &NowPlayingState) {
        let line = match screen.message() {
            Some(message) => message.to_owned(),
            None => format!(
                "{} {} | {} ({}) | {} | {}/{} | {} | {}",
                if state.playing { ">" } else { "||" },
                state.folder_label(),
                state.file_name,
                state.format_tag,
                state.position_label(),
                state.elapsed_label(),
                state.duration_label(),
                state.volume_label(),
                state.policy,
            ),
        };
        if line != self.last {
            println!("{line}");
            self.last = line;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Args, clap::Error> {
        let base = ["folder-player", "--music-path", "/music"];
        Args::try_parse_from(base.iter().chain(extra))
    }

    #[test]
    fn zero_length_tracks_are_rejected() {
        assert!(parse(&["--track-secs", "0"]).is_err());
        assert_eq!(parse(&["--track-secs", "1"]).unwrap().track_secs, 1);
        assert_eq!(parse(&[]).unwrap().track_secs, 180);
    }

    #[tokio::test]
    async fn simulated_track_holds_at_its_end() {
        let mut audio = SimulatedAudio::new(3);
        audio.load("/a.mp3").await.unwrap();
        audio.banked = 10;
        assert_eq!(audio.elapsed_seconds(), 3);
        assert_eq!(audio.duration_seconds(), 3);
    }
}
