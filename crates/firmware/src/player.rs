//! The player control loop.
//!
//! [`Player`] ties the pieces together: it builds the catalog once at boot,
//! then each [`Player::tick`] runs whichever of the three gated concerns is
//! due:
//!
//! ```text
//! control gate  → arbitrator → navigation / transport / volume → audio
//! watchdog gate → elapsed sample → advance on stall            → audio
//! display gate  → view model refresh                           → display
//! ```
//!
//! Nothing in a tick waits on anything else; collaborator calls are issued
//! and their effects are observed on later ticks.

use embassy_time::{Duration, Instant, Timer};
use library::{Catalog, CatalogError, TrackRef};
use platform::{AudioTransport, ControlEvent, InputDevice, Storage, VolumeLevel};
use playback::{NavigationCursor, Sample, StallWatchdog, Transition, Transport, TransportState, VolumeControl};
use rand::Rng;
use ui::{NowPlayingState, Screen};

use crate::amp::AmpControl;
use crate::arbitrator::EventArbitrator;
use crate::config::PlayerConfig;
use crate::display::StatusDisplay;
use crate::gate::IntervalGate;
use crate::remote::{Command, RemoteSlot};

/// Error returned by [`Player::boot`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    /// The store could not be read; the player is halted on the error screen.
    #[error("boot failed: {0}")]
    Storage(#[from] CatalogError),
}

/// The hardware (or emulated) collaborators a [`Player`] drives.
#[derive(Debug)]
pub struct Peripherals<A, I, D, M> {
    /// Decode/output engine.
    pub audio: A,
    /// Local buttons.
    pub input: I,
    /// Status display.
    pub display: D,
    /// Output amplifier.
    pub amp: M,
}

/// Control engine state plus its collaborators.
pub struct Player<'a, A, I, D, M> {
    parts: Peripherals<A, I, D, M>,
    remote: &'a RemoteSlot,
    arbitrator: EventArbitrator,
    catalog: Catalog,
    cursor: NavigationCursor,
    transport: Transport,
    watchdog: StallWatchdog,
    volume: VolumeControl,
    view: NowPlayingState,
    screen: Screen,
    control_gate: IntervalGate,
    watchdog_gate: IntervalGate,
    display_gate: IntervalGate,
}

impl<'a, A, I, D, M> Player<'a, A, I, D, M>
where
    A: AudioTransport,
    I: InputDevice,
    D: StatusDisplay,
    M: AmpControl,
{
    /// Create a player with an empty catalog. Call [`Player::boot`] next.
    pub fn new(parts: Peripherals<A, I, D, M>, remote: &'a RemoteSlot, config: PlayerConfig) -> Self {
        let catalog = Catalog::empty();
        let cursor = NavigationCursor::new(&catalog);
        let mut view = NowPlayingState::default();
        view.set_volume(config.initial_volume.get());
        Self {
            parts,
            remote,
            arbitrator: EventArbitrator::new(config.remote_enabled),
            catalog,
            cursor,
            transport: Transport::new(),
            watchdog: StallWatchdog::new(),
            volume: VolumeControl::new(config.initial_volume),
            view,
            screen: Screen::Booting,
            control_gate: IntervalGate::new(config.control_poll),
            watchdog_gate: IntervalGate::new(config.watchdog_sample),
            display_gate: IntervalGate::new(config.display_refresh),
        }
    }

    /// Build the catalog and start the first playable track.
    ///
    /// An empty store is not an error: the player shows [`Screen::NoMedia`]
    /// and every later control is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BootError::Storage`] when the store root cannot be opened.
    /// The player is then halted on [`Screen::StorageError`].
    pub async fn boot<S, R>(&mut self, storage: &mut S, rng: &mut R) -> Result<(), BootError>
    where
        S: Storage,
        R: Rng + ?Sized,
    {
        self.screen = Screen::Booting;
        self.parts.display.show(self.screen, &self.view);

        let catalog = match library::build(storage, rng).await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "catalog build failed, halting");
                self.transport.halt();
                self.screen = Screen::StorageError;
                self.parts.display.show(self.screen, &self.view);
                return Err(e.into());
            }
        };
        self.cursor = NavigationCursor::new(&catalog);
        self.catalog = catalog;

        self.apply_volume(self.volume.level()).await;

        if self.catalog.is_empty() {
            tracing::warn!("no playable media");
            self.screen = Screen::NoMedia;
            self.parts.display.show(self.screen, &self.view);
            return Ok(());
        }

        let first = self.cursor.first(&self.catalog);
        self.follow(first).await;
        self.screen = Screen::NowPlaying;
        self.parts.display.show(self.screen, &self.view);
        Ok(())
    }

    /// One pass of the cooperative loop at time `now`.
    pub async fn tick(&mut self, now: Instant) {
        if !self.screen.is_terminal() {
            if self.control_gate.ready(now) {
                let cycle = self.arbitrator.poll(&mut self.parts.input, self.remote);
                for command in cycle.commands() {
                    self.apply(command).await;
                }
            }

            if self.watchdog_gate.ready(now) && self.transport.is_playing() {
                let elapsed = self.parts.audio.elapsed_seconds();
                if self.watchdog.sample(elapsed) == Sample::Stalled {
                    let next = self.cursor.advance(&self.catalog);
                    self.follow(next).await;
                }
            }
        }

        if self.display_gate.ready(now) {
            self.refresh_display();
        }
    }

    /// Tick forever, sleeping `period` between passes. Never returns.
    pub async fn run(&mut self, period: Duration) {
        loop {
            self.tick(Instant::now()).await;
            Timer::after(period).await;
        }
    }

    /// Apply one command, as the arbitrator would.
    pub async fn apply(&mut self, command: Command) {
        tracing::debug!(?command, "apply");
        match command {
            Command::Control(ControlEvent::Next) => {
                let t = self.cursor.advance(&self.catalog);
                self.follow(t).await;
            }
            Command::Control(ControlEvent::Previous) => {
                let t = self.cursor.retreat(&self.catalog);
                self.follow(t).await;
            }
            Command::Control(ControlEvent::NextFolder) => {
                let t = self.cursor.next_folder(&self.catalog);
                self.follow(t).await;
            }
            Command::Control(ControlEvent::PreviousFolder) => {
                let t = self.cursor.previous_folder(&self.catalog);
                self.follow(t).await;
            }
            Command::Control(ControlEvent::PlayPause) => self.toggle_pause().await,
            Command::Control(ControlEvent::VolumeUp) => {
                let level = self.volume.up();
                self.apply_volume(level).await;
            }
            Command::Control(ControlEvent::VolumeDown) => {
                let level = self.volume.down();
                self.apply_volume(level).await;
            }
            Command::Control(ControlEvent::CyclePolicy) => {
                let policy = self.cursor.cycle_policy();
                self.view.set_policy(policy.label());
            }
            Command::JumpTo { folder, file } => match self.cursor.jump_to(&self.catalog, folder, file) {
                Ok(t) => self.follow(t).await,
                Err(e) => tracing::warn!(error = %e, "jump rejected"),
            },
        }
    }

    async fn follow(&mut self, transition: Transition) {
        if let Some(at) = transition.track() {
            self.load(at).await;
        }
    }

    /// Mute, issue the load, unmute, then update the bookkeeping.
    async fn load(&mut self, at: TrackRef) {
        let Some(folder) = self.catalog.folder(at.folder) else {
            return;
        };
        let Some(entry) = folder.file(at.file) else {
            return;
        };
        tracing::info!(folder = at.folder, file = at.file, path = %entry.path, "load");

        if let Err(e) = self.parts.amp.disable().await {
            tracing::warn!(error = ?e, "amplifier disable failed");
        }
        if let Err(e) = self.parts.audio.load(&entry.path).await {
            // Outcome shows up through the watchdog
            tracing::warn!(error = ?e, path = %entry.path, "load request failed");
        }
        if let Err(e) = self.parts.amp.enable().await {
            tracing::warn!(error = ?e, "amplifier enable failed");
        }

        self.transport.loaded();
        self.watchdog.reset();
        self.view.set_track(
            folder.display_name(),
            &entry.name,
            entry.format.tag(),
            at.file,
            folder.file_count(),
        );
        self.view.set_playing(true);
    }

    async fn toggle_pause(&mut self) {
        match self.transport.toggle() {
            Ok(state) => {
                if let Err(e) = self.parts.audio.pause_resume().await {
                    tracing::warn!(error = ?e, "pause/resume failed");
                }
                self.watchdog.reset();
                self.view.set_playing(state == TransportState::Playing);
            }
            Err(e) => tracing::debug!(error = %e, "pause ignored"),
        }
    }

    async fn apply_volume(&mut self, level: VolumeLevel) {
        if let Err(e) = self.parts.audio.set_volume(level).await {
            tracing::warn!(error = ?e, "set volume failed");
        }
        self.view.set_volume(level.get());
    }

    fn refresh_display(&mut self) {
        if self.screen == Screen::NowPlaying {
            let elapsed = self.parts.audio.elapsed_seconds();
            let duration = self.parts.audio.duration_seconds();
            self.view.set_times(elapsed, duration);
            self.view.set_playing(self.transport.is_playing());
            self.view.refresh_tick();
        }
        self.parts.display.show(self.screen, &self.view);
    }

    // ---- read-only views ----

    /// The catalog built at boot.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current navigation state.
    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    /// Screen last shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Transport bookkeeping.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Current volume step.
    pub fn volume(&self) -> VolumeLevel {
        self.volume.level()
    }

    /// Now-playing view model.
    pub fn view(&self) -> &NowPlayingState {
        &self.view
    }

    /// Collaborators.
    pub fn parts(&self) -> &Peripherals<A, I, D, M> {
        &self.parts
    }

    /// Collaborators, mutably (test harnesses poke the mocks through this).
    pub fn parts_mut(&mut self) -> &mut Peripherals<A, I, D, M> {
        &mut self.parts
    }
}
