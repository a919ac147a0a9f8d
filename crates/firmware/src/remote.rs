//! Remote command channel.
//!
//! The wireless receiver runs as its own task and hands each decoded command
//! to the control loop through a [`RemoteSlot`]. The slot holds a single
//! command: a newer one overwrites an unconsumed older one, and the control
//! loop reads and clears it once per cycle. There is no queue.
//!
//! # Wire tokens
//!
//! One command per line, case-insensitive, surrounding whitespace ignored:
//!
//! | Token                       | Command                         |
//! |-----------------------------|---------------------------------|
//! | `next`                      | next track                      |
//! | `prev`, `previous`          | previous track                  |
//! | `play`, `pause`, `toggle`   | pause/resume                    |
//! | `vol+`, `volup`             | volume up                       |
//! | `vol-`, `voldown`           | volume down                     |
//! | `mode`                      | cycle traversal policy          |
//! | `nextfolder`                | first file of next folder       |
//! | `prevfolder`                | first file of previous folder   |
//! | `goto <folder> <file>`      | jump to a coordinate            |

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use platform::ControlEvent;

/// A control intent from any source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// One of the shared control intents.
    Control(ControlEvent),
    /// Jump to `(folder, file)`; only the remote can express this.
    JumpTo {
        /// Folder index.
        folder: usize,
        /// File index inside the folder.
        file: usize,
    },
}

impl From<ControlEvent> for Command {
    fn from(event: ControlEvent) -> Self {
        Command::Control(event)
    }
}

/// Why a remote token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RemoteParseError {
    /// Blank line.
    #[error("empty command")]
    Empty,
    /// Not one of the known tokens.
    #[error("unknown command")]
    Unknown,
    /// `goto` without two indices, or with extra words.
    #[error("goto takes exactly two indices")]
    BadArguments,
    /// An index did not parse as an unsigned integer.
    #[error("index is not a number")]
    BadNumber,
}

/// Decode one line from the remote channel.
///
/// # Errors
///
/// Returns a [`RemoteParseError`] describing why the line is not a command.
pub fn parse_command(line: &str) -> Result<Command, RemoteParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(RemoteParseError::Empty);
    };

    if head.eq_ignore_ascii_case("goto") {
        let (Some(folder), Some(file), None) = (words.next(), words.next(), words.next()) else {
            return Err(RemoteParseError::BadArguments);
        };
        let folder = folder.parse().map_err(|_| RemoteParseError::BadNumber)?;
        let file = file.parse().map_err(|_| RemoteParseError::BadNumber)?;
        return Ok(Command::JumpTo { folder, file });
    }

    if words.next().is_some() {
        return Err(RemoteParseError::Unknown);
    }

    const TOKENS: [(&str, ControlEvent); 13] = [
        ("next", ControlEvent::Next),
        ("prev", ControlEvent::Previous),
        ("previous", ControlEvent::Previous),
        ("play", ControlEvent::PlayPause),
        ("pause", ControlEvent::PlayPause),
        ("toggle", ControlEvent::PlayPause),
        ("vol+", ControlEvent::VolumeUp),
        ("volup", ControlEvent::VolumeUp),
        ("vol-", ControlEvent::VolumeDown),
        ("voldown", ControlEvent::VolumeDown),
        ("mode", ControlEvent::CyclePolicy),
        ("nextfolder", ControlEvent::NextFolder),
        ("prevfolder", ControlEvent::PreviousFolder),
    ];

    TOKENS
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(head))
        .map(|&(_, event)| Command::Control(event))
        .ok_or(RemoteParseError::Unknown)
}

/// Single-entry, last-write-wins handoff from the receiver task.
pub struct RemoteSlot {
    signal: Signal<CriticalSectionRawMutex, Command>,
}

impl RemoteSlot {
    /// An empty slot; usable in a `static`.
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Store `command`, replacing any command not yet consumed.
    pub fn post(&self, command: Command) {
        self.signal.signal(command);
    }

    /// Parse `line` and post it. Rejected lines never reach the slot.
    ///
    /// # Errors
    ///
    /// Returns the parse failure so the receiver can log it.
    pub fn post_line(&self, line: &str) -> Result<Command, RemoteParseError> {
        match parse_command(line) {
            Ok(command) => {
                self.post(command);
                Ok(command)
            }
            Err(e) => {
                tracing::warn!(error = %e, "remote command rejected");
                Err(e)
            }
        }
    }

    /// Read and clear the pending command.
    pub fn take(&self) -> Option<Command> {
        self.signal.try_take()
    }

    /// `true` when a command is waiting.
    pub fn is_pending(&self) -> bool {
        self.signal.signaled()
    }
}

impl Default for RemoteSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// The slot shared by the remote receiver task and the player loop.
pub static REMOTE_SLOT: RemoteSlot = RemoteSlot::new();

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_control_tokens() {
        let cases = [
            ("next", ControlEvent::Next),
            ("PREV", ControlEvent::Previous),
            ("previous", ControlEvent::Previous),
            ("  play  ", ControlEvent::PlayPause),
            ("Pause", ControlEvent::PlayPause),
            ("toggle", ControlEvent::PlayPause),
            ("vol+", ControlEvent::VolumeUp),
            ("VolUp", ControlEvent::VolumeUp),
            ("vol-", ControlEvent::VolumeDown),
            ("voldown", ControlEvent::VolumeDown),
            ("mode", ControlEvent::CyclePolicy),
            ("nextfolder", ControlEvent::NextFolder),
            ("PrevFolder", ControlEvent::PreviousFolder),
        ];
        for (line, event) in cases {
            assert_eq!(parse_command(line), Ok(Command::Control(event)), "{line}");
        }
    }

    #[test]
    fn test_parse_goto() {
        assert_eq!(
            parse_command("goto 2 7"),
            Ok(Command::JumpTo { folder: 2, file: 7 })
        );
        assert_eq!(parse_command("goto 2"), Err(RemoteParseError::BadArguments));
        assert_eq!(parse_command("goto 1 2 3"), Err(RemoteParseError::BadArguments));
        assert_eq!(parse_command("goto a 1"), Err(RemoteParseError::BadNumber));
        assert_eq!(parse_command("goto 1 -1"), Err(RemoteParseError::BadNumber));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(parse_command(""), Err(RemoteParseError::Empty));
        assert_eq!(parse_command("   "), Err(RemoteParseError::Empty));
        assert_eq!(parse_command("skip"), Err(RemoteParseError::Unknown));
        assert_eq!(parse_command("next now"), Err(RemoteParseError::Unknown));
    }

    #[test]
    fn test_slot_last_write_wins() {
        let slot = RemoteSlot::new();
        slot.post(ControlEvent::Next.into());
        slot.post(ControlEvent::VolumeUp.into());
        assert!(slot.is_pending());
        assert_eq!(slot.take(), Some(Command::Control(ControlEvent::VolumeUp)));
        assert_eq!(slot.take(), None);
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_rejected_line_leaves_slot_untouched() {
        let slot = RemoteSlot::new();
        slot.post(ControlEvent::Next.into());
        assert!(slot.post_line("bogus").is_err());
        assert_eq!(slot.take(), Some(Command::Control(ControlEvent::Next)));
    }
}
