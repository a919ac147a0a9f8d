//! Output amplifier control.
//!
//! Boards with a remote-enable line on the headphone/line amplifier mute it
//! while the transport switches source, so the decoder's start-up transient
//! never reaches the output. The player drives the line low before each load
//! and high once the load has been issued.
//!
//! - `mock` - In-process mock for host tests (always available)
//! - [`FixedAmp`] - boards whose amplifier is hard-wired on

#![allow(async_fn_in_trait)]

pub mod mock;

pub use mock::{AmpEvent, MockAmp};

/// Amplifier remote-enable control.
pub trait AmpControl {
    /// Error type returned by amplifier operations.
    type Error: core::fmt::Debug;

    /// Let audio through.
    async fn enable(&mut self) -> Result<(), Self::Error>;

    /// Silence the output.
    async fn disable(&mut self) -> Result<(), Self::Error>;

    /// Returns `true` if the amplifier is currently passing audio.
    fn is_enabled(&self) -> bool;
}

/// Amplifier without a control line; always on.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedAmp;

impl AmpControl for FixedAmp {
    type Error = core::convert::Infallible;

    async fn enable(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn disable(&mut self) -> Result<(), Self::Error> {
        tracing::trace!("amplifier has no enable line, ignoring mute");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
