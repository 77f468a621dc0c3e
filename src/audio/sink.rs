//! Output side of the audio player.
//!
//! The player decides what to play; a sink performs it. Decoding and mixing
//! live behind this trait.

/// The two independently controlled channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Looping background music.
    Music,
    /// One-shot sound effects.
    Sfx,
}

/// A named clip known to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    pub name: String,
}

impl Clip {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Clip {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

pub trait AudioSink {
    /// Replace whatever the channel is playing with `clip`.
    fn play(&mut self, channel: Channel, clip: &Clip, looping: bool);
    /// Fire a clip on top of whatever the channel is playing.
    fn play_one_shot(&mut self, channel: Channel, clip: &Clip);
    fn stop(&mut self, channel: Channel);
    fn pause(&mut self, channel: Channel);
    fn resume(&mut self, channel: Channel);
    fn set_volume(&mut self, channel: Channel, volume: f32);
}

/// Sink with no device behind it; every call is logged at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, channel: Channel, clip: &Clip, looping: bool) {
        log::debug!("[{:?}] play {} (loop={})", channel, clip.name, looping);
    }

    fn play_one_shot(&mut self, channel: Channel, clip: &Clip) {
        log::debug!("[{:?}] one-shot {}", channel, clip.name);
    }

    fn stop(&mut self, channel: Channel) {
        log::debug!("[{:?}] stop", channel);
    }

    fn pause(&mut self, channel: Channel) {
        log::debug!("[{:?}] pause", channel);
    }

    fn resume(&mut self, channel: Channel) {
        log::debug!("[{:?}] resume", channel);
    }

    fn set_volume(&mut self, channel: Channel, volume: f32) {
        log::debug!("[{:?}] volume {:.2}", channel, volume);
    }
}
