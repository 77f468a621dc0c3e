//! Audio: a music channel and a sound-effect channel behind one player.

pub mod player;
pub mod sink;

pub use player::AudioPlayer;
pub use sink::{AudioSink, Channel, Clip, NullSink};
