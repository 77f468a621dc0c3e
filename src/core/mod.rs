//! Core building blocks shared by every scene: constants and the clock.

pub mod clock;
pub mod constants;

pub use clock::{Clock, RepeatingTimer};
pub use constants::*;
