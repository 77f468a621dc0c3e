//! Game session: one play-through from replay to game over.
//!
//! The session flips between playing and game over, keeps the score on the
//! HUD, and purges obstacles whenever a new run begins. Spawning itself is
//! done by [`PipeSpawner`], driven from the game scene.

pub mod logic;
pub mod obstacles;
pub mod types;

pub use logic::*;
pub use obstacles::*;
pub use types::*;
