//! Main menu scene and its decorative wing-flap animation.

pub mod animator;
pub mod logic;

pub use animator::MenuFlapAnimator;
pub use logic::MainMenu;
