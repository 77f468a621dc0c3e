//! Skyflap - terminal flappy-bird shell
//!
//! The library holds the scene logic (session, menu, audio, settings) so it
//! can be driven headless from tests; `main.rs` adds the terminal loop.

pub mod app;
pub mod audio;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod menu;
pub mod scene;
pub mod session;
pub mod settings;
pub mod surfaces;
pub mod ui;
pub mod utils;

pub use app::{ActiveScene, App, GameScene, InputEvent};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use scene::{SceneLoader, SceneName};
pub use session::{GameSession, SessionState};
pub use settings::{PlayerPrefs, SettingsStore};
