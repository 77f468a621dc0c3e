//! Scene names and the load-by-name request queue.
//!
//! Loading a scene replaces every piece of per-scene state. Requests are
//! recorded here and applied by the application at the end of the frame, so
//! the handler that asked for the load finishes against the old scene.

use crate::core::constants::{GAME_SCENE, MAIN_MENU_SCENE};
use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// The two destinations a scene load can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneName {
    Game,
    MainMenu,
}

impl SceneName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => GAME_SCENE,
            Self::MainMenu => MAIN_MENU_SCENE,
        }
    }
}

impl fmt::Display for SceneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneName {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GAME_SCENE => Ok(Self::Game),
            MAIN_MENU_SCENE => Ok(Self::MainMenu),
            other => Err(GameError::UnknownScene(other.to_string())),
        }
    }
}

/// Collects scene load requests and remembers which scene is current.
#[derive(Debug, Clone, Default)]
pub struct SceneLoader {
    pending: Option<SceneName>,
    current: Option<SceneName>,
    previous: Option<SceneName>,
}

impl SceneLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a load. A later request in the same frame wins.
    pub fn load(&mut self, scene: SceneName) {
        log::info!("Scene load requested: {}", scene);
        self.pending = Some(scene);
    }

    /// Request a load by wire name.
    pub fn load_by_name(&mut self, name: &str) -> Result<(), GameError> {
        let scene = name.parse()?;
        self.load(scene);
        Ok(())
    }

    pub fn pending(&self) -> Option<SceneName> {
        self.pending
    }

    /// Take the pending request. The current scene is unchanged until the
    /// new one is built and [`SceneLoader::commit`] is called.
    pub fn take_pending(&mut self) -> Option<SceneName> {
        self.pending.take()
    }

    /// Record `scene` as loaded.
    pub fn commit(&mut self, scene: SceneName) {
        self.previous = self.current;
        self.current = Some(scene);
    }

    pub fn current(&self) -> Option<SceneName> {
        self.current
    }

    /// The scene that was active before the current one.
    pub fn previous(&self) -> Option<SceneName> {
        self.previous
    }
}
