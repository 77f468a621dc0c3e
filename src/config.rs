//! Game configuration.

use crate::core::constants::*;
use crate::error::{GameError, GameResult};
use crate::utils::persistence::{data_path, load_json_or_default};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables read from ~/.skyflap/config.json. Every field is optional in
/// the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Frames per second the main loop aims for
    pub target_frame_rate: u32,

    /// Seconds between menu wing-flap frames
    pub flap_animation_period: f32,

    /// Sprite frame names cycled by the menu animation
    pub menu_sprites: Vec<String>,

    /// Seconds between pipe spawns while playing
    pub pipe_spawn_period: f32,

    /// Seconds a pipe stays alive before despawning
    pub pipe_lifetime: f32,

    /// Inclusive range for the pipe gap center row
    pub pipe_gap_min: u16,
    pub pipe_gap_max: u16,

    /// Music channel volume in [0, 1]
    pub music_volume: f32,

    /// Sound-effect channel volume in [0, 1]
    pub sfx_volume: f32,

    pub music_tracks: Vec<String>,
    pub sound_effects: Vec<String>,

    /// Log verbosity: "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_frame_rate: TARGET_FRAME_RATE,
            flap_animation_period: FLAP_ANIMATION_PERIOD_SECONDS,
            menu_sprites: vec![
                "bird_up".to_string(),
                "bird_mid".to_string(),
                "bird_down".to_string(),
            ],
            pipe_spawn_period: PIPE_SPAWN_PERIOD_SECONDS,
            pipe_lifetime: PIPE_LIFETIME_SECONDS,
            pipe_gap_min: PIPE_GAP_MIN,
            pipe_gap_max: PIPE_GAP_MAX,
            music_volume: DEFAULT_MUSIC_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
            music_tracks: vec!["theme".to_string()],
            sound_effects: vec![
                "wing".to_string(),
                "point".to_string(),
                "hit".to_string(),
                "swoosh".to_string(),
            ],
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Quiet config for headless runs and tests
    pub fn silent() -> Self {
        Self {
            music_tracks: Vec::new(),
            sound_effects: Vec::new(),
            music_volume: 0.0,
            sfx_volume: 0.0,
            ..Default::default()
        }
    }

    /// Load from `path`, falling back to defaults, then validate.
    pub fn load_from(path: &Path) -> GameResult<Self> {
        let config: Self = load_json_or_default(path);
        config.validate()?;
        Ok(config)
    }

    /// Load from ~/.skyflap/config.json.
    pub fn load_default() -> GameResult<Self> {
        Self::load_from(&data_path(CONFIG_FILE)?)
    }

    /// Reject settings the game cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        if self.target_frame_rate == 0 {
            return Err(GameError::Config("target_frame_rate must be > 0".into()));
        }
        if self.menu_sprites.is_empty() {
            return Err(GameError::Config("menu_sprites must not be empty".into()));
        }
        for (name, value) in [
            ("flap_animation_period", self.flap_animation_period),
            ("pipe_spawn_period", self.pipe_spawn_period),
            ("pipe_lifetime", self.pipe_lifetime),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(GameError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.pipe_gap_min > self.pipe_gap_max {
            return Err(GameError::Config(format!(
                "pipe_gap_min ({}) exceeds pipe_gap_max ({})",
                self.pipe_gap_min, self.pipe_gap_max
            )));
        }
        Ok(())
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Frame budget in seconds at the target rate.
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.target_frame_rate.max(1) as f32
    }
}
