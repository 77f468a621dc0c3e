// Scene names understood by the scene loader
pub const GAME_SCENE: &str = "Game";
pub const MAIN_MENU_SCENE: &str = "MainMenu";

// Persisted settings keys
pub const LAST_SCORE_KEY: &str = "LastScore";

// Frame pacing
pub const TARGET_FRAME_RATE: u32 = 120;
/// Longest wall-clock step one frame may feed into the simulation.
pub const MAX_FRAME_STEP_SECONDS: f32 = 0.5;

// Time scale
pub const NORMAL_TIME_SCALE: f32 = 1.0;
pub const FROZEN_TIME_SCALE: f32 = 0.0;

/// Where the player is placed on every replay.
pub const PLAYER_ORIGIN: [f32; 3] = [0.0, 0.0, 1.0];

// Menu wing-flap animation
pub const FLAP_ANIMATION_PERIOD_SECONDS: f32 = 0.15;

// Obstacle spawning
pub const PIPE_SPAWN_PERIOD_SECONDS: f32 = 1.5;
pub const PIPE_LIFETIME_SECONDS: f32 = 6.0;
pub const PIPE_GAP_MIN: u16 = 4;
pub const PIPE_GAP_MAX: u16 = 13;

/// Points between difficulty steps.
pub const DIFFICULTY_STEP_SCORE: u32 = 10;

// Audio
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.7;
pub const DEFAULT_SFX_VOLUME: f32 = 0.7;

// Save directory under $HOME
pub const DATA_DIR_NAME: &str = ".skyflap";
pub const PREFS_FILE: &str = "prefs.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "skyflap.log";
