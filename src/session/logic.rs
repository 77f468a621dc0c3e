//! The game session state machine.
//!
//! A [`GameSession`] owns the lifecycle state and the score. Everything else
//! it touches (player, obstacles, clock, HUD, settings) belongs to the scene
//! or the application and is lent to each call through a [`SessionContext`].

use super::obstacles::ObstacleSet;
use super::types::{Hud, PlayerEntity, ScoreCounter, SessionState};
use crate::core::clock::Clock;
use crate::core::constants::{DIFFICULTY_STEP_SCORE, LAST_SCORE_KEY, PLAYER_ORIGIN};
use crate::error::{GameError, GameResult};
use crate::scene::{SceneLoader, SceneName};
use crate::settings::SettingsStore;
use crate::surfaces::ButtonAction;

/// Borrowed collaborators for one session operation.
pub struct SessionContext<'a> {
    pub player: &'a mut PlayerEntity,
    pub obstacles: &'a mut ObstacleSet,
    pub clock: &'a mut Clock,
    pub hud: &'a mut Hud,
    pub settings: &'a mut dyn SettingsStore,
}

#[derive(Debug, Clone, Default)]
pub struct GameSession {
    state: SessionState,
    score: ScoreCounter,
    difficulty: u32,
    configured: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// Difficulty steps reached in the current run.
    pub fn difficulty_level(&self) -> u32 {
        self.difficulty
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Time is frozen and input ignored until the next replay.
    pub fn is_waiting_restart(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Early initialization: bind the HUD before anything can touch the score.
    pub fn configure(&mut self, ctx: &mut SessionContext<'_>) {
        ctx.hud.menu_button.bind(ButtonAction::Menu);
        ctx.hud.play_button.bind(ButtonAction::Replay);
        ctx.hud.game_over.set_visible(false);
        ctx.player.set_active(false);
        self.score.reset(&mut ctx.hud.score);
        self.configured = true;
    }

    /// First-frame initialization. Coming from the main menu starts a
    /// session straight away; otherwise the play button waits for a click.
    pub fn start(&mut self, ctx: &mut SessionContext<'_>, came_from_menu: bool) -> GameResult<()> {
        if !self.configured {
            return Err(GameError::MissingCollaborator("score display"));
        }
        if came_from_menu {
            self.replay(ctx);
        } else {
            ctx.hud.play_button.set_visible(true);
            log::info!("Game scene waiting for the play button");
        }
        Ok(())
    }

    /// Start a fresh session from any state.
    pub fn replay(&mut self, ctx: &mut SessionContext<'_>) {
        self.reset_score(ctx);
        self.difficulty = 0;
        ctx.hud.play_button.set_visible(false);
        ctx.hud.game_over.set_visible(false);
        ctx.hud.score.set_visible(true);
        ctx.player.set_active(true);
        ctx.player.set_position(PLAYER_ORIGIN);
        ctx.clock.resume();
        self.state = SessionState::Playing;

        let purged = ctx.obstacles.clear();
        log::info!("Session started ({} obstacles purged)", purged);
    }

    /// End the current session. Ignored unless playing.
    pub fn end_game(&mut self, ctx: &mut SessionContext<'_>) {
        if !self.is_playing() {
            log::debug!("end_game ignored in state {:?}", self.state);
            return;
        }
        ctx.hud.game_over.set_visible(true);
        ctx.hud.play_button.set_visible(true);
        self.state = SessionState::GameOver;
        ctx.clock.freeze();
        self.record_result(ctx.settings);
        log::info!("Game over with score {}", self.score.value());
    }

    /// Count a passed obstacle. Ignored unless playing.
    pub fn increase_score(&mut self, ctx: &mut SessionContext<'_>) {
        if !self.is_playing() {
            log::debug!("increase_score ignored in state {:?}", self.state);
            return;
        }
        self.score.increment(&mut ctx.hud.score);
        if self.score.value() % DIFFICULTY_STEP_SCORE == 0 {
            self.increase_difficulty();
        }
    }

    pub fn reset_score(&mut self, ctx: &mut SessionContext<'_>) {
        self.score.reset(&mut ctx.hud.score);
    }

    /// Leave for the main menu. The clock is restored first so the next
    /// scene does not start frozen.
    pub fn navigate_to_menu(&mut self, clock: &mut Clock, scenes: &mut SceneLoader) {
        clock.resume();
        scenes.load(SceneName::MainMenu);
    }

    /// Raised every `DIFFICULTY_STEP_SCORE` points; reset by `replay`.
    pub fn increase_difficulty(&mut self) {
        self.difficulty = self.difficulty.saturating_add(1);
        log::info!(
            "Difficulty raised to {} at score {}",
            self.difficulty,
            self.score.value()
        );
    }

    fn record_result(&self, settings: &mut dyn SettingsStore) {
        settings.set_int(LAST_SCORE_KEY, i64::from(self.score.value()));
        if let Err(e) = settings.save() {
            log::error!("Failed to save score: {}", e);
        }
    }
}
