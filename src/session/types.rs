//! Game session data: lifecycle state, score, player handle and HUD.

use crate::surfaces::{Button, Overlay, TextLabel};

/// Lifecycle of one play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Scene loaded, no replay yet.
    #[default]
    NotStarted,
    Playing,
    /// Time is frozen until the next replay.
    GameOver,
}

/// Non-negative score that renders itself to a text display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCounter {
    value: u32,
}

impl ScoreCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self, display: &mut TextLabel) {
        self.value = self.value.saturating_add(1);
        self.render(display);
    }

    pub fn reset(&mut self, display: &mut TextLabel) {
        self.value = 0;
        self.render(display);
    }

    /// Plain decimal, no padding.
    pub fn render(&self, display: &mut TextLabel) {
        display.set_text(self.value.to_string());
    }
}

/// The externally simulated bird. The session only toggles and places it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEntity {
    active: bool,
    position: [f32; 3],
    flaps: u32,
}

impl Default for PlayerEntity {
    fn default() -> Self {
        Self {
            active: false,
            position: [0.0; 3],
            flaps: 0,
        }
    }
}

impl PlayerEntity {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    pub fn set_position(&mut self, position: [f32; 3]) {
        self.position = position;
    }

    /// Deliver a flap. Returns false when the player is inactive.
    pub fn flap(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.flaps = self.flaps.saturating_add(1);
        true
    }

    pub fn flaps(&self) -> u32 {
        self.flaps
    }
}

/// On-screen widgets owned by the game scene.
#[derive(Debug, Clone)]
pub struct Hud {
    pub score: TextLabel,
    pub game_over: Overlay,
    pub play_button: Button,
    pub menu_button: Button,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score: TextLabel::new("0"),
            game_over: Overlay::default(),
            play_button: Button::new("Play"),
            menu_button: Button::new("Menu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_renders_decimal() {
        let mut score = ScoreCounter::new();
        let mut label = TextLabel::default();
        for _ in 0..12 {
            score.increment(&mut label);
        }
        assert_eq!(score.value(), 12);
        assert_eq!(label.text(), "12");
    }

    #[test]
    fn test_score_reset_is_idempotent() {
        let mut score = ScoreCounter::new();
        let mut label = TextLabel::default();
        score.increment(&mut label);
        score.reset(&mut label);
        score.reset(&mut label);
        assert_eq!(score.value(), 0);
        assert_eq!(label.text(), "0");
    }

    #[test]
    fn test_inactive_player_ignores_flap() {
        let mut player = PlayerEntity::default();
        assert!(!player.flap());
        player.set_active(true);
        assert!(player.flap());
        assert_eq!(player.flaps(), 1);
    }

    #[test]
    fn test_default_session_state() {
        assert_eq!(SessionState::default(), SessionState::NotStarted);
    }
}
