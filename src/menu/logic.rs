//! Main menu scene: score summary, animated bird, play and quit buttons.

use super::animator::MenuFlapAnimator;
use crate::core::clock::Clock;
use crate::core::constants::LAST_SCORE_KEY;
use crate::scene::{SceneLoader, SceneName};
use crate::settings::SettingsStore;
use crate::surfaces::{Button, ButtonAction, SpriteSurface, TextLabel};

#[derive(Debug, Clone)]
pub struct MainMenu {
    on_menu: bool,
    pub last_result: TextLabel,
    pub max_score: TextLabel,
    pub bird: SpriteSurface,
    pub play_button: Button,
    pub quit_button: Button,
    animator: MenuFlapAnimator,
}

impl MainMenu {
    pub fn new(animator: MenuFlapAnimator) -> Self {
        Self {
            on_menu: false,
            last_result: TextLabel::default(),
            max_score: TextLabel::default(),
            bird: SpriteSurface::default(),
            play_button: Button::new("Play"),
            quit_button: Button::new("Quit"),
            animator,
        }
    }

    pub fn is_on_menu(&self) -> bool {
        self.on_menu
    }

    /// Early initialization: mark the menu active and make sure time runs.
    pub fn configure(&mut self, clock: &mut Clock) {
        self.on_menu = true;
        clock.resume();
        self.play_button.bind(ButtonAction::Play);
        self.quit_button.bind(ButtonAction::Quit);
        self.bird.set_frame(self.animator.current_frame());
    }

    /// First-frame initialization: show the stored results.
    pub fn start(&mut self, settings: &dyn SettingsStore) {
        self.show_last_result(settings);
        self.show_max_score(settings);
    }

    pub fn show_last_result(&mut self, settings: &dyn SettingsStore) {
        self.last_result
            .set_text(format!("Last Result : {}", settings.get_int(LAST_SCORE_KEY)));
    }

    /// Only the last score is persisted, so this label shows it too.
    pub fn show_max_score(&mut self, settings: &dyn SettingsStore) {
        self.max_score
            .set_text(format!("Max Score : {}", settings.get_int(LAST_SCORE_KEY)));
    }

    /// Drive the wing-flap animation with scaled time.
    pub fn update(&mut self, delta: f32) {
        self.animator.update(delta, self.on_menu, &mut self.bird);
    }

    pub fn play_game(&mut self, scenes: &mut SceneLoader) {
        self.on_menu = false;
        scenes.load(SceneName::Game);
    }

    /// Leave the menu for good; the application stops running after this.
    pub fn quit_game(&mut self) {
        self.on_menu = false;
        log::warn!("Closing the game...");
    }
}
