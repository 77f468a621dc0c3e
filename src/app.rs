//! Composition root.
//!
//! [`App`] owns everything that outlives a scene (clock, audio, settings,
//! scene loader) and the currently loaded scene. Scene loads run an explicit
//! `configure()` then `start()` sequence, and the frame loop calls
//! [`App::update`] once per frame to drive timers with scaled time.

use crate::audio::{AudioPlayer, AudioSink, Clip, NullSink};
use crate::config::GameConfig;
use crate::core::clock::Clock;
use crate::error::GameResult;
use crate::menu::{MainMenu, MenuFlapAnimator};
use crate::scene::{SceneLoader, SceneName};
use crate::session::{GameSession, Hud, ObstacleSet, PipeSpawner, PlayerEntity, SessionContext};
use crate::settings::SettingsStore;
use crate::surfaces::ButtonAction;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SFX_FLAP: &str = "wing";
const SFX_SCORE: &str = "point";
const SFX_CRASH: &str = "hit";
const SFX_TRANSITION: &str = "swoosh";

/// Discrete input delivered by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Flap,
    /// The player passed an obstacle.
    Score,
    /// The player hit something.
    Crash,
    /// A button was clicked.
    Click(ButtonAction),
    NextTrack,
    PreviousTrack,
    ToggleMusic,
}

/// Everything that lives and dies with the game scene.
#[derive(Debug, Clone)]
pub struct GameScene {
    pub session: GameSession,
    pub player: PlayerEntity,
    pub obstacles: ObstacleSet,
    pub hud: Hud,
    spawner: PipeSpawner,
}

impl GameScene {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: GameSession::new(),
            player: PlayerEntity::default(),
            obstacles: ObstacleSet::new(),
            hud: Hud::default(),
            spawner: PipeSpawner::new(
                config.pipe_spawn_period,
                config.pipe_lifetime,
                config.pipe_gap_min,
                config.pipe_gap_max,
            ),
        }
    }

    /// Split into the session and the collaborators it borrows.
    fn split<'a>(
        &'a mut self,
        clock: &'a mut Clock,
        settings: &'a mut dyn SettingsStore,
    ) -> (&'a mut GameSession, SessionContext<'a>) {
        let ctx = SessionContext {
            player: &mut self.player,
            obstacles: &mut self.obstacles,
            clock,
            hud: &mut self.hud,
            settings,
        };
        (&mut self.session, ctx)
    }

    fn replay(&mut self, clock: &mut Clock, settings: &mut dyn SettingsStore) {
        self.spawner.reset();
        let (session, mut ctx) = self.split(clock, settings);
        session.replay(&mut ctx);
    }
}

/// The scene currently loaded.
#[derive(Debug, Clone)]
pub enum ActiveScene {
    Menu(MainMenu),
    Game(GameScene),
}

pub struct App<S: AudioSink = NullSink> {
    config: GameConfig,
    clock: Clock,
    audio: AudioPlayer<S>,
    settings: Box<dyn SettingsStore>,
    scenes: SceneLoader,
    active: Option<ActiveScene>,
    rng: StdRng,
    music_paused: bool,
    running: bool,
}

impl<S: AudioSink> App<S> {
    /// Validates the config up front; a bad config never reaches a scene.
    pub fn new(config: GameConfig, sink: S, settings: Box<dyn SettingsStore>) -> GameResult<Self> {
        config.validate()?;
        let audio = AudioPlayer::new(
            sink,
            config.music_tracks.iter().map(|n| Clip::new(n.as_str())).collect(),
            config.sound_effects.iter().map(|n| Clip::new(n.as_str())).collect(),
        )
        .with_volumes(config.music_volume, config.sfx_volume);

        Ok(Self {
            config,
            clock: Clock::new(),
            audio,
            settings,
            scenes: SceneLoader::new(),
            active: None,
            rng: StdRng::from_entropy(),
            music_paused: false,
            running: true,
        })
    }

    /// Use a fixed seed for obstacle generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start audio and load the first scene.
    pub fn start(&mut self, first_scene: SceneName) -> GameResult<()> {
        self.audio.start();
        self.scenes.load(first_scene);
        self.apply_pending_scene()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn audio(&self) -> &AudioPlayer<S> {
        &self.audio
    }

    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }

    pub fn active_scene(&self) -> Option<&ActiveScene> {
        self.active.as_ref()
    }

    pub fn current_scene(&self) -> Option<SceneName> {
        self.scenes.current()
    }

    pub fn game(&self) -> Option<&GameScene> {
        match &self.active {
            Some(ActiveScene::Game(game)) => Some(game),
            _ => None,
        }
    }

    pub fn menu(&self) -> Option<&MainMenu> {
        match &self.active {
            Some(ActiveScene::Menu(menu)) => Some(menu),
            _ => None,
        }
    }

    /// Advance one frame by `real_delta` seconds of wall time.
    pub fn update(&mut self, real_delta: f32) -> GameResult<()> {
        let delta = self.clock.scaled(real_delta);
        match &mut self.active {
            Some(ActiveScene::Menu(menu)) => menu.update(delta),
            Some(ActiveScene::Game(game)) => {
                let playing = game.session.is_playing();
                game.spawner.update(&mut game.obstacles, delta, playing, &mut self.rng);
            }
            None => {}
        }
        self.apply_pending_scene()
    }

    /// Route one input event to the loaded scene.
    pub fn handle(&mut self, event: InputEvent) -> GameResult<()> {
        match event {
            InputEvent::NextTrack => self.audio.play_next_track(),
            InputEvent::PreviousTrack => self.audio.play_previous_track(),
            InputEvent::ToggleMusic => self.toggle_music(),
            InputEvent::Click(action) => self.click(action),
            InputEvent::Flap | InputEvent::Score | InputEvent::Crash => self.gameplay(event),
        }
        self.apply_pending_scene()
    }

    /// Flush settings before exit.
    pub fn shutdown(&mut self) -> GameResult<()> {
        self.audio.stop_music();
        self.settings.save()
    }

    fn gameplay(&mut self, event: InputEvent) {
        let Some(ActiveScene::Game(game)) = &mut self.active else {
            return;
        };
        match event {
            InputEvent::Flap => {
                if game.session.is_playing() && game.player.flap() {
                    self.audio.play_sfx_by_name(SFX_FLAP);
                }
            }
            InputEvent::Score => {
                if game.session.is_playing() {
                    let (session, mut ctx) = game.split(&mut self.clock, self.settings.as_mut());
                    session.increase_score(&mut ctx);
                    self.audio.play_sfx_by_name(SFX_SCORE);
                }
            }
            InputEvent::Crash => {
                if game.session.is_playing() {
                    let (session, mut ctx) = game.split(&mut self.clock, self.settings.as_mut());
                    session.end_game(&mut ctx);
                    self.audio.play_sfx_by_name(SFX_CRASH);
                }
            }
            _ => {}
        }
    }

    fn click(&mut self, action: ButtonAction) {
        match &mut self.active {
            Some(ActiveScene::Game(game)) => {
                let clicked = [&game.hud.play_button, &game.hud.menu_button]
                    .into_iter()
                    .find_map(|b| b.click().filter(|a| *a == action));
                match clicked {
                    Some(ButtonAction::Replay) => {
                        game.replay(&mut self.clock, self.settings.as_mut());
                        self.audio.play_sfx_by_name(SFX_TRANSITION);
                    }
                    Some(ButtonAction::Menu) => {
                        game.session.navigate_to_menu(&mut self.clock, &mut self.scenes);
                    }
                    _ => log::debug!("Ignoring click {:?} in game scene", action),
                }
            }
            Some(ActiveScene::Menu(menu)) => {
                let clicked = [&menu.play_button, &menu.quit_button]
                    .into_iter()
                    .find_map(|b| b.click().filter(|a| *a == action));
                match clicked {
                    Some(ButtonAction::Play) => menu.play_game(&mut self.scenes),
                    Some(ButtonAction::Quit) => {
                        menu.quit_game();
                        self.running = false;
                    }
                    _ => log::debug!("Ignoring click {:?} in menu", action),
                }
            }
            None => {}
        }
    }

    fn toggle_music(&mut self) {
        if self.music_paused {
            self.audio.resume_music();
        } else {
            self.audio.pause_music();
        }
        self.music_paused = !self.music_paused;
    }

    /// Replace the loaded scene if a load was requested. A scene that fails
    /// to build leaves the loaded one and the loader's bookkeeping untouched.
    fn apply_pending_scene(&mut self) -> GameResult<()> {
        let Some(next) = self.scenes.take_pending() else {
            return Ok(());
        };
        let came_from_menu = self.scenes.current() == Some(SceneName::MainMenu);
        log::info!("Loading scene {}", next);

        let scene = match next {
            SceneName::MainMenu => {
                let animator = MenuFlapAnimator::new(
                    self.config.menu_sprites.clone(),
                    self.config.flap_animation_period,
                )?;
                let mut menu = MainMenu::new(animator);
                menu.configure(&mut self.clock);
                menu.start(self.settings.as_ref());
                ActiveScene::Menu(menu)
            }
            SceneName::Game => {
                let mut game = GameScene::new(&self.config);
                {
                    let (session, mut ctx) = game.split(&mut self.clock, self.settings.as_mut());
                    session.configure(&mut ctx);
                    session.start(&mut ctx, came_from_menu)?;
                }
                ActiveScene::Game(game)
            }
        };

        if self.active.is_some() {
            self.audio.play_sfx_by_name(SFX_TRANSITION);
        }
        self.active = Some(scene);
        self.scenes.commit(next);
        Ok(())
    }
}
