//! Terminal front-end: draws whichever scene is loaded.

pub mod common;
pub mod game_scene;
pub mod menu_scene;

use crate::app::{ActiveScene, App};
use crate::audio::AudioSink;
use ratatui::Frame;

pub fn draw<S: AudioSink>(frame: &mut Frame, app: &App<S>) {
    let area = frame.size();
    match app.active_scene() {
        Some(ActiveScene::Menu(menu)) => menu_scene::render_menu(frame, area, menu),
        Some(ActiveScene::Game(game)) => game_scene::render_game(frame, area, game),
        None => {}
    }
}
