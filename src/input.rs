//! Keyboard mapping for the terminal front-end.

use crate::app::InputEvent;
use crate::scene::SceneName;
use crate::surfaces::ButtonAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means in the given scene.
pub fn map_key(key: KeyEvent, scene: Option<SceneName>) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') => return Some(InputEvent::NextTrack),
        KeyCode::Char('p') | KeyCode::Char('P') => return Some(InputEvent::PreviousTrack),
        KeyCode::Char('m') | KeyCode::Char('M') => return Some(InputEvent::ToggleMusic),
        _ => {}
    }

    match scene? {
        SceneName::MainMenu => match key.code {
            KeyCode::Enter => Some(InputEvent::Click(ButtonAction::Play)),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                Some(InputEvent::Click(ButtonAction::Quit))
            }
            _ => None,
        },
        SceneName::Game => match key.code {
            KeyCode::Char(' ') | KeyCode::Up => Some(InputEvent::Flap),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::Score),
            KeyCode::Char('x') | KeyCode::Char('X') => Some(InputEvent::Crash),
            KeyCode::Enter => Some(InputEvent::Click(ButtonAction::Replay)),
            KeyCode::Esc => Some(InputEvent::Click(ButtonAction::Menu)),
            _ => None,
        },
    }
}

/// Ctrl+C leaves from anywhere.
pub fn is_force_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_means_play_on_menu_and_replay_in_game() {
        assert_eq!(
            map_key(key(KeyCode::Enter), Some(SceneName::MainMenu)),
            Some(InputEvent::Click(ButtonAction::Play))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Some(SceneName::Game)),
            Some(InputEvent::Click(ButtonAction::Replay))
        );
    }

    #[test]
    fn test_space_flaps_only_in_game() {
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), Some(SceneName::Game)),
            Some(InputEvent::Flap)
        );
        assert_eq!(map_key(key(KeyCode::Char(' ')), Some(SceneName::MainMenu)), None);
    }

    #[test]
    fn test_music_keys_work_everywhere() {
        assert_eq!(map_key(key(KeyCode::Char('n')), None), Some(InputEvent::NextTrack));
        assert_eq!(
            map_key(key(KeyCode::Char('m')), Some(SceneName::Game)),
            Some(InputEvent::ToggleMusic)
        );
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_force_quit(ctrl_c));
        assert_eq!(map_key(ctrl_c, Some(SceneName::Game)), None);
        assert!(!is_force_quit(key(KeyCode::Char('c'))));
    }
}
