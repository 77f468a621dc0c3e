//! Wing-flap animation shown on the main menu.

use crate::core::clock::RepeatingTimer;
use crate::error::{GameError, GameResult};
use crate::surfaces::SpriteSurface;

/// Cycles through sprite frames on a fixed period while the menu is shown.
#[derive(Debug, Clone)]
pub struct MenuFlapAnimator {
    frames: Vec<String>,
    index: usize,
    timer: RepeatingTimer,
}

impl MenuFlapAnimator {
    /// First frame change happens one `period` after creation.
    pub fn new(frames: Vec<String>, period: f32) -> GameResult<Self> {
        if frames.is_empty() {
            return Err(GameError::Config(
                "menu animation needs at least one sprite frame".to_string(),
            ));
        }
        if period.is_nan() || period <= 0.0 {
            return Err(GameError::Config(format!(
                "menu animation period must be positive, got {}",
                period
            )));
        }
        Ok(Self {
            frames,
            index: 0,
            timer: RepeatingTimer::every(period),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_frame(&self) -> &str {
        &self.frames[self.index]
    }

    /// Advance by `delta` seconds. Frames only change while `on_menu`.
    pub fn update(&mut self, delta: f32, on_menu: bool, surface: &mut SpriteSurface) {
        let ticks = self.timer.advance(delta);
        if !on_menu {
            return;
        }
        for _ in 0..ticks {
            self.index = (self.index + 1) % self.frames.len();
            surface.set_frame(self.frames[self.index].as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames() -> Vec<String> {
        vec!["up".into(), "mid".into(), "down".into()]
    }

    #[test]
    fn test_empty_frames_rejected() {
        assert!(MenuFlapAnimator::new(Vec::new(), 0.15).is_err());
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(MenuFlapAnimator::new(frames(), 0.0).is_err());
        assert!(MenuFlapAnimator::new(frames(), f32::NAN).is_err());
    }

    #[test]
    fn test_advances_once_per_period() {
        let mut anim = MenuFlapAnimator::new(frames(), 0.15).unwrap();
        let mut surface = SpriteSurface::default();
        anim.update(0.1, true, &mut surface);
        assert_eq!(anim.index(), 0);
        assert!(surface.frame().is_none());
        anim.update(0.1, true, &mut surface);
        assert_eq!(anim.index(), 1);
        assert_eq!(surface.frame(), Some("mid"));
    }

    #[test]
    fn test_index_wraps() {
        let mut anim = MenuFlapAnimator::new(frames(), 0.15).unwrap();
        let mut surface = SpriteSurface::default();
        for _ in 0..3 {
            anim.update(0.15, true, &mut surface);
        }
        assert_eq!(anim.index(), 0);
        assert_eq!(surface.frame(), Some("up"));
    }

    #[test]
    fn test_frozen_when_off_menu() {
        let mut anim = MenuFlapAnimator::new(frames(), 0.15).unwrap();
        let mut surface = SpriteSurface::default();
        anim.update(1.0, false, &mut surface);
        assert_eq!(anim.index(), 0);
        assert!(surface.frame().is_none());
    }
}
