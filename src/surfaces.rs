//! UI display surfaces the scenes write into.
//!
//! These hold plain state (text, visibility, bound action, current sprite).
//! The terminal front-end in `ui` reads them each frame to draw.

/// What a button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Main menu: load the game scene.
    Play,
    /// Game scene: start a new session.
    Replay,
    /// Game scene: go back to the main menu.
    Menu,
    /// Main menu: leave the application.
    Quit,
}

/// A text field that can be shown or hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLabel {
    text: String,
    visible: bool,
}

impl TextLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// A full-screen panel toggled on and off (e.g. the game-over overlay).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    visible: bool,
}

impl Overlay {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// A clickable button. Hidden or unbound buttons swallow clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    caption: String,
    visible: bool,
    action: Option<ButtonAction>,
}

impl Button {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            visible: true,
            action: None,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Register the click handler, replacing any previous one.
    pub fn bind(&mut self, action: ButtonAction) {
        self.action = Some(action);
    }

    pub fn action(&self) -> Option<ButtonAction> {
        self.action
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Click the button, yielding its action if it can be clicked.
    pub fn click(&self) -> Option<ButtonAction> {
        if self.visible {
            self.action
        } else {
            None
        }
    }
}

/// Surface showing one named sprite frame at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSurface {
    frame: Option<String>,
}

impl SpriteSurface {
    pub fn frame(&self) -> Option<&str> {
        self.frame.as_deref()
    }

    pub fn set_frame(&mut self, frame: impl Into<String>) {
        self.frame = Some(frame.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_button_click_does_nothing() {
        let button = Button::new("Menu");
        assert_eq!(button.click(), None);
    }

    #[test]
    fn test_hidden_button_swallows_click() {
        let mut button = Button::new("Play");
        button.bind(ButtonAction::Replay);
        assert_eq!(button.click(), Some(ButtonAction::Replay));
        button.set_visible(false);
        assert_eq!(button.click(), None);
    }

    #[test]
    fn test_label_text_and_visibility() {
        let mut label = TextLabel::new("0");
        assert!(label.is_visible());
        label.set_text("12");
        label.set_visible(false);
        assert_eq!(label.text(), "12");
        assert!(!label.is_visible());
    }
}
