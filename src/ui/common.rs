//! Layout pieces shared by the menu and game scenes.

use crate::surfaces::Button;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas returned by [`create_scene_layout`].
pub struct SceneLayout {
    /// Main content area inside the outer border
    pub content: Rect,
    /// Two-line status bar at the bottom
    pub status_bar: Rect,
}

/// Clear the area, draw a titled border and split off a status bar.
///
/// ```text
/// ┌─ Title ─────────────────────────┐
/// │   [content area]                │
/// │ [status bar - 2 lines]          │
/// └─────────────────────────────────┘
/// ```
pub fn create_scene_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> SceneLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    SceneLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Status message on line 1, key hints on line 2.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// A button caption, or nothing when the button is hidden.
pub fn button_span<'a>(button: &'a Button, key: &'a str) -> Option<Span<'a>> {
    button.is_visible().then(|| {
        Span::styled(
            format!("[{}] {}", key, button.caption()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    })
}

/// Center `height` rows inside `area`.
pub fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rows_fits_inside() {
        let area = Rect::new(0, 0, 40, 10);
        let rows = centered_rows(area, 4);
        assert_eq!(rows.y, 3);
        assert_eq!(rows.height, 4);
    }

    #[test]
    fn test_centered_rows_clamps_height() {
        let area = Rect::new(2, 5, 40, 3);
        let rows = centered_rows(area, 10);
        assert_eq!(rows, area);
    }

    #[test]
    fn test_hidden_button_has_no_span() {
        let mut button = Button::new("Play");
        assert!(button_span(&button, "Enter").is_some());
        button.set_visible(false);
        assert!(button_span(&button, "Enter").is_none());
    }
}
