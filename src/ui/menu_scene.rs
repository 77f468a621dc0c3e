//! Main menu drawing.

use super::common::{button_span, centered_rows, create_scene_layout, render_status_bar};
use crate::menu::MainMenu;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal glyph for a menu sprite frame.
pub fn sprite_glyph(frame: Option<&str>) -> &'static str {
    match frame {
        Some("bird_up") => "\\o/",
        Some("bird_down") => "/o\\",
        Some(_) => "-o-",
        None => " o ",
    }
}

pub fn render_menu(frame: &mut Frame, area: Rect, menu: &MainMenu) {
    let layout = create_scene_layout(frame, area, " Skyflap ", Color::Cyan);

    let mut buttons = Vec::new();
    if let Some(span) = button_span(&menu.play_button, "Enter") {
        buttons.push(span);
    }
    if let Some(span) = button_span(&menu.quit_button, "Q") {
        buttons.push(Span::raw("   "));
        buttons.push(span);
    }

    let lines = vec![
        Line::from(Span::styled(
            sprite_glyph(menu.bird.frame()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            menu.last_result.text(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            menu.max_score.text(),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(buttons),
    ];
    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rows(layout.content, height),
    );

    render_status_bar(
        frame,
        layout.status_bar,
        "Main Menu",
        Color::Cyan,
        &[("[Enter]", "Play"), ("[N/P]", "Track"), ("[M]", "Music"), ("[Q]", "Quit")],
    );
}
