//! Game scene drawing: score, obstacle strip, overlay and buttons.

use super::common::{button_span, centered_rows, create_scene_layout, render_status_bar};
use crate::app::GameScene;
use crate::session::SessionState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_game(frame: &mut Frame, area: Rect, game: &GameScene) {
    let layout = create_scene_layout(frame, area, " Skyflap ", Color::Green);

    let mut lines = Vec::new();
    if game.hud.score.is_visible() {
        lines.push(Line::from(Span::styled(
            game.hud.score.text(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    if game.player.is_active() {
        lines.push(Line::from(Span::styled(
            ">o",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(Span::styled(
        obstacle_strip(game),
        Style::default().fg(Color::Green),
    )));

    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rows(layout.content, height),
    );

    if game.hud.game_over.is_visible() {
        render_game_over(frame, layout.content, game);
    } else if game.session.state() == SessionState::NotStarted {
        render_buttons(frame, layout.content, game);
    }

    let (status, color) = match game.session.state() {
        SessionState::NotStarted => ("Ready", Color::Cyan),
        SessionState::Playing => ("Flying", Color::Green),
        SessionState::GameOver => ("Game Over", Color::Red),
    };
    render_status_bar(
        frame,
        layout.status_bar,
        status,
        color,
        &[
            ("[Space]", "Flap"),
            ("[S]", "Pass pipe"),
            ("[X]", "Crash"),
            ("[Enter]", "Play"),
            ("[Esc]", "Menu"),
        ],
    );
}

/// One `|` per live obstacle.
fn obstacle_strip(game: &GameScene) -> String {
    let mut strip: String = game.obstacles.iter().map(|_| "| ").collect();
    strip.truncate(strip.trim_end().len());
    strip
}

fn render_game_over(frame: &mut Frame, area: Rect, game: &GameScene) {
    let overlay = centered_rows(area, 7);
    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Score: {}", game.session.score())),
        Line::from(""),
        button_line(game),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_buttons(frame: &mut Frame, area: Rect, game: &GameScene) {
    let row = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(button_line(game)).alignment(Alignment::Center),
        row,
    );
}

fn button_line(game: &GameScene) -> Line<'_> {
    let mut spans = Vec::new();
    if let Some(span) = button_span(&game.hud.play_button, "Enter") {
        spans.push(span);
    }
    if let Some(span) = button_span(&game.hud.menu_button, "Esc") {
        spans.push(Span::raw("   "));
        spans.push(span);
    }
    Line::from(spans)
}
