//! Home and game-menu screens. These only exist so the game has somewhere to
//! navigate back to.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::game_common::controls_line;

pub fn render_home(frame: &mut Frame, area: Rect) {
    render_card(
        frame,
        area,
        " Home ",
        &[
            "Blood and shadows entwine to form our art.",
            "",
            "Step into the arcade when you are ready.",
        ],
        &[("[G/Enter]", "Game menu"), ("[Q]", "Quit")],
    );
}

pub fn render_game_menu(frame: &mut Frame, area: Rect, best_score: u32) {
    let best = format!("Wings no Yaiba  -  High Score: {}", best_score);
    render_card(
        frame,
        area,
        " Games ",
        &[best.as_str(), "", "Dodge the pillars, one tap at a time."],
        &[("[Enter]", "Play"), ("[H]", "Home"), ("[Q]", "Quit")],
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    body: &[&str],
    controls: &[(&str, &str)],
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "WINGS NO YAIBA",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        body.iter()
            .map(|text| Line::from(Span::styled(*text, Style::default().fg(Color::White)))),
    );
    lines.push(Line::from(""));
    lines.push(controls_line(controls));

    let height = lines.len() as u16;
    let y = inner.y + inner.height.saturating_sub(height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(inner.x, y, inner.width, height.min(inner.height)),
    );
}
