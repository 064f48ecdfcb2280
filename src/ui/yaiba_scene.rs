//! UI rendering for the Wings no Yaiba minigame.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use yaiba::minigame::{Geometry, Rect as FieldRect, YaibaDifficulty, YaibaGame, YaibaPhase};

use super::game_common::{
    create_game_layout, game_layout, render_center_callout, render_info_panel_frame,
    render_status_bar,
};

const INFO_PANEL_WIDTH: u16 = 24;

/// Terminal columns are treated as this many pixels wide when deciding the
/// playfield width.
pub const CELL_PX_WIDTH: u32 = 8;

const CONTROLS: [(&str, &str); 5] = [
    ("[Space/Click]", "Flap"),
    ("[1/2/3]", "Level"),
    ("[H]", "Home"),
    ("[G]", "Games"),
    ("[Q]", "Quit"),
];

/// Area the playfield is drawn into for a given screen size.
pub fn playfield_area(screen: Rect) -> Rect {
    game_layout(screen, INFO_PANEL_WIDTH).content
}

/// Render the game scene.
pub fn render_yaiba(frame: &mut Frame, area: Rect, game: &YaibaGame) {
    let layout = create_game_layout(
        frame,
        area,
        " Wings no Yaiba ",
        Color::Red,
        INFO_PANEL_WIDTH,
    );

    render_play_area(frame, layout.content, &game.geometry());
    match game.phase {
        YaibaPhase::Idle => {
            render_center_callout(frame, layout.content, "Click To Start", Color::Red)
        }
        YaibaPhase::GameOver => render_center_callout(
            frame,
            layout.content,
            "Game Over! Click to Restart",
            Color::Red,
        ),
        YaibaPhase::Playing => {}
    }
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// What a terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Player,
    Pipe,
}

/// Classify the cell at (`col`, `row`) by sampling its center in playfield
/// pixels.
fn classify(geometry: &Geometry, col: u16, row: u16, cols: u16, rows: u16) -> Cell {
    let px = (f64::from(col) + 0.5) * f64::from(geometry.playfield_width) / f64::from(cols);
    let py = (f64::from(row) + 0.5) * f64::from(geometry.playfield_height) / f64::from(rows);

    let inside = |r: &FieldRect| {
        !r.is_empty()
            && px >= f64::from(r.left)
            && px < f64::from(r.right())
            && py >= f64::from(r.top)
            && py < f64::from(r.bottom())
    };

    if inside(&geometry.player) {
        Cell::Player
    } else if inside(&geometry.top_obstacle) || inside(&geometry.bottom_obstacle) {
        Cell::Pipe
    } else {
        Cell::Sky
    }
}

/// Render the playfield, scaled to fill `area`.
fn render_play_area(frame: &mut Frame, area: Rect, geometry: &Geometry) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| match classify(geometry, col, row, area.width, area.height) {
                    Cell::Player => Span::styled(
                        "█",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::Sky => Span::styled(" ", Style::default().bg(Color::Rgb(78, 192, 202))),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &YaibaGame) {
    let (text, color) = match game.phase {
        YaibaPhase::Idle => ("Press Space or click to start!".to_string(), Color::Yellow),
        YaibaPhase::Playing => (
            format!("Score: {}   High Score: {}", game.score, game.best_score),
            Color::Green,
        ),
        YaibaPhase::GameOver => (
            format!("Crashed with {} points", game.score),
            Color::Red,
        ),
    };
    render_status_bar(frame, area, &text, color, &CONTROLS);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &YaibaGame) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(game.score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" High Score: ", label),
            Span::styled(game.best_score.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Level:", label)),
    ];

    for (i, difficulty) in YaibaDifficulty::ALL.into_iter().enumerate() {
        let selected = difficulty == game.difficulty;
        let style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            label
        };
        let marker = if selected { ">" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" {} [{}] {}", marker, i + 1, difficulty.name()),
            style,
        )));
    }

    let profile = game.profile();
    lines.push(Line::from(""));
    for (name, amount) in [
        ("Gravity", profile.gravity),
        ("Speed", profile.obstacle_speed),
        ("Gap", profile.gap_size),
        ("Jump", profile.jump_impulse),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}: ", name), label),
            Span::styled(amount.to_string(), Style::default().fg(Color::Green)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaiba::minigame::{ObstaclePair, PLAYER_START_Y};

    #[test]
    fn test_player_cell_is_found() {
        let mut game = YaibaGame::new(YaibaDifficulty::Medium, 0);
        game.obstacle = ObstaclePair { x: 300, gap_top: 100 };
        let geometry = game.geometry();

        // 400x550 field on a 40x55 grid: one cell is 10x10 px.
        let col = 11; // center x = 115
        let row = (PLAYER_START_Y / 10 + 1) as u16; // center y = 315
        assert_eq!(classify(&geometry, col, row, 40, 55), Cell::Player);
        assert_eq!(classify(&geometry, 32, 5, 40, 55), Cell::Pipe);
        assert_eq!(classify(&geometry, 32, 20, 40, 55), Cell::Sky);
        assert_eq!(classify(&geometry, 32, 40, 40, 55), Cell::Pipe);
    }

    #[test]
    fn test_playfield_area_excludes_info_panel() {
        let screen = Rect::new(0, 0, 100, 40);
        let field = playfield_area(screen);
        assert!(field.right() <= screen.width - INFO_PANEL_WIDTH);
        assert!(field.height >= 10);
    }
}
