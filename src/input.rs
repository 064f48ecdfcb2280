//! Keyboard and mouse dispatch for every screen.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::layout::Rect;
use yaiba::minigame::{YaibaDifficulty, YaibaInput, YaibaSession};
use yaiba::navigation::{Destination, Navigator};
use yaiba::utils::persistence::ScoreStore;

use crate::ui::yaiba_scene::playfield_area;
use crate::Screen;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// What a key means inside the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameKey {
    Game(YaibaInput),
    Navigate(Destination),
    Quit,
}

fn map_game_key(code: KeyCode) -> GameKey {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => GameKey::Game(YaibaInput::Tap),
        KeyCode::Char('1') => GameKey::Game(YaibaInput::SelectDifficulty(YaibaDifficulty::Easy)),
        KeyCode::Char('2') => GameKey::Game(YaibaInput::SelectDifficulty(YaibaDifficulty::Medium)),
        KeyCode::Char('3') => GameKey::Game(YaibaInput::SelectDifficulty(YaibaDifficulty::Hard)),
        KeyCode::Char('h') | KeyCode::Char('H') => GameKey::Navigate(Destination::Home),
        KeyCode::Char('g') | KeyCode::Char('G') => GameKey::Navigate(Destination::GameMenu),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameKey::Quit,
        _ => GameKey::Game(YaibaInput::Other),
    }
}

/// Main dispatcher for key presses.
pub fn handle_key<S: ScoreStore, R: Rng>(
    key: KeyEvent,
    screen: &mut Screen,
    session: &mut YaibaSession<S>,
    rng: &mut R,
) -> InputResult {
    match *screen {
        Screen::Home => match key.code {
            KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Enter => {
                screen.return_to_game_menu();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
            _ => {}
        },
        Screen::GameMenu => match key.code {
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
                session.remount();
                *screen = Screen::Yaiba;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => screen.return_home(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
            _ => {}
        },
        Screen::Yaiba => match map_game_key(key.code) {
            GameKey::Game(input) => session.handle_input(input, rng),
            GameKey::Navigate(destination) => screen.navigate(destination),
            GameKey::Quit => return InputResult::Quit,
        },
    }
    InputResult::Continue
}

/// A left click inside the playfield is a tap; everything else is ignored.
pub fn handle_mouse<S: ScoreStore, R: Rng>(
    mouse: MouseEvent,
    terminal_area: Rect,
    screen: Screen,
    session: &mut YaibaSession<S>,
    rng: &mut R,
) {
    if screen != Screen::Yaiba {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let field = playfield_area(terminal_area);
    let inside = mouse.column >= field.x
        && mouse.column < field.x + field.width
        && mouse.row >= field.y
        && mouse.row < field.y + field.height;
    if inside {
        session.handle_input(YaibaInput::Tap, rng);
    }
}
