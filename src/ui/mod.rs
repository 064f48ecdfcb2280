pub mod game_common;
pub mod hub_scene;
pub mod yaiba_scene;

use ratatui::Frame;
use yaiba::minigame::YaibaGame;

use crate::Screen;

/// Draw whichever screen is active.
pub fn draw(frame: &mut Frame, screen: Screen, game: &YaibaGame) {
    let area = frame.size();
    match screen {
        Screen::Home => hub_scene::render_home(frame, area),
        Screen::GameMenu => hub_scene::render_game_menu(frame, area, game.best_score),
        Screen::Yaiba => yaiba_scene::render_yaiba(frame, area, game),
    }
}
