//! Hooks back out of the game to the surrounding site.

/// Where the "return" buttons lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    GameMenu,
}

/// Implemented by whatever hosts the game. The game never inspects what
/// happens after a navigation request.
pub trait Navigator {
    fn navigate(&mut self, destination: Destination);

    fn return_home(&mut self) {
        self.navigate(Destination::Home);
    }

    fn return_to_game_menu(&mut self) {
        self.navigate(Destination::GameMenu);
    }
}
