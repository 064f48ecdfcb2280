//! Wings no Yaiba data structures.
//!
//! All geometry is in playfield pixels with the origin at the top-left corner
//! and y growing downward.

use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// Playfield height (fixed).
pub const PLAYFIELD_HEIGHT: i32 = 550;

/// Playfield width on narrow viewports, and the parking spot used when the
/// difficulty changes.
pub const DEFAULT_PLAYFIELD_WIDTH: i32 = 400;

/// Playfield width on wide viewports.
pub const WIDE_PLAYFIELD_WIDTH: i32 = 450;

/// Viewports at least this wide get the wide playfield.
pub const WIDE_VIEWPORT_MIN_PX: u32 = 768;

/// Player sprite size and fixed column.
pub const PLAYER_WIDTH: i32 = 33;
pub const PLAYER_HEIGHT: i32 = 28;
pub const PLAYER_X: i32 = 100;

/// Vertical position the player is reset to.
pub const PLAYER_START_Y: i32 = 300;

/// Lowest top edge the player can reach before the round ends.
pub const FLOOR_Y: i32 = PLAYFIELD_HEIGHT - PLAYER_HEIGHT;

/// Obstacle width (both halves).
pub const OBSTACLE_WIDTH: i32 = 52;

/// Points awarded each time the obstacle pair scrolls past.
pub const PASS_REWARD: u32 = 7;

/// Pick the playfield width for a viewport of the given width.
pub fn playfield_width_for_viewport(viewport_px: u32) -> i32 {
    if viewport_px >= WIDE_VIEWPORT_MIN_PX {
        WIDE_PLAYFIELD_WIDTH
    } else {
        DEFAULT_PLAYFIELD_WIDTH
    }
}

/// Named difficulty levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YaibaDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl YaibaDifficulty {
    pub const ALL: [YaibaDifficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Lowercase key used in settings files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Built-in tuning for this level.
    pub fn default_profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                gravity: 6,
                obstacle_speed: 3,
                gap_size: 250,
                jump_impulse: 60,
            },
            Self::Medium => DifficultyProfile {
                gravity: 8,
                obstacle_speed: 4,
                gap_size: 200,
                jump_impulse: 50,
            },
            Self::Hard => DifficultyProfile {
                gravity: 10,
                obstacle_speed: 6,
                gap_size: 160,
                jump_impulse: 45,
            },
        }
    }
}

/// Per-level tuning. Values are pixels per 24ms step except `gap_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub gravity: i32,
    pub obstacle_speed: i32,
    pub gap_size: i32,
    pub jump_impulse: i32,
}

impl DifficultyProfile {
    /// Check the profile against a playfield height. Returns a human readable
    /// reason on failure.
    pub fn validate(&self, playfield_height: i32) -> Result<(), String> {
        if self.gravity <= 0 {
            return Err(format!("gravity must be positive, got {}", self.gravity));
        }
        if self.obstacle_speed <= 0 {
            return Err(format!(
                "obstacle_speed must be positive, got {}",
                self.obstacle_speed
            ));
        }
        if self.jump_impulse <= 0 {
            return Err(format!(
                "jump_impulse must be positive, got {}",
                self.jump_impulse
            ));
        }
        if self.gap_size <= 0 || self.gap_size >= playfield_height {
            return Err(format!(
                "gap_size must be between 1 and {}, got {}",
                playfield_height - 1,
                self.gap_size
            ));
        }
        Ok(())
    }
}

/// Tuning for all three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileTable {
    profiles: [DifficultyProfile; 3],
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            profiles: YaibaDifficulty::ALL.map(YaibaDifficulty::default_profile),
        }
    }
}

impl ProfileTable {
    pub fn get(&self, difficulty: YaibaDifficulty) -> DifficultyProfile {
        self.profiles[difficulty.index()]
    }

    pub fn set(&mut self, difficulty: YaibaDifficulty, profile: DifficultyProfile) {
        self.profiles[difficulty.index()] = profile;
    }
}

/// Round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YaibaPhase {
    /// Not started yet, or stopped by a difficulty change.
    Idle,
    Playing,
    GameOver,
}

/// The player sprite. Only the vertical position moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub y: i32,
}

impl Player {
    pub fn new() -> Self {
        Self { y: PLAYER_START_Y }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(PLAYER_X, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// The single obstacle pair that is recycled for the whole round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstaclePair {
    /// Left edge shared by both halves.
    pub x: i32,
    /// Row where the passable gap begins (height of the top half).
    pub gap_top: i32,
}

impl ObstaclePair {
    /// Obstacle parked at the fixed default position with no top half.
    pub fn parked() -> Self {
        Self {
            x: DEFAULT_PLAYFIELD_WIDTH,
            gap_top: 0,
        }
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0, OBSTACLE_WIDTH, self.gap_top)
    }

    pub fn bottom_rect(&self, gap_size: i32, playfield_height: i32) -> Rect {
        let top = self.gap_top + gap_size;
        Rect::new(self.x, top, OBSTACLE_WIDTH, playfield_height - top)
    }

    /// Whether the pair has scrolled fully past the left edge.
    pub fn is_off_field(&self) -> bool {
        self.x < -OBSTACLE_WIDTH
    }
}

impl Default for ObstaclePair {
    fn default() -> Self {
        Self::parked()
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub playfield_width: i32,
    pub playfield_height: i32,
    pub player: Rect,
    pub top_obstacle: Rect,
    pub bottom_obstacle: Rect,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct YaibaGame {
    pub phase: YaibaPhase,
    pub difficulty: YaibaDifficulty,
    pub profiles: ProfileTable,

    pub player: Player,
    pub obstacle: ObstaclePair,

    pub score: u32,
    pub best_score: u32,

    /// Width used by the current round.
    pub playfield_width: i32,
    /// Width reported by the viewport, adopted at the next round boundary.
    pub pending_playfield_width: i32,

    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Steps taken since the round began.
    pub tick_count: u64,
}

impl YaibaGame {
    pub fn new(difficulty: YaibaDifficulty, best_score: u32) -> Self {
        Self::with_profiles(difficulty, ProfileTable::default(), best_score)
    }

    pub fn with_profiles(
        difficulty: YaibaDifficulty,
        profiles: ProfileTable,
        best_score: u32,
    ) -> Self {
        Self {
            phase: YaibaPhase::Idle,
            difficulty,
            profiles,
            player: Player::new(),
            obstacle: ObstaclePair::parked(),
            score: 0,
            best_score,
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            pending_playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.profiles.get(self.difficulty)
    }

    pub fn is_running(&self) -> bool {
        self.phase == YaibaPhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == YaibaPhase::GameOver
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            playfield_width: self.playfield_width,
            playfield_height: PLAYFIELD_HEIGHT,
            player: self.player.rect(),
            top_obstacle: self.obstacle.top_rect(),
            bottom_obstacle: self
                .obstacle
                .bottom_rect(self.profile().gap_size, PLAYFIELD_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = YaibaGame::new(YaibaDifficulty::Medium, 42);
        assert_eq!(game.phase, YaibaPhase::Idle);
        assert_eq!(game.player.y, PLAYER_START_Y);
        assert_eq!(game.obstacle.x, DEFAULT_PLAYFIELD_WIDTH);
        assert_eq!(game.score, 0);
        assert_eq!(game.best_score, 42);
        assert!(!game.is_running());
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_difficulty_parameters() {
        let easy = YaibaDifficulty::Easy.default_profile();
        assert_eq!(
            (easy.gravity, easy.obstacle_speed, easy.gap_size, easy.jump_impulse),
            (6, 3, 250, 60)
        );

        let medium = YaibaDifficulty::Medium.default_profile();
        assert_eq!(
            (medium.gravity, medium.obstacle_speed, medium.gap_size, medium.jump_impulse),
            (8, 4, 200, 50)
        );

        let hard = YaibaDifficulty::Hard.default_profile();
        assert_eq!(
            (hard.gravity, hard.obstacle_speed, hard.gap_size, hard.jump_impulse),
            (10, 6, 160, 45)
        );
    }

    #[test]
    fn test_difficulty_keys() {
        assert_eq!(YaibaDifficulty::from_key("easy"), Some(YaibaDifficulty::Easy));
        assert_eq!(YaibaDifficulty::from_key(" HARD "), Some(YaibaDifficulty::Hard));
        assert_eq!(YaibaDifficulty::from_key("nightmare"), None);
        assert_eq!(YaibaDifficulty::from_index(99), YaibaDifficulty::Medium);
        for d in YaibaDifficulty::ALL {
            assert_eq!(YaibaDifficulty::from_index(d.index()), d);
        }
    }

    #[test]
    fn test_builtin_profiles_are_valid() {
        for d in YaibaDifficulty::ALL {
            assert!(d.default_profile().validate(PLAYFIELD_HEIGHT).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_degenerate_gap() {
        let mut profile = YaibaDifficulty::Hard.default_profile();
        profile.gap_size = PLAYFIELD_HEIGHT;
        assert!(profile.validate(PLAYFIELD_HEIGHT).is_err());
        profile.gap_size = 0;
        assert!(profile.validate(PLAYFIELD_HEIGHT).is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_tuning() {
        let mut profile = YaibaDifficulty::Easy.default_profile();
        profile.gravity = 0;
        assert!(profile.validate(PLAYFIELD_HEIGHT).is_err());
    }

    #[test]
    fn test_viewport_width_breakpoint() {
        assert_eq!(playfield_width_for_viewport(767), DEFAULT_PLAYFIELD_WIDTH);
        assert_eq!(playfield_width_for_viewport(768), WIDE_PLAYFIELD_WIDTH);
        assert_eq!(playfield_width_for_viewport(0), DEFAULT_PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_obstacle_halves_keep_exact_gap() {
        let pair = ObstaclePair { x: 120, gap_top: 90 };
        let top = pair.top_rect();
        let bottom = pair.bottom_rect(200, PLAYFIELD_HEIGHT);
        assert_eq!(top.height, 90);
        assert_eq!(bottom.top, 290);
        assert_eq!(bottom.height, PLAYFIELD_HEIGHT - 200 - 90);
        assert_eq!(bottom.top - top.bottom(), 200);
        assert_eq!(bottom.bottom(), PLAYFIELD_HEIGHT);
    }

    #[test]
    fn test_off_field_threshold() {
        let mut pair = ObstaclePair { x: -OBSTACLE_WIDTH, gap_top: 0 };
        assert!(!pair.is_off_field());
        pair.x -= 1;
        assert!(pair.is_off_field());
    }

    #[test]
    fn test_geometry_uses_current_profile() {
        let mut game = YaibaGame::new(YaibaDifficulty::Easy, 0);
        game.obstacle.gap_top = 100;
        let geo = game.geometry();
        assert_eq!(geo.player, Rect::new(PLAYER_X, PLAYER_START_Y, PLAYER_WIDTH, PLAYER_HEIGHT));
        assert_eq!(geo.bottom_obstacle.top, 350);
        assert_eq!(geo.playfield_height, PLAYFIELD_HEIGHT);
    }
}
