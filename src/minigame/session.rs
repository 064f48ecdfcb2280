//! A game bound to its best-score storage.
//!
//! The engine in `logic` keeps `best_score` up to date in memory; the session
//! writes it through to the store whenever it rises.

use rand::Rng;

use super::logic::{process_input, set_viewport_width, tick_yaiba, YaibaInput};
use super::types::{Geometry, ProfileTable, YaibaDifficulty, YaibaGame};
use crate::utils::persistence::{load_best_score, save_best_score, ScoreStore};

pub struct YaibaSession<S: ScoreStore> {
    game: YaibaGame,
    store: S,
    /// Highest value written, or attempted, since the last load.
    persisted_best: u32,
    persist_failed: bool,
}

impl<S: ScoreStore> YaibaSession<S> {
    /// Read the stored best score once and build an idle game around it.
    pub fn new(store: S, difficulty: YaibaDifficulty, profiles: ProfileTable) -> Self {
        let best = load_best_score(&store);
        tracing::info!(best_score = best, "loaded best score");
        Self {
            game: YaibaGame::with_profiles(difficulty, profiles, best),
            store,
            persisted_best: best,
            persist_failed: false,
        }
    }

    pub fn game(&self) -> &YaibaGame {
        &self.game
    }

    pub fn geometry(&self) -> Geometry {
        self.game.geometry()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn handle_input<R: Rng>(&mut self, input: YaibaInput, rng: &mut R) {
        process_input(&mut self.game, input, rng);
        self.sync_best_score();
    }

    /// Advance the engine. Returns true if anything moved.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        let changed = tick_yaiba(&mut self.game, dt_ms, rng);
        if changed {
            self.sync_best_score();
        }
        changed
    }

    /// Throw away the current round and re-read the stored best score, as if
    /// the game had just been opened. The selected level is kept.
    pub fn remount(&mut self) {
        let best = load_best_score(&self.store);
        let mut game = YaibaGame::with_profiles(self.game.difficulty, self.game.profiles, best);
        game.pending_playfield_width = self.game.pending_playfield_width;
        game.playfield_width = self.game.pending_playfield_width;
        self.game = game;
        self.persisted_best = best;
    }

    pub fn set_viewport_width(&mut self, viewport_px: u32) {
        set_viewport_width(&mut self.game, viewport_px);
    }

    fn sync_best_score(&mut self) {
        if self.game.best_score <= self.persisted_best {
            return;
        }
        // A failed write is not retried until the best rises again.
        let best = self.game.best_score;
        self.persisted_best = best;
        match save_best_score(&mut self.store, best) {
            Ok(()) => self.persist_failed = false,
            Err(e) if self.persist_failed => {
                tracing::debug!(error = %e, best_score = best, "best score still not persisted")
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist best score");
                self.persist_failed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minigame::types::{YaibaPhase, OBSTACLE_WIDTH};
    use crate::utils::persistence::{MemoryStore, HIGH_SCORE_KEY};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io;

    /// Store whose writes always fail.
    #[derive(Default)]
    struct ReadOnlyStore {
        write_attempts: u32,
    }

    impl ScoreStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&mut self, _key: &str, _value: &str) -> io::Result<()> {
            self.write_attempts += 1;
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn remove(&mut self, _key: &str) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_session_reads_stored_best() {
        let mut store = MemoryStore::new();
        store.write(HIGH_SCORE_KEY, "35").unwrap();
        let session = YaibaSession::new(store, YaibaDifficulty::Easy, ProfileTable::default());
        assert_eq!(session.game().best_score, 35);
        assert_eq!(session.game().phase, YaibaPhase::Idle);
    }

    #[test]
    fn test_new_best_is_written_immediately() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut session =
            YaibaSession::new(MemoryStore::new(), YaibaDifficulty::Easy, ProfileTable::default());
        session.handle_input(YaibaInput::Tap, &mut rng);
        session.game.obstacle.x = -OBSTACLE_WIDTH;

        assert!(session.tick(24, &mut rng));
        assert_eq!(session.game().score, 7);
        assert_eq!(session.store().read(HIGH_SCORE_KEY).as_deref(), Some("7"));
    }

    #[test]
    fn test_lower_score_does_not_overwrite() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut store = MemoryStore::new();
        store.write(HIGH_SCORE_KEY, "70").unwrap();
        let mut session = YaibaSession::new(store, YaibaDifficulty::Easy, ProfileTable::default());
        session.handle_input(YaibaInput::Tap, &mut rng);
        session.game.obstacle.x = -OBSTACLE_WIDTH;

        session.tick(24, &mut rng);
        assert_eq!(session.game().score, 7);
        assert_eq!(session.store().read(HIGH_SCORE_KEY).as_deref(), Some("70"));
    }

    #[test]
    fn test_remount_resets_round_and_keeps_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut session =
            YaibaSession::new(MemoryStore::new(), YaibaDifficulty::Medium, ProfileTable::default());
        session.handle_input(YaibaInput::SelectDifficulty(YaibaDifficulty::Hard), &mut rng);
        session.handle_input(YaibaInput::Tap, &mut rng);
        session.game.obstacle.x = -OBSTACLE_WIDTH;
        session.tick(24, &mut rng);
        session.set_viewport_width(1000);

        session.remount();
        let game = session.game();
        assert_eq!(game.phase, YaibaPhase::Idle);
        assert_eq!(game.difficulty, YaibaDifficulty::Hard);
        assert_eq!(game.score, 0);
        assert_eq!(game.best_score, 7);
        assert_eq!(game.playfield_width, crate::minigame::WIDE_PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_failed_write_is_attempted_once_per_record() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut session = YaibaSession::new(
            ReadOnlyStore::default(),
            YaibaDifficulty::Easy,
            ProfileTable::default(),
        );
        session.handle_input(YaibaInput::Tap, &mut rng);
        session.game.obstacle.x = -OBSTACLE_WIDTH;

        session.tick(24, &mut rng);
        assert_eq!(session.game().best_score, 7);
        assert_eq!(session.store().write_attempts, 1);

        for _ in 0..20 {
            session.tick(24, &mut rng);
        }
        assert_eq!(session.game().phase, YaibaPhase::Playing);
        assert_eq!(session.store().write_attempts, 1);

        session.game.obstacle.x = -OBSTACLE_WIDTH;
        session.tick(24, &mut rng);
        assert_eq!(session.game().best_score, 14);
        assert_eq!(session.store().write_attempts, 2);
    }
}
