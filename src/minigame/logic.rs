//! Game logic for Wings no Yaiba: input, fixed-step physics, scoring.

use rand::Rng;

use super::collision::hits_obstacle;
use super::obstacle::recycle;
use super::types::*;

/// Physics step interval in milliseconds.
pub const PHYSICS_TICK_MS: u64 = 24;

/// Longest frame we are willing to catch up on in one call.
const MAX_FRAME_MS: u64 = 100;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YaibaInput {
    /// Click or key press on the playfield.
    Tap,
    /// Switch level; always stops the current round.
    SelectDifficulty(YaibaDifficulty),
    /// Any other key.
    Other,
}

/// Process player input.
pub fn process_input<R: Rng>(game: &mut YaibaGame, input: YaibaInput, rng: &mut R) {
    match input {
        YaibaInput::Tap => tap(game, rng),
        YaibaInput::SelectDifficulty(difficulty) => change_difficulty(game, difficulty),
        YaibaInput::Other => {}
    }
}

/// The single control action: start, restart, or flap.
pub fn tap<R: Rng>(game: &mut YaibaGame, rng: &mut R) {
    match game.phase {
        YaibaPhase::Idle | YaibaPhase::GameOver => start_round(game, rng),
        YaibaPhase::Playing => {
            if game.player.y < PLAYER_HEIGHT {
                game.player.y = 0;
            } else {
                game.player.y = (game.player.y - game.profile().jump_impulse).max(0);
            }
        }
    }
}

/// Reset the round and put the obstacle on the right edge with a fresh gap.
fn start_round<R: Rng>(game: &mut YaibaGame, rng: &mut R) {
    game.playfield_width = game.pending_playfield_width;
    game.phase = YaibaPhase::Playing;
    game.score = 0;
    game.player = Player::new();
    let gap_size = game.profile().gap_size;
    recycle(
        &mut game.obstacle,
        game.playfield_width,
        PLAYFIELD_HEIGHT,
        gap_size,
        rng,
    );
    game.accumulated_time_ms = 0;
    game.tick_count = 0;
    tracing::info!(
        difficulty = game.difficulty.key(),
        playfield_width = game.playfield_width,
        "round started"
    );
}

/// Switch difficulty. Stops the round and parks the obstacle at the fixed
/// default column; the gap is left as it was.
pub fn change_difficulty(game: &mut YaibaGame, difficulty: YaibaDifficulty) {
    game.difficulty = difficulty;
    game.phase = YaibaPhase::Idle;
    game.score = 0;
    game.player = Player::new();
    game.obstacle.x = DEFAULT_PLAYFIELD_WIDTH;
    game.playfield_width = game.pending_playfield_width;
    game.accumulated_time_ms = 0;
    game.tick_count = 0;
    tracing::info!(difficulty = difficulty.key(), "difficulty changed");
}

/// Record the viewport width. A running round keeps its width until it ends.
pub fn set_viewport_width(game: &mut YaibaGame, viewport_px: u32) {
    game.pending_playfield_width = playfield_width_for_viewport(viewport_px);
    if game.phase != YaibaPhase::Playing {
        game.playfield_width = game.pending_playfield_width;
    }
}

/// Advance physics. `dt_ms` is milliseconds since the last call; it is stepped
/// in fixed 24ms increments. Returns true if the game state changed.
pub fn tick_yaiba<R: Rng>(game: &mut YaibaGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.phase != YaibaPhase::Playing {
        return false;
    }

    game.accumulated_time_ms += dt_ms.min(MAX_FRAME_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step(game, rng);
        changed = true;

        if game.phase != YaibaPhase::Playing {
            break;
        }
    }

    changed
}

/// Single 24ms step: vertical motion first, then the obstacle.
pub fn step<R: Rng>(game: &mut YaibaGame, rng: &mut R) {
    if game.phase != YaibaPhase::Playing {
        return;
    }
    game.tick_count += 1;
    let profile = game.profile();

    // 1. Gravity, floor, collision. First hit ends the step.
    if game.player.y < FLOOR_Y {
        game.player.y += profile.gravity;
        if game.player.y >= FLOOR_Y {
            game_over(game);
            return;
        }
        if check_collision(game) {
            game_over(game);
            return;
        }
    }

    // 2. Scroll the obstacle; recycle once it is fully off the left edge.
    if !game.obstacle.is_off_field() {
        game.obstacle.x -= profile.obstacle_speed;
    }
    if game.obstacle.is_off_field() {
        recycle(
            &mut game.obstacle,
            game.playfield_width,
            PLAYFIELD_HEIGHT,
            profile.gap_size,
            rng,
        );
        award_pass(game);
    }
}

/// Whether the player currently overlaps either obstacle half.
pub fn check_collision(game: &YaibaGame) -> bool {
    let geometry = game.geometry();
    hits_obstacle(
        &geometry.player,
        &geometry.top_obstacle,
        &geometry.bottom_obstacle,
    )
}

fn award_pass(game: &mut YaibaGame) {
    game.score += PASS_REWARD;
    if game.score > game.best_score {
        game.best_score = game.score;
        tracing::info!(best_score = game.best_score, "new best score");
    }
}

fn game_over(game: &mut YaibaGame) {
    game.phase = YaibaPhase::GameOver;
    game.accumulated_time_ms = 0;
    tracing::info!(
        score = game.score,
        best_score = game.best_score,
        ticks = game.tick_count,
        "game over"
    );
}
