//! Obstacle recycling: the single pair is moved back to the right edge with a
//! fresh gap every time it leaves the playfield.

use rand::Rng;

use super::types::ObstaclePair;

/// Move the pair to the right edge and roll a new gap start in
/// `[0, playfield_height - gap_size)`.
///
/// A gap that leaves no room (`gap_size >= playfield_height`) pins the gap to
/// row 0 instead of panicking; profiles built from settings never get here.
pub fn recycle<R: Rng>(
    obstacle: &mut ObstaclePair,
    playfield_width: i32,
    playfield_height: i32,
    gap_size: i32,
    rng: &mut R,
) {
    let span = playfield_height - gap_size;
    obstacle.x = playfield_width;
    obstacle.gap_top = if span > 0 { rng.gen_range(0..span) } else { 0 };
    tracing::debug!(x = obstacle.x, gap_top = obstacle.gap_top, "obstacle recycled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minigame::types::{PLAYFIELD_HEIGHT, WIDE_PLAYFIELD_WIDTH};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_recycle_places_pair_at_right_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut pair = ObstaclePair { x: -60, gap_top: 12 };
        recycle(&mut pair, WIDE_PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, 200, &mut rng);
        assert_eq!(pair.x, WIDE_PLAYFIELD_WIDTH);
        assert!(pair.gap_top >= 0 && pair.gap_top < PLAYFIELD_HEIGHT - 200);
    }

    #[test]
    fn test_recycle_gap_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut pair = ObstaclePair::parked();
        for gap in [160, 200, 250, 549] {
            for _ in 0..200 {
                recycle(&mut pair, 400, PLAYFIELD_HEIGHT, gap, &mut rng);
                assert!(pair.gap_top >= 0);
                assert!(pair.gap_top < PLAYFIELD_HEIGHT - gap);
            }
        }
    }

    #[test]
    fn test_recycle_degenerate_gap_pins_to_top() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut pair = ObstaclePair { x: -100, gap_top: 40 };
        recycle(&mut pair, 400, PLAYFIELD_HEIGHT, PLAYFIELD_HEIGHT + 10, &mut rng);
        assert_eq!(pair.x, 400);
        assert_eq!(pair.gap_top, 0);
    }
}
