//! Axis-aligned bounding-box collision for the player and obstacle halves.

/// A rectangle in playfield pixels. `right()` and `bottom()` are inclusive
/// edges, so two rectangles that merely touch are considered overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// A rectangle with no area is not drawn.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True unless a separating axis exists between the two rectangles.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.left
            || self.left > other.right()
            || self.bottom() < other.top
            || self.top > other.bottom())
    }
}

/// Check the player against both halves of an obstacle pair.
///
/// A zero-height half still has an edge: a gap starting at row 0 leaves a top
/// half that hits anything touching the ceiling in its column.
pub fn hits_obstacle(player: &Rect, top: &Rect, bottom: &Rect) -> bool {
    player.intersects(top) || player.intersects(bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_on_both_axes_collides() {
        let player = Rect::new(100, 200, 33, 28);
        let top = Rect::new(100, 0, 52, 210);
        assert!(player.intersects(&top));
        assert!(top.intersects(&player));
    }

    #[test]
    fn test_horizontal_separation_never_collides() {
        let player = Rect::new(100, 0, 33, 28);
        for y in [0, 100, 300, 522] {
            let obstacle = Rect::new(200, y, 52, 200);
            assert!(!player.intersects(&obstacle));
        }
    }

    #[test]
    fn test_vertical_separation() {
        let player = Rect::new(100, 300, 33, 28);
        let top = Rect::new(100, 0, 52, 250);
        assert!(!player.intersects(&top));
    }

    #[test]
    fn test_touching_edges_collide() {
        let player = Rect::new(100, 250, 33, 28);
        let top = Rect::new(100, 0, 52, 250);
        assert!(player.intersects(&top));

        let obstacle = Rect::new(133, 250, 52, 50);
        assert!(player.intersects(&obstacle));
    }

    #[test]
    fn test_hits_obstacle_either_half() {
        let player = Rect::new(100, 400, 33, 28);
        let top = Rect::new(110, 0, 52, 100);
        let bottom = Rect::new(110, 410, 52, 140);
        assert!(hits_obstacle(&player, &top, &bottom));

        let safe = Rect::new(100, 200, 33, 28);
        assert!(!hits_obstacle(&safe, &top, &bottom));
    }

    #[test]
    fn test_zero_height_top_half_hits_at_ceiling() {
        let top = Rect::new(110, 0, 52, 0);
        let bottom = Rect::new(110, 250, 52, 300);
        assert!(top.is_empty());

        let at_ceiling = Rect::new(100, 0, 33, 28);
        assert!(hits_obstacle(&at_ceiling, &top, &bottom));

        let one_row_tall = Rect::new(110, 0, 52, 1);
        assert!(hits_obstacle(&at_ceiling, &one_row_tall, &bottom));

        let below = Rect::new(100, 1, 33, 28);
        assert!(!hits_obstacle(&below, &top, &bottom));
    }
}
