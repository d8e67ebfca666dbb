//! Axis-aligned overlap predicates
//!
//! Shared by the bullet-alien pass, the block merge pass, and the
//! block-ship pickup test. All comparisons are strict: a point or edge
//! exactly on a boundary does not count as touching.

use glam::Vec2;

/// True when `point` falls strictly inside the rect at `origin` with `size`.
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x > origin.x
        && point.x < origin.x + size.x
        && point.y > origin.y
        && point.y < origin.y + size.y
}

/// True when two axis-aligned rects strictly overlap.
pub fn rects_overlap(a: Vec2, a_size: Vec2, b: Vec2, b_size: Vec2) -> bool {
    a.x < b.x + b_size.x
        && a.x + a_size.x > b.x
        && a.y < b.y + b_size.y
        && a.y + a_size.y > b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_inside() {
        let origin = Vec2::new(100.0, 50.0);
        let size = Vec2::new(40.0, 30.0);

        assert!(point_in_rect(Vec2::new(120.0, 65.0), origin, size));
        assert!(!point_in_rect(Vec2::new(90.0, 65.0), origin, size));
        assert!(!point_in_rect(Vec2::new(120.0, 90.0), origin, size));
    }

    #[test]
    fn test_point_on_edge_is_outside() {
        let origin = Vec2::new(100.0, 50.0);
        let size = Vec2::new(40.0, 30.0);

        // Strict comparisons: boundary points miss
        assert!(!point_in_rect(Vec2::new(100.0, 65.0), origin, size));
        assert!(!point_in_rect(Vec2::new(140.0, 65.0), origin, size));
        assert!(!point_in_rect(Vec2::new(120.0, 50.0), origin, size));
        assert!(!point_in_rect(Vec2::new(120.0, 80.0), origin, size));
    }

    #[test]
    fn test_rects_overlap() {
        let size = Vec2::new(40.0, 40.0);

        assert!(rects_overlap(
            Vec2::new(0.0, 0.0),
            size,
            Vec2::new(30.0, 30.0),
            size
        ));
        assert!(!rects_overlap(
            Vec2::new(0.0, 0.0),
            size,
            Vec2::new(100.0, 0.0),
            size
        ));
    }

    #[test]
    fn test_rects_touching_edges_do_not_overlap() {
        let size = Vec2::new(40.0, 40.0);

        // Shared edge at x=40
        assert!(!rects_overlap(
            Vec2::new(0.0, 0.0),
            size,
            Vec2::new(40.0, 0.0),
            size
        ));
    }
}
