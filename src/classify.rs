use crate::model::{Point, SwipeResult};

/// Map a start→end displacement onto direction flags.
///
/// Each axis is evaluated on its own and yields at most one flag. Displacement must
/// reach the axis threshold (inclusive) to count. Total over all inputs; equal
/// start and end give an empty result.
pub fn classify_swipe(start: Point, end: Point, threshold_x: f64, threshold_y: f64) -> SwipeResult {
    let mut res = SwipeResult::default();

    if start.x > end.x && start.x - end.x >= threshold_x {
        res.left = true;
    } else if start.x < end.x && end.x - start.x >= threshold_x {
        res.right = true;
    }

    // y grows downward
    if start.y < end.y && end.y - start.y >= threshold_y {
        res.down = true;
    } else if start.y > end.y && start.y - end.y >= threshold_y {
        res.up = true;
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 30.0;

    #[test]
    fn displacement_exactly_at_threshold_counts() {
        let r = classify_swipe(Point::new(100.0, 100.0), Point::new(130.0, 70.0), T, T);
        assert!(r.right);
        assert!(r.up);
        assert!(!r.left && !r.down);
    }

    #[test]
    fn displacement_just_under_threshold_is_ignored() {
        let r = classify_swipe(Point::new(100.0, 100.0), Point::new(70.5, 129.5), T, T);
        assert!(r.is_empty());
    }

    #[test]
    fn no_movement_sets_nothing() {
        let p = Point::new(42.0, 42.0);
        assert!(classify_swipe(p, p, T, T).is_empty());
        // zero thresholds still need a strict displacement to pick a side
        assert!(classify_swipe(p, p, 0.0, 0.0).is_empty());
    }

    #[test]
    fn negative_coordinates_are_handled() {
        let r = classify_swipe(Point::new(-10.0, -10.0), Point::new(-80.0, -90.0), T, T);
        assert!(r.left);
        assert!(r.up);
    }

    #[test]
    fn axes_use_their_own_threshold() {
        let r = classify_swipe(Point::new(0.0, 0.0), Point::new(50.0, 50.0), 60.0, 40.0);
        assert!(!r.right);
        assert!(r.down);
    }

    #[test]
    fn negative_threshold_accepts_any_strict_movement() {
        let r = classify_swipe(Point::new(0.0, 0.0), Point::new(1.0, 0.0), -5.0, -5.0);
        assert!(r.right);
        assert!(!r.up && !r.down);
    }
}
