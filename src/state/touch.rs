// Single-pointer touch session state.
use crate::model::Point;

/// A touch that has gone down but not yet up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpenGesture {
    pub start: Point,
    pub started_at_ms: f64,
}

/// Immutable record of a finished touch, consumed by classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletedGesture {
    pub start: Point,
    pub end: Point,
    pub elapsed_ms: f64,
}

impl OpenGesture {
    pub fn finish(self, end: Point, at_ms: f64, tick_ms: Option<f64>) -> CompletedGesture {
        let mut elapsed = at_ms - self.started_at_ms;
        if elapsed < 0.0 {
            log::warn!(
                "touch ended {:.1}ms before it started; treating as zero duration",
                -elapsed
            );
            elapsed = 0.0;
        }
        if let Some(tick) = tick_ms {
            elapsed = (elapsed / tick).floor() * tick;
        }
        CompletedGesture {
            start: self.start,
            end,
            elapsed_ms: elapsed,
        }
    }
}

/// Holds at most one open gesture per input surface.
#[derive(Default, Debug, Clone)]
pub struct GestureSession {
    open: Option<OpenGesture>,
}

impl GestureSession {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Start a gesture. A gesture that is already open is replaced and returned.
    pub fn begin(&mut self, start: Point, at_ms: f64) -> Option<OpenGesture> {
        self.open.replace(OpenGesture {
            start,
            started_at_ms: at_ms,
        })
    }

    /// Close the open gesture. `None` when no touch was down.
    pub fn finish(&mut self, end: Point, at_ms: f64, tick_ms: Option<f64>) -> Option<CompletedGesture> {
        self.open.take().map(|g| g.finish(end, at_ms, tick_ms))
    }

    /// Drop the open gesture without completing it.
    pub fn cancel(&mut self) -> bool {
        self.open.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_measures_duration_between_timestamps() {
        let mut s = GestureSession::default();
        s.begin(Point::new(1.0, 2.0), 1_000.0);
        let done = s.finish(Point::new(3.0, 4.0), 1_110.0, None).unwrap();
        assert_eq!(done.elapsed_ms, 110.0);
        assert_eq!(done.start, Point::new(1.0, 2.0));
        assert_eq!(done.end, Point::new(3.0, 4.0));
        assert!(!s.is_open());
    }

    #[test]
    fn tick_quantization_rounds_down() {
        let g = OpenGesture {
            start: Point::default(),
            started_at_ms: 0.0,
        };
        assert_eq!(g.finish(Point::default(), 109.9, Some(10.0)).elapsed_ms, 100.0);
        assert_eq!(g.finish(Point::default(), 9.0, Some(10.0)).elapsed_ms, 0.0);
    }

    #[test]
    fn backwards_clock_clamps_to_zero() {
        let g = OpenGesture {
            start: Point::default(),
            started_at_ms: 500.0,
        };
        assert_eq!(g.finish(Point::default(), 400.0, None).elapsed_ms, 0.0);
    }

    #[test]
    fn begin_while_open_returns_replaced_gesture() {
        let mut s = GestureSession::default();
        assert!(s.begin(Point::new(1.0, 1.0), 0.0).is_none());
        let old = s.begin(Point::new(9.0, 9.0), 50.0).unwrap();
        assert_eq!(old.start, Point::new(1.0, 1.0));
        let done = s.finish(Point::default(), 150.0, None).unwrap();
        assert_eq!(done.start, Point::new(9.0, 9.0));
        assert_eq!(done.elapsed_ms, 100.0);
    }

    #[test]
    fn finish_or_cancel_without_begin_does_nothing() {
        let mut s = GestureSession::default();
        assert!(s.finish(Point::default(), 10.0, None).is_none());
        assert!(!s.cancel());
    }
}
