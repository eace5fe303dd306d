use crate::classify::classify_swipe;
use crate::config::{ConfigError, RawSwipeConfig, SwipeConfig};
use crate::model::{Point, SwipeResult};
use crate::state::GestureSession;

/// Turns touch-start/touch-end pairs into swipe results.
///
/// Malformed sequences are tolerated: an end without a start is ignored, and a start
/// while a touch is already down restarts the gesture from the new point.
#[derive(Debug, Clone, Default)]
pub struct SwipeDetector {
    config: SwipeConfig,
    session: GestureSession,
}

impl SwipeDetector {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            session: GestureSession::default(),
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Individual setters validate on every call; a rejected value leaves the rest intact.
    pub fn config_mut(&mut self) -> &mut SwipeConfig {
        &mut self.config
    }

    /// Apply every field of `raw` independently. Rejected fields keep their current
    /// value and are logged; the first rejection is returned.
    pub fn reconfigure(&mut self, raw: RawSwipeConfig) -> Result<(), ConfigError> {
        let c = &mut self.config;
        let results = [
            c.set_time_threshold(raw.time_threshold),
            c.set_threshold_x(raw.threshold_x),
            c.set_threshold_y(raw.threshold_y),
            c.set_tick_ms(raw.tick_ms),
        ];
        let mut first = None;
        for err in results.into_iter().filter_map(Result::err) {
            log::error!("{err}; keeping previous value");
            first.get_or_insert(err);
        }
        match first {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_open()
    }

    pub fn touch_start(&mut self, at: Point, at_ms: f64) {
        if let Some(prev) = self.session.begin(at, at_ms) {
            log::warn!(
                "touch start at ({}, {}) while a gesture from ({}, {}) was open; restarting",
                at.x,
                at.y,
                prev.start.x,
                prev.start.y
            );
        } else {
            log::debug!("gesture started at ({}, {})", at.x, at.y);
        }
    }

    /// Close the gesture and classify it if it lasted long enough.
    /// Returns `None` for taps and for an end with no matching start.
    pub fn touch_end(&mut self, at: Point, at_ms: f64) -> Option<SwipeResult> {
        let Some(done) = self.session.finish(at, at_ms, self.config.tick_ms()) else {
            log::debug!("touch end at ({}, {}) with no open gesture; ignored", at.x, at.y);
            return None;
        };
        if done.elapsed_ms < self.config.time_threshold_ms() {
            log::debug!(
                "tap: {}ms < {}ms threshold",
                done.elapsed_ms,
                self.config.time_threshold_ms()
            );
            return None;
        }
        let res = classify_swipe(
            done.start,
            done.end,
            self.config.threshold_x(),
            self.config.threshold_y(),
        );
        log::info!("swipe after {}ms: {:?}", done.elapsed_ms, res);
        Some(res)
    }

    /// Discard any open gesture. Used for touch cancellation and teardown.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.session.cancel();
        if cancelled {
            log::debug!("open gesture cancelled");
        }
        cancelled
    }
}
