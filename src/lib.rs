//! Directional swipe detection for Yew apps.
//!
//! The recognizer ([`SwipeDetector`]) is plain Rust and can be driven from any touch
//! source; [`components::swipe::Swipe`] wires it to DOM touch events.

pub mod classify;
pub mod components;
pub mod config;
pub mod model;
pub mod state;
pub mod util;

pub use classify::classify_swipe;
pub use config::{ConfigError, ConfigField, RawSwipeConfig, SwipeConfig};
pub use model::{Direction, Point, SwipeResult};
pub use state::SwipeDetector;
