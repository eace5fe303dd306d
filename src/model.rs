//! Core data types for swipe detection.
//! Coordinates follow the browser convention: origin top-left, Y grows downward.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Right => "→",
            Direction::Down => "↓",
            Direction::Left => "←",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Left => "Left",
        }
    }
}

/// Directions a completed gesture satisfied.
///
/// The flags are independent: a diagonal gesture may set one horizontal and one
/// vertical flag. A `false` flag means the axis threshold was not met, not that the
/// opposite direction was confirmed. Serializes to `{"up":..,"right":..,"down":..,"left":..}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeResult {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl SwipeResult {
    pub fn contains(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    /// True when no axis met its threshold.
    pub fn is_empty(&self) -> bool {
        !(self.up || self.right || self.down || self.left)
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}
