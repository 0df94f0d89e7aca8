//! Horizontal swipe classification.
//!
//! A touch gesture is reduced to its start and end x coordinates. The
//! difference `start - end` is positive when the finger travelled right to
//! left.
//!
//! | Gesture | `diff` | Result | Navigation |
//! |---------|--------|--------|------------|
//! | right → left | `> threshold` | [`Swipe::Left`] | forward (+1) |
//! | left → right | `< -threshold` | [`Swipe::Right`] | backward (−1) |
//! | short move | within `±threshold` | [`Swipe::None`] | none |

use crate::cursor::Direction;

/// Minimum horizontal travel, in pixels, for a gesture to count as a swipe.
pub const DEFAULT_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    None,
}

impl Swipe {
    /// Swiping left advances, swiping right goes back.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Swipe::Left => Some(Direction::Forward),
            Swipe::Right => Some(Direction::Backward),
            Swipe::None => None,
        }
    }
}

/// Classify a gesture. Non-finite coordinates never produce a swipe.
pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> Swipe {
    let diff = start_x - end_x;
    if !diff.is_finite() {
        Swipe::None
    } else if diff > threshold {
        Swipe::Left
    } else if diff < -threshold {
        Swipe::Right
    } else {
        Swipe::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeClassifier {
    pub threshold: f64,
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SwipeClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn classify(&self, start_x: f64, end_x: f64) -> Swipe {
        classify(start_x, end_x, self.threshold)
    }
}
