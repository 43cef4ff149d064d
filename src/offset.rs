//! Grid scroll offset
//!
//! The offset is the sub-cell displacement of the grid. It is wrapped back
//! into `[0, square_size)` after every step so long sessions never drift.

use crate::config::{Direction, GridConfig};

/// Sub-cell scroll displacement, each axis in `[0, square_size)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridOffset {
    pub x: f64,
    pub y: f64,
}

impl GridOffset {
    pub const ORIGIN: GridOffset = GridOffset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Wrap a displaced axis back into `[0, square_size)`
///
/// The `+ square_size` bias keeps the usual single-step case non-negative;
/// the Euclidean remainder covers steps larger than a cell.
#[inline]
pub fn wrap_axis(value: f64, square_size: f64) -> f64 {
    let wrapped = (value + square_size).rem_euclid(square_size);
    // rem_euclid rounds up to exactly `square_size` for tiny negative inputs
    if wrapped >= square_size || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}

/// Offset for the next frame
pub fn advance(config: &GridConfig, offset: GridOffset) -> GridOffset {
    let speed = config.effective_speed();
    let size = config.effective_square_size();

    let GridOffset { x, y } = offset;
    let (x, y) = match config.direction {
        Direction::Right => (wrap_axis(x - speed, size), y),
        Direction::Left => (wrap_axis(x + speed, size), y),
        Direction::Up => (x, wrap_axis(y + speed, size)),
        Direction::Down => (x, wrap_axis(y - speed, size)),
        Direction::Diagonal => (wrap_axis(x - speed, size), wrap_axis(y - speed, size)),
        Direction::None => (x, y),
    };
    GridOffset { x, y }
}
