//! Pointer to grid-cell mapping
//!
//! Cell indices are relative to the top-left visible cell and follow the
//! grid as it scrolls, so the highlight stays on the cell under the pointer
//! rather than on a fixed screen position.

use crate::offset::GridOffset;

/// Cell under the pointer, as `(col, row)` from the top-left visible cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HoveredCell {
    #[default]
    None,
    Cell { col: i64, row: i64 },
}

impl HoveredCell {
    pub fn is_none(&self) -> bool {
        matches!(self, HoveredCell::None)
    }

    pub fn matches(&self, col: i64, row: i64) -> bool {
        matches!(*self, HoveredCell::Cell { col: c, row: r } if c == col && r == row)
    }
}

/// Last pointer position in surface-relative logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Sentinel far outside any surface, used while no pointer is present
    pub const OUTSIDE: PointerPosition = PointerPosition {
        x: -9999.0,
        y: -9999.0,
    };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_outside(&self) -> bool {
        *self == Self::OUTSIDE
    }
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self::OUTSIDE
    }
}

/// Left/top edge of the first visible cell for one axis
///
/// The painter iterates cells from this anchor and the mapper subtracts it,
/// so both must go through this one function.
#[inline]
pub fn grid_anchor(offset: f64, square_size: f64) -> f64 {
    (offset / square_size).floor() * square_size
}

fn cell_index(pos: f64, offset: f64, square_size: f64) -> Option<i64> {
    let anchor = grid_anchor(offset, square_size);
    let index = ((pos + offset - anchor) / square_size).floor();
    (index.is_finite() && index.abs() < i64::MAX as f64).then_some(index as i64)
}

/// Cell under a surface-relative pointer position
///
/// Non-finite coordinates or a non-positive square size give `None`.
pub fn on_move(pos: PointerPosition, square_size: f64, offset: GridOffset) -> HoveredCell {
    if !(square_size.is_finite() && square_size > 0.0) {
        return HoveredCell::None;
    }
    if !(pos.x.is_finite() && pos.y.is_finite()) {
        return HoveredCell::None;
    }

    match (
        cell_index(pos.x, offset.x, square_size),
        cell_index(pos.y, offset.y, square_size),
    ) {
        (Some(col), Some(row)) => HoveredCell::Cell { col, row },
        _ => HoveredCell::None,
    }
}

/// State after the pointer leaves: no hover, position back to the sentinel
pub fn on_leave() -> (HoveredCell, PointerPosition) {
    (HoveredCell::None, PointerPosition::OUTSIDE)
}
