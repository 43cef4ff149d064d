//! Grid painting
//!
//! Paints one frame of the grid for a [`Session`]: background, cell
//! fills (hover color layered on the hovered cell) and one-pixel borders.

use super::{Canvas, Rect};
use crate::model::Session;
use crate::offset::GridOffset;
use crate::pointer::grid_anchor;
use crate::viewport::ViewportState;

/// Border line width in logical pixels
const BORDER_WIDTH: f64 = 1.0;

/// One visible cell and where it lands on the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Index from the top-left visible cell, same scheme as `HoveredCell`
    pub col: i64,
    pub row: i64,
    /// Cell square in logical pixels, snapped to whole units
    pub rect: Rect,
}

/// Round half up, like a canvas snapping coordinates
#[inline]
fn snap(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Number of cells needed from `anchor` until `extent + square_size` is covered
fn cells_along(anchor: f64, extent: f64, square_size: f64) -> i64 {
    let count = ((extent + square_size - anchor) / square_size).ceil();
    if count.is_finite() && count > 0.0 {
        count as i64
    } else {
        0
    }
}

/// Every cell that intersects the viewport, row by row
///
/// Cells start at the anchor shared with the pointer mapper, so a cell's
/// `(col, row)` is exactly what the mapper reports for a pointer over it.
pub fn visible_cells(
    viewport: &ViewportState,
    offset: GridOffset,
    square_size: f64,
) -> impl Iterator<Item = GridCell> {
    let anchor_x = grid_anchor(offset.x, square_size);
    let anchor_y = grid_anchor(offset.y, square_size);
    let shift_x = offset.x % square_size;
    let shift_y = offset.y % square_size;
    let cols = cells_along(anchor_x, viewport.logical_width, square_size);
    let rows = cells_along(anchor_y, viewport.logical_height, square_size);

    (0..rows).flat_map(move |row| {
        (0..cols).map(move |col| {
            let x = anchor_x + col as f64 * square_size;
            let y = anchor_y + row as f64 * square_size;
            GridCell {
                col,
                row,
                rect: Rect::new(
                    snap(x - shift_x),
                    snap(y - shift_y),
                    square_size,
                    square_size,
                ),
            }
        })
    })
}

/// Paint one full frame of the session's grid
pub fn paint_grid(canvas: &mut dyn Canvas, session: &Session) {
    let palette = *session.palette();
    let viewport = session.viewport;
    let square_size = session.square_size();

    canvas.fill_rect(
        Rect::new(0.0, 0.0, viewport.logical_width, viewport.logical_height),
        palette.background,
    );

    for cell in visible_cells(&viewport, session.offset, square_size) {
        canvas.fill_rect(cell.rect, palette.fill);
        // Hover paints over the fill so a translucent hover color tints it
        if session.hovered.matches(cell.col, cell.row) {
            canvas.fill_rect(cell.rect, palette.hover_fill);
        }

        let border = Rect::new(
            cell.rect.x + BORDER_WIDTH / 2.0,
            cell.rect.y + BORDER_WIDTH / 2.0,
            square_size,
            square_size,
        );
        canvas.stroke_rect(border, palette.border, BORDER_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::pointer::HoveredCell;
    use crate::theme::Color;
    use crate::view::frame::blend_colors;
    use crate::view::Frame;

    fn session_80x40(config: GridConfig) -> Session {
        let mut session = Session::new(config);
        session.viewport = ViewportState {
            logical_width: 80.0,
            logical_height: 40.0,
            width_px: 80,
            height_px: 40,
            scale_factor: 1.0,
        };
        session
    }

    #[test]
    fn test_translucent_hover_blends_over_cell_fill() {
        let config = GridConfig {
            fill_color: Color::rgb(0x80, 0x80, 0x80),
            background_color: Color::rgb(0, 0, 0),
            hover_fill_color: Color::rgba(0, 0, 0xff, 0x80),
            ..GridConfig::default()
        };
        let mut session = session_80x40(config);
        session.hovered = HoveredCell::Cell { col: 0, row: 0 };

        let mut frame = Frame::new(80, 40);
        paint_grid(&mut frame, &session);

        let expected = blend_colors(0xFF808080, 0x800000FF, 128.0 / 255.0);
        assert_eq!(frame.get_pixel(20, 20), expected);
        // Gray from the fill shows through the blue
        assert!(((frame.get_pixel(20, 20) >> 16) & 0xFF) >= 0x3F);
        // The cell that isn't hovered keeps the plain fill
        assert_eq!(frame.get_pixel(60, 20), 0xFF808080);
    }

    #[test]
    fn test_cells_cover_viewport_plus_one() {
        let viewport = ViewportState {
            logical_width: 100.0,
            logical_height: 40.0,
            width_px: 100,
            height_px: 40,
            scale_factor: 1.0,
        };
        let cells: Vec<_> = visible_cells(&viewport, GridOffset::ORIGIN, 40.0).collect();
        // x: 0, 40, 80, 120 (< 140); y: 0, 40 (< 80)
        assert_eq!(cells.len(), 4 * 2);
        assert_eq!(cells[0].rect, Rect::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(cells.last().map(|c| (c.col, c.row)), Some((3, 1)));
    }

    #[test]
    fn test_cells_shift_with_offset() {
        let viewport = ViewportState {
            logical_width: 80.0,
            logical_height: 40.0,
            width_px: 80,
            height_px: 40,
            scale_factor: 1.0,
        };
        let first = visible_cells(&viewport, GridOffset::new(35.0, 10.0), 40.0)
            .next()
            .map(|c| c.rect);
        assert_eq!(first, Some(Rect::new(-35.0, -10.0, 40.0, 40.0)));
    }
}
