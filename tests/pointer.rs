//! Pointer mapping tests, including alignment with the painted grid

mod common;

use squaregrid::offset::GridOffset;
use squaregrid::pointer::{on_leave, on_move, HoveredCell, PointerPosition};
use squaregrid::view::visible_cells;
use squaregrid::viewport::ViewportState;

fn viewport(width: f64, height: f64) -> ViewportState {
    ViewportState {
        logical_width: width,
        logical_height: height,
        width_px: width as u32,
        height_px: height as u32,
        scale_factor: 1.0,
    }
}

#[test]
fn test_pointer_at_origin_offset() {
    let cell = on_move(PointerPosition::new(45.0, 5.0), 40.0, GridOffset::ORIGIN);
    assert_eq!(cell, HoveredCell::Cell { col: 1, row: 0 });
}

#[test]
fn test_pointer_on_cell_boundary_belongs_to_next_cell() {
    let cell = on_move(PointerPosition::new(40.0, 80.0), 40.0, GridOffset::ORIGIN);
    assert_eq!(cell, HoveredCell::Cell { col: 1, row: 2 });
}

#[test]
fn test_pointer_follows_scrolled_grid() {
    // With the grid shifted left by 35, the second painted cell spans x in [5, 45)
    let offset = GridOffset::new(35.0, 0.0);
    assert_eq!(
        on_move(PointerPosition::new(4.0, 0.0), 40.0, offset),
        HoveredCell::Cell { col: 0, row: 0 }
    );
    assert_eq!(
        on_move(PointerPosition::new(6.0, 0.0), 40.0, offset),
        HoveredCell::Cell { col: 1, row: 0 }
    );
}

#[test]
fn test_invalid_square_size_has_no_hover() {
    let pos = PointerPosition::new(10.0, 10.0);
    assert_eq!(on_move(pos, 0.0, GridOffset::ORIGIN), HoveredCell::None);
    assert_eq!(on_move(pos, -5.0, GridOffset::ORIGIN), HoveredCell::None);
    assert_eq!(on_move(pos, f64::NAN, GridOffset::ORIGIN), HoveredCell::None);
}

#[test]
fn test_leave_resets_to_sentinel() {
    let (hovered, pointer) = on_leave();
    assert!(hovered.is_none());
    assert_eq!(pointer, PointerPosition::new(-9999.0, -9999.0));
    assert!(pointer.is_outside());
}

#[test]
fn test_hovered_cell_is_the_painted_cell_under_pointer() {
    let view = viewport(200.0, 120.0);
    let offsets = [
        GridOffset::ORIGIN,
        GridOffset::new(35.0, 10.0),
        GridOffset::new(0.5, 39.5),
        GridOffset::new(19.25, 0.75),
    ];

    for offset in offsets {
        let cells: Vec<_> = visible_cells(&view, offset, 40.0).collect();
        // Probe points that sit well inside a cell so snapping never matters
        let mut y = 2.5;
        while y < view.logical_height {
            let mut x = 2.5;
            while x < view.logical_width {
                let hovered = on_move(PointerPosition::new(x, y), 40.0, offset);
                let painted = cells.iter().find(|c| {
                    x >= c.rect.x + 1.0
                        && x < c.rect.x + c.rect.width - 1.0
                        && y >= c.rect.y + 1.0
                        && y < c.rect.y + c.rect.height - 1.0
                });
                if let Some(cell) = painted {
                    assert!(
                        hovered.matches(cell.col, cell.row),
                        "offset {:?} point ({}, {}) painted ({}, {}) hovered {:?}",
                        offset,
                        x,
                        y,
                        cell.col,
                        cell.row,
                        hovered
                    );
                }
                x += 5.0;
            }
            y += 5.0;
        }
    }
}
