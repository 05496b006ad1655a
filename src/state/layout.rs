//! Ring geometry for the 11x11 board outline.
//!
//! The 40-square loop runs clockwise around the perimeter of an 11x11 grid:
//! square 0 (GO) sits bottom-right, 0..=10 cross the bottom edge right to
//! left, 10..=20 climb the left edge, 20..=30 cross the top, 30..=39 descend
//! the right edge back towards GO.

use crate::constants::TOTAL_SQUARES;

/// Grid cells per board edge.
pub const GRID: u32 = 11;

/// (column, row) cell for a square index. Row 0 is the top of the grid.
pub fn square_cell(index: usize) -> (u32, u32) {
    debug_assert!(index < TOTAL_SQUARES);
    let i = index as u32;
    match i {
        0..=10 => (GRID - 1 - i, GRID - 1),
        11..=19 => (0, GRID - 1 - (i - 10)),
        20..=30 => (i - 20, 0),
        _ => (GRID - 1, i - 30),
    }
}

/// Inverse of `square_cell` for click hit-testing. Interior cells are not on
/// the ring and return `None`.
pub fn cell_square(col: u32, row: u32) -> Option<usize> {
    if col >= GRID || row >= GRID {
        return None;
    }
    let edge = GRID - 1;
    let index = if row == edge {
        edge - col
    } else if col == 0 && row < edge {
        if row == 0 { 20 } else { 10 + (edge - row) }
    } else if row == 0 {
        20 + col
    } else if col == edge {
        30 + row
    } else {
        return None;
    };
    Some(index as usize % TOTAL_SQUARES)
}
