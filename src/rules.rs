//! This module contains the rule checks of the engine: the placement check
//! consulted by the [Generator](crate::generator::Generator) and by
//! interactive play, the board revalidation that recomputes every cell's
//! validity flag after an edit, and the completion check.
//!
//! All checks are parameterized by the box dimensions of the grid or board
//! they operate on, so the same code covers the classic 9x9 shape and the
//! 6x6 shape for younger players.
//!
//! # Example
//!
//! ```
//! use sudoku_forge::{Board, Grid};
//! use sudoku_forge::rules;
//!
//! let solution = Grid::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
//!     .unwrap();
//! let mut board = Board::from_solution(&solution);
//! board.blank_cell(0, 0).unwrap();
//!
//! // One missing digit: not complete, but everything entered so far is
//! // conflict-free.
//! let board = rules::revalidate(&board);
//! assert!(!rules::is_complete(&board));
//! assert!(board.cells().iter().all(|c| c.is_valid()));
//! ```

use crate::{Board, Grid};
use crate::util::DigitSet;

fn row_allows(grid: &Grid, column: usize, row: usize, digit: usize) -> bool {
    let size = grid.size();

    for other_column in 0..size {
        if other_column != column &&
                grid.has_number(other_column, row, digit).unwrap() {
            return false;
        }
    }

    true
}

fn column_allows(grid: &Grid, column: usize, row: usize, digit: usize)
        -> bool {
    let size = grid.size();

    for other_row in 0..size {
        if other_row != row &&
                grid.has_number(column, other_row, digit).unwrap() {
            return false;
        }
    }

    true
}

fn box_allows(grid: &Grid, column: usize, row: usize, digit: usize) -> bool {
    let box_width = grid.box_width();
    let box_height = grid.box_height();
    let box_column = (column / box_width) * box_width;
    let box_row = (row / box_height) * box_height;

    for other_row in box_row..(box_row + box_height) {
        for other_column in box_column..(box_column + box_width) {
            if (other_row != row || other_column != column) &&
                    grid.has_number(other_column, other_row, digit).unwrap() {
                return false;
            }
        }
    }

    true
}

/// Indicates whether the given digit can occupy the cell at the specified
/// position without duplicating a digit in the cell's row, column or box. The
/// cell itself is excluded from all three checks, so the digit may or may not
/// already be placed at the checked position.
///
/// This is a pure check. It does not modify the grid, and it does not verify
/// that the proposed placement keeps the grid completable.
///
/// # Arguments
///
/// * `grid`: The grid in which the placement is checked.
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, size[`, otherwise this function panics.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, size[`, otherwise this function panics.
/// * `digit`: The digit whose placement is checked. Digits outside the range
/// `[1, size]` are never present in a grid, so for those this function
/// trivially returns `true`.
pub fn placement_allowed(grid: &Grid, column: usize, row: usize,
        digit: usize) -> bool {
    row_allows(grid, column, row, digit) &&
        column_allows(grid, column, row, digit) &&
        box_allows(grid, column, row, digit)
}

fn rows_obey_rules(grid: &Grid, set: &mut DigitSet) -> bool {
    let size = grid.size();

    for row in 0..size {
        set.clear();

        for column in 0..size {
            let digit = grid.get(column, row).unwrap();

            if digit != 0 && !set.insert(digit).unwrap() {
                return false;
            }
        }
    }

    true
}

fn columns_obey_rules(grid: &Grid, set: &mut DigitSet) -> bool {
    let size = grid.size();

    for column in 0..size {
        set.clear();

        for row in 0..size {
            let digit = grid.get(column, row).unwrap();

            if digit != 0 && !set.insert(digit).unwrap() {
                return false;
            }
        }
    }

    true
}

fn boxes_obey_rules(grid: &Grid, set: &mut DigitSet) -> bool {
    let box_width = grid.box_width();
    let box_height = grid.box_height();

    for box_row in 0..box_width {
        let start_row = box_row * box_height;

        for box_column in 0..box_height {
            let start_column = box_column * box_width;
            set.clear();

            for row in start_row..(start_row + box_height) {
                for column in start_column..(start_column + box_width) {
                    let digit = grid.get(column, row).unwrap();

                    if digit != 0 && !set.insert(digit).unwrap() {
                        return false;
                    }
                }
            }
        }
    }

    true
}

/// Indicates whether the given grid is free of rule violations, that is, no
/// row, column or box contains the same digit more than once. Empty cells
/// are ignored, so a partial grid can obey the rules.
pub fn grid_obeys_rules(grid: &Grid) -> bool {
    let mut set = DigitSet::new(grid.size()).unwrap();

    rows_obey_rules(grid, &mut set) &&
        columns_obey_rules(grid, &mut set) &&
        boxes_obey_rules(grid, &mut set)
}

/// Recomputes the validity flag of every cell of the given board and returns
/// the result as a new board. The input board is not modified.
///
/// A filled cell is valid if and only if its digit does not duplicate a
/// digit in its row, column or box, as decided by [placement_allowed]
/// against the board's current digits. An empty cell is always valid.
///
/// Revalidation is idempotent: running it twice in a row without an edit in
/// between yields the same flags.
pub fn revalidate(board: &Board) -> Board {
    let mut result = board.clone();
    let grid = board.value_grid();
    let size = board.size();

    for row in 0..size {
        for column in 0..size {
            let digit = grid.get(column, row).unwrap();
            let valid = digit == 0 ||
                placement_allowed(&grid, column, row, digit);
            result.set_valid(column, row, valid);
        }
    }

    result
}

/// Indicates whether the given board is a solved puzzle, that is, every cell
/// is filled and every cell's validity flag is set. A board with any
/// remaining empty cell, or any conflicting cell, is incomplete.
///
/// This decision is based on the validity flags stored in the board, so it
/// reflects the state as of the last [revalidate] call.
pub fn is_complete(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty() && c.is_valid())
}
