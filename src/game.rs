//! This module contains the interactive game state that presentation layers
//! drive: a [Board] together with the active
//! [Difficulty](crate::Difficulty), the currently selected cell and a
//! completion flag.
//!
//! The [GameState] applies user edits to the selected cell, silently ignores
//! edits on given cells, and revalidates the board after every change, so
//! the validity flags and the completion flag always reflect the post-edit
//! state.
//!
//! # Example
//!
//! ```
//! use sudoku_forge::Difficulty;
//! use sudoku_forge::game::{Direction, GameState};
//!
//! let mut game = GameState::new_default(Difficulty::Medium);
//!
//! game.select_cell(4, 4).unwrap();
//! game.move_selection(Direction::Down);
//! assert_eq!(Some((4, 5)), game.selected_cell());
//!
//! // A fresh puzzle with 45 blanked cells cannot be complete.
//! assert!(!game.is_complete());
//! ```

use crate::{Board, Difficulty};
use crate::error::{SudokuError, SudokuResult};
use crate::generator;
use crate::rules;

use rand::Rng;
use rand::rngs::ThreadRng;

/// An enumeration of the four directions in which the selection can be moved
/// by [GameState::move_selection], mirroring arrow-key navigation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {

    /// Decrement the selected row, clamping at the top edge.
    Up,

    /// Increment the selected row, clamping at the bottom edge.
    Down,

    /// Decrement the selected column, clamping at the left edge.
    Left,

    /// Increment the selected column, clamping at the right edge.
    Right
}

/// The state of one interactive game: the current [Board], the active
/// [Difficulty], the selected cell and a completion flag. The wrapped random
/// number generator is used whenever a new puzzle has to be created, that
/// is, at construction, on [GameState::new_game] and on
/// [GameState::change_difficulty].
///
/// Edits are applied through [GameState::enter_digit] and
/// [GameState::clear_digit]. Both revalidate the board and recompute the
/// completion flag against the edited state, so a validation never observes
/// a stale board.
pub struct GameState<R: Rng> {
    rng: R,
    board: Board,
    difficulty: Difficulty,
    selected: Option<(usize, usize)>,
    complete: bool
}

impl GameState<ThreadRng> {

    /// Creates a new game with a fresh puzzle of the given difficulty, using
    /// a [ThreadRng] to generate the puzzle.
    pub fn new_default(difficulty: Difficulty) -> GameState<ThreadRng> {
        GameState::new(difficulty, rand::thread_rng())
    }
}

impl<R: Rng> GameState<R> {

    /// Creates a new game with a fresh puzzle of the given difficulty. The
    /// provided random number generator is used for this and all future
    /// puzzles of this game state, so a seeded generator makes the whole
    /// session reproducible.
    pub fn new(difficulty: Difficulty, mut rng: R) -> GameState<R> {
        let board = generator::create_puzzle_with(&mut rng, difficulty);

        GameState {
            rng,
            board,
            difficulty,
            selected: None,
            complete: false
        }
    }

    /// Gets a reference to the current [Board].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets the active [Difficulty].
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Gets the size of the current board on one axis. This is 6 for
    /// [Difficulty::Kids] and 9 for all other difficulties.
    pub fn grid_size(&self) -> usize {
        self.board.size()
    }

    /// Indicates whether the current puzzle is solved, that is, every cell
    /// is filled and conflict-free. Once complete, the only transitions out
    /// of this state are [GameState::new_game] and
    /// [GameState::change_difficulty].
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Gets the coordinates of the currently selected cell in the form
    /// `(column, row)`, or `None` if no cell is selected.
    pub fn selected_cell(&self) -> Option<(usize, usize)> {
        self.selected
    }

    /// Selects the cell at the specified position. Subsequent digit edits
    /// apply to this cell.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the selected cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the selected cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn select_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        let size = self.board.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        self.selected = Some((column, row));
        Ok(())
    }

    /// Moves the selection one cell in the given direction, clamping at the
    /// edges of the board, so the selection always stays in the range
    /// `[0, size - 1]` on both axes. If no cell is selected, this is a
    /// no-op.
    pub fn move_selection(&mut self, direction: Direction) {
        let max = self.board.size() - 1;

        if let Some((column, row)) = self.selected {
            let (column, row) = match direction {
                Direction::Up => (column, row.saturating_sub(1)),
                Direction::Down => (column, (row + 1).min(max)),
                Direction::Left => (column.saturating_sub(1), row),
                Direction::Right => ((column + 1).min(max), row)
            };

            self.selected = Some((column, row));
        }
    }

    fn after_edit(&mut self) {
        self.board = rules::revalidate(&self.board);
        self.complete = rules::is_complete(&self.board);
    }

    /// Enters the given digit into the selected cell, as a user edit. If no
    /// cell is selected or the selected cell is a given cell, the edit is
    /// ignored and `Ok(false)` is returned. Otherwise the digit is written,
    /// the board is revalidated and the completion flag is recomputed, and
    /// `Ok(true)` is returned.
    ///
    /// # Arguments
    ///
    /// * `digit`: The digit to enter. Must be in the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidNumber` If `digit` is not in the specified
    /// range.
    pub fn enter_digit(&mut self, digit: usize) -> SudokuResult<bool> {
        if let Some((column, row)) = self.selected {
            let changed = self.board.enter_digit(column, row, digit)?;

            if changed {
                self.after_edit();
            }

            Ok(changed)
        }
        else {
            Ok(false)
        }
    }

    /// Removes the digit from the selected cell, as a user edit. If no cell
    /// is selected or the selected cell is a given cell, the edit is ignored
    /// and `Ok(false)` is returned. Otherwise the cell is emptied, the board
    /// is revalidated and the completion flag is recomputed, and `Ok(true)`
    /// is returned.
    ///
    /// # Errors
    ///
    /// None. The result type matches [GameState::enter_digit] so callers can
    /// route both edits through the same handling.
    pub fn clear_digit(&mut self) -> SudokuResult<bool> {
        if let Some((column, row)) = self.selected {
            let changed = self.board.clear_digit(column, row)?;

            if changed {
                self.after_edit();
            }

            Ok(changed)
        }
        else {
            Ok(false)
        }
    }

    /// Starts a new game at the current difficulty. The board is replaced
    /// with a fresh puzzle, the selection is cleared and the completion flag
    /// is reset.
    pub fn new_game(&mut self) {
        self.board =
            generator::create_puzzle_with(&mut self.rng, self.difficulty);
        self.selected = None;
        self.complete = false;
    }

    /// Switches to the given difficulty and starts a new game. The board is
    /// discarded and replaced wholesale, never patched in place, since the
    /// grid size may differ between difficulties.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.new_game();
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;

    use rand_chacha::ChaCha8Rng;

    fn kids_game() -> GameState<ChaCha8Rng> {
        GameState::new(Difficulty::Kids, ChaCha8Rng::seed_from_u64(42))
    }

    #[test]
    fn new_game_state_matches_difficulty() {
        let game = kids_game();

        assert_eq!(6, game.grid_size());
        assert_eq!(Difficulty::Kids, game.difficulty());
        assert_eq!(36 - 15, game.board().count_givens());
        assert_eq!(None, game.selected_cell());
        assert!(!game.is_complete());
    }

    #[test]
    fn selection_moves_and_clamps() {
        let mut game = kids_game();
        game.select_cell(0, 0).unwrap();

        game.move_selection(Direction::Up);
        game.move_selection(Direction::Left);
        assert_eq!(Some((0, 0)), game.selected_cell());

        game.move_selection(Direction::Right);
        game.move_selection(Direction::Down);
        assert_eq!(Some((1, 1)), game.selected_cell());

        for _ in 0..10 {
            game.move_selection(Direction::Right);
            game.move_selection(Direction::Down);
        }

        assert_eq!(Some((5, 5)), game.selected_cell());
    }

    #[test]
    fn selection_rejects_out_of_bounds() {
        let mut game = kids_game();

        assert_eq!(Err(SudokuError::OutOfBounds), game.select_cell(6, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), game.select_cell(0, 6));
    }

    #[test]
    fn move_without_selection_is_noop() {
        let mut game = kids_game();
        game.move_selection(Direction::Down);

        assert_eq!(None, game.selected_cell());
    }

    #[test]
    fn edit_without_selection_is_noop() {
        let mut game = kids_game();

        assert_eq!(Ok(false), game.enter_digit(3));
        assert_eq!(Ok(false), game.clear_digit());
    }

    fn find_cell(game: &GameState<ChaCha8Rng>, given: bool)
            -> (usize, usize) {
        let size = game.grid_size();

        for row in 0..size {
            for column in 0..size {
                if game.board().get(column, row).unwrap().is_given()
                        == given {
                    return (column, row);
                }
            }
        }

        panic!("No matching cell found.");
    }

    #[test]
    fn edit_on_given_cell_is_ignored() {
        let mut game = kids_game();
        let (column, row) = find_cell(&game, true);
        let value = game.board().get(column, row).unwrap().value();
        game.select_cell(column, row).unwrap();

        assert_eq!(Ok(false), game.enter_digit(value % 6 + 1));
        assert_eq!(Ok(false), game.clear_digit());
        assert_eq!(value, game.board().get(column, row).unwrap().value());
    }

    #[test]
    fn edit_on_editable_cell_applies_and_revalidates() {
        let mut game = kids_game();
        let (column, row) = find_cell(&game, false);
        game.select_cell(column, row).unwrap();

        assert_eq!(Ok(true), game.enter_digit(1));
        assert_eq!(1, game.board().get(column, row).unwrap().value());

        assert_eq!(Ok(true), game.clear_digit());
        assert!(game.board().get(column, row).unwrap().is_empty());
        assert!(game.board().get(column, row).unwrap().is_valid());
    }

    #[test]
    fn edit_rejects_invalid_digit() {
        let mut game = kids_game();
        let (column, row) = find_cell(&game, false);
        game.select_cell(column, row).unwrap();

        assert_eq!(Err(SudokuError::InvalidNumber), game.enter_digit(0));
        assert_eq!(Err(SudokuError::InvalidNumber), game.enter_digit(7));
    }

    #[test]
    fn conflicting_edit_flags_cells_but_stays_editable() {
        let mut game = kids_game();
        let (column, row) = find_cell(&game, false);

        // Force a conflict by copying a digit from the same row.
        let size = game.grid_size();
        let conflicting = (0..size)
            .filter(|&c| c != column)
            .find_map(|c| {
                let cell = game.board().get(c, row).unwrap();

                if cell.is_empty() { None } else { Some(cell.value()) }
            });

        if let Some(digit) = conflicting {
            game.select_cell(column, row).unwrap();
            game.enter_digit(digit).unwrap();

            assert!(!game.board().get(column, row).unwrap().is_valid());
            assert!(!game.is_complete());

            // The conflicting entry remains editable.
            assert_eq!(Ok(true), game.clear_digit());
            assert!(game.board().get(column, row).unwrap().is_valid());
        }
    }

    fn solve_completely(game: &mut GameState<ChaCha8Rng>) {
        // Fill every editable cell by re-deriving the digits with a
        // deterministic fill of the remaining grid.
        let mut solution = game.board().value_grid();
        crate::generator::Generator::new(ChaCha8Rng::seed_from_u64(0))
            .fill(&mut solution)
            .unwrap();

        let size = game.grid_size();

        for row in 0..size {
            for column in 0..size {
                if !game.board().get(column, row).unwrap().is_given() {
                    game.select_cell(column, row).unwrap();
                    game.enter_digit(solution.get(column, row).unwrap())
                        .unwrap();
                }
            }
        }
    }

    #[test]
    fn filling_all_cells_completes_game() {
        let mut game = kids_game();
        solve_completely(&mut game);

        assert!(game.board().is_full());
        assert!(game.is_complete());
    }

    #[test]
    fn new_game_resets_state() {
        let mut game = kids_game();
        solve_completely(&mut game);
        assert!(game.is_complete());

        game.new_game();

        assert!(!game.is_complete());
        assert_eq!(None, game.selected_cell());
        assert_eq!(36 - 15, game.board().count_givens());
    }

    #[test]
    fn change_difficulty_replaces_board() {
        let mut game = kids_game();
        game.select_cell(5, 5).unwrap();

        game.change_difficulty(Difficulty::Hard);

        assert_eq!(Difficulty::Hard, game.difficulty());
        assert_eq!(9, game.grid_size());
        assert_eq!(81 - 55, game.board().count_givens());
        assert_eq!(None, game.selected_cell());
        assert!(!game.is_complete());
    }
}
