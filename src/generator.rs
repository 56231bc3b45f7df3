//! This module contains logic for generating random puzzles.
//!
//! Generation is done in two steps: filling a complete grid with a
//! [Generator] and then blanking a difficulty-dependent number of cells with
//! a [Carver]. The [create_puzzle] and [create_puzzle_with] entry points
//! combine both steps according to a [Difficulty](crate::Difficulty).

use crate::{Board, Difficulty, Grid};
use crate::error::{SudokuError, SudokuResult};
use crate::rules;

use rand::Rng;
use rand::rngs::ThreadRng;

pub(crate) fn shuffle<T>(rng: &mut impl Rng,
        values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut vec: Vec<T> = values.into_iter().collect();

    for i in 1..vec.len() {
        let j = rng.gen_range(0..=i);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly fills a [Grid] with digits such that no digit
/// repeats in any row, column or box. It uses a random number generator to
/// decide the content, so every invocation can yield a different grid. For
/// most cases, sensible defaults are provided by [Generator::new_default].
///
/// ```
/// use sudoku_forge::generator::Generator;
/// use sudoku_forge::rules;
///
/// let mut generator = Generator::new_default();
/// let grid = generator.generate(3, 3).unwrap();
///
/// assert!(grid.is_full());
/// assert!(rules::grid_obeys_rules(&grid));
/// ```
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits. Providing a seeded generator makes the
    /// output reproducible.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut Grid, column: usize, row: usize)
            -> bool {
        let size = grid.size();

        if row == size {
            return true;
        }

        let next_column = (column + 1) % size;
        let next_row =
            if next_column == 0 { row + 1 } else { row };

        if grid.get(column, row).unwrap() != 0 {
            return self.fill_rec(grid, next_column, next_row);
        }

        for digit in shuffle(&mut self.rng, 1..=size) {
            if rules::placement_allowed(grid, column, row, digit) {
                grid.set(column, row, digit).unwrap();

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given [Grid] with random digits such that no digit repeats
    /// in any row, column or box, keeping all already present digits. If
    /// that is not possible, an error will be returned.
    ///
    /// Cells are visited in row-major scan order. For each empty cell, the
    /// candidate digits are tried in a freshly shuffled order; a candidate
    /// that passes [rules::placement_allowed](crate::rules::placement_allowed)
    /// is placed tentatively and the rest of the grid is filled recursively.
    /// If that fails, the cell is reset to empty and the next candidate is
    /// tried (backtracking).
    ///
    /// If no error is returned, it is guaranteed that the grid is full and
    /// [rules::grid_obeys_rules](crate::rules::grid_obeys_rules) holds
    /// afterwards. Otherwise, the grid remains unchanged. For an empty grid
    /// of one of the supported play shapes (3x3 or 3x2 boxes), filling
    /// always succeeds.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to fill with random digits.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unfillable` If there is no rule-satisfying completion
    /// of the digits already present in the grid.
    pub fn fill(&mut self, grid: &mut Grid) -> SudokuResult<()> {
        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::Unfillable)
        }
    }

    /// Generates a new random [Grid] that is completely filled with digits
    /// such that no digit repeats in any row, column or box.
    ///
    /// # Arguments
    ///
    /// * `box_width`: The horizontal dimension of one sub-box of the grid.
    /// For a classic grid, this is 3. Must be greater than 0.
    /// * `box_height`: The vertical dimension of one sub-box of the grid.
    /// For a classic grid, this is 3. Must be greater than 0.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` If `box_width` or `box_height` is
    /// invalid (zero).
    /// * `SudokuError::Unfillable` If there are no full grids with the given
    /// dimensions. This does not occur for the supported play shapes.
    pub fn generate(&mut self, box_width: usize, box_height: usize)
            -> SudokuResult<Grid> {
        let mut grid = Grid::new(box_width, box_height)?;
        self.fill(&mut grid)?;
        Ok(grid)
    }
}

/// A carver turns a complete solution [Grid] into a playable [Board] by
/// wrapping every digit as a given cell and then blanking a requested number
/// of randomly chosen cells, which become empty and user-editable. A random
/// number generator decides which cells are blanked.
///
/// No check is made that the carved puzzle has a unique solution; the engine
/// only guarantees local consistency of the remaining givens.
///
/// ```
/// use sudoku_forge::generator::{Carver, Generator};
///
/// let mut generator = Generator::new_default();
/// let solution = generator.generate(3, 2).unwrap();
/// let mut carver = Carver::new_default();
/// let board = carver.carve(&solution, 10).unwrap();
///
/// assert_eq!(36 - 10, board.count_givens());
/// ```
pub struct Carver<R: Rng> {
    rng: R
}

impl Carver<ThreadRng> {

    /// Creates a new carver that uses a [ThreadRng] to choose the blanked
    /// cells.
    pub fn new_default() -> Carver<ThreadRng> {
        Carver::new(rand::thread_rng())
    }
}

impl<R: Rng> Carver<R> {

    /// Creates a new carver that uses the given random number generator to
    /// choose the blanked cells. Providing a seeded generator makes the
    /// output reproducible.
    pub fn new(rng: R) -> Carver<R> {
        Carver {
            rng
        }
    }

    // TODO investigate guaranteeing unique solutions without pulling in a
    // full solver

    /// Carves a puzzle out of the given solution grid. All cells of the
    /// solution are wrapped as given cells, then `cells_to_remove` uniformly
    /// chosen cells are blanked, leaving them empty and user-editable.
    ///
    /// # Arguments
    ///
    /// * `solution`: The complete grid the puzzle is carved from.
    /// * `cells_to_remove`: The number of cells to blank. Must be less than
    /// the total number of cells of the grid, so at least one given cell
    /// remains.
    ///
    /// # Errors
    ///
    /// * `SudokuError::TooManyCellsRemoved` If `cells_to_remove` is greater
    /// than or equal to the total number of cells of `solution`.
    pub fn carve(&mut self, solution: &Grid, cells_to_remove: usize)
            -> SudokuResult<Board> {
        let size = solution.size();

        if cells_to_remove >= size * size {
            return Err(SudokuError::TooManyCellsRemoved);
        }

        let mut board = Board::from_solution(solution);
        let coordinates = (0..size)
            .flat_map(|row| (0..size).map(move |column| (column, row)));

        for (column, row) in shuffle(&mut self.rng, coordinates)
                .into_iter()
                .take(cells_to_remove) {
            board.blank_cell(column, row).unwrap();
        }

        Ok(board)
    }
}

/// Creates a fresh puzzle for the given [Difficulty], using the provided
/// random number generator for both the grid content and the choice of
/// blanked cells. The difficulty selects the box dimensions and the number
/// of blanked cells.
///
/// The difficulty table guarantees valid dimensions and a removal count
/// below the cell count, so unlike the underlying [Generator] and [Carver]
/// operations this function cannot fail.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use sudoku_forge::Difficulty;
/// use sudoku_forge::generator::create_puzzle_with;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let board = create_puzzle_with(&mut rng, Difficulty::Kids);
///
/// // Equal seeds yield equal puzzles.
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// assert_eq!(board, create_puzzle_with(&mut rng, Difficulty::Kids));
/// ```
pub fn create_puzzle_with<R: Rng>(rng: &mut R, difficulty: Difficulty)
        -> Board {
    let solution = Generator::new(&mut *rng)
        .generate(difficulty.box_width(), difficulty.box_height())
        .unwrap();

    Carver::new(rng)
        .carve(&solution, difficulty.removed_cells())
        .unwrap()
}

/// Creates a fresh puzzle for the given [Difficulty], using a [ThreadRng].
/// See [create_puzzle_with] for details.
pub fn create_puzzle(difficulty: Difficulty) -> Board {
    create_puzzle_with(&mut rand::thread_rng(), difficulty)
}
