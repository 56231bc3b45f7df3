// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements the engine behind an interactive Sudoku game. It
//! supports the following key features:
//!
//! * Parsing and printing grids
//! * Generating complete boards with a randomized backtracking filler
//! * Carving puzzles out of complete boards by removing a
//! difficulty-dependent number of clues
//! * Real-time validity checks for user edits, tracking a validity flag per
//! cell
//! * A game state wrapper with cell selection, digit entry and completion
//! detection
//!
//! Two board shapes are supported by the same code: the classic 9x9 grid with
//! 3x3 boxes and a simplified 6x6 grid with 2x3 boxes aimed at younger
//! players. All engine operations are parameterized by the box dimensions, so
//! further shapes work as well.
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_forge::Grid;
//!
//! let grid =
//!     Grid::parse("2x2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Generating puzzles
//!
//! Puzzle generation is done in two steps: filling an empty [Grid] with a
//! [Generator](generator::Generator) and then blanking some of its cells with
//! a [Carver](generator::Carver). The [create_puzzle](generator::create_puzzle)
//! entry point combines both steps according to a [Difficulty].
//!
//! ```
//! use sudoku_forge::Difficulty;
//! use sudoku_forge::generator::create_puzzle;
//!
//! let board = create_puzzle(Difficulty::Medium);
//!
//! assert_eq!(9, board.size());
//! assert_eq!(81 - 45, board.count_givens());
//! ```
//!
//! Both the generator and the carver take the random number generator as a
//! parameter, so seeded [Rng](rand::Rng) instances can be used to obtain
//! reproducible puzzles, for example in tests.
//!
//! # Checking a board
//!
//! After every user edit, [rules::revalidate] recomputes the validity flag of
//! each [Cell] and [rules::is_complete] decides whether the puzzle is solved.
//! An example of the underlying placement check is provided below.
//!
//! ```
//! use sudoku_forge::Grid;
//! use sudoku_forge::rules;
//!
//! let grid = Grid::parse("2x2;1,2, , ,3,4, , , , , , , , , , ").unwrap();
//!
//! // A 3 fits into the third cell of the top row, but another 1 does not.
//! assert!(rules::placement_allowed(&grid, 2, 0, 3));
//! assert!(!rules::placement_allowed(&grid, 2, 0, 1));
//! ```
//!
//! # Running a game
//!
//! The [GameState](game::GameState) struct wraps a [Board] together with the
//! active [Difficulty], the selected cell and a completion flag. It applies
//! user edits, ignores edits on given cells and revalidates the board after
//! every change.
//!
//! ```
//! use sudoku_forge::Difficulty;
//! use sudoku_forge::game::{Direction, GameState};
//!
//! let mut game = GameState::new_default(Difficulty::Kids);
//! game.select_cell(0, 0).unwrap();
//! game.move_selection(Direction::Right);
//!
//! assert_eq!(Some((1, 0)), game.selected_cell());
//! assert!(!game.is_complete());
//! ```

pub mod error;
pub mod game;
pub mod generator;
pub mod rules;
pub mod util;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// A grid is a square scratch matrix of raw digits that is organized into
/// boxes of a given width and height in a way that makes the entire grid a
/// square. Consequently, the number of boxes in a row is equal to the box
/// height and vice versa. A cell contains `0` if it is empty and a digit in
/// the range `[1, size]` otherwise.
///
/// In the classic game, the box width and height are both 3. The simplified
/// grid for younger players uses 3x2 boxes, which results in a grid like
/// this:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Grids are the working representation during generation and validation.
/// The presentation layer consumes [Board]s instead, which carry a given-flag
/// and a validity flag per cell.
///
/// `Grid` implements `Display`, but only grids with a size (that is, width or
/// height) of less than or equal to 9 can be displayed with digits 1 to 9.
/// Grids of all other sizes will raise an error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Grid {
    box_width: usize,
    box_height: usize,
    size: usize,
    cells: Vec<usize>
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

fn digit_char(cell: usize) -> char {
    if cell == 0 {
        ' '
    }
    else {
        ('0' as u8 + cell as u8) as char
    }
}

fn horizontal_line(size: usize, box_width: usize, left: char, thin: char,
        thick: char, right: char, fill: char) -> String {
    let mut line = String::new();
    line.push(left);

    for column in 0..size {
        if column > 0 {
            if column % box_width == 0 {
                line.push(thick);
            }
            else {
                line.push(thin);
            }
        }

        line.push(fill);
        line.push(fill);
        line.push(fill);
    }

    line.push(right);
    line
}

fn content_line(grid: &Grid, row: usize) -> String {
    let mut line = String::new();
    line.push('║');

    for column in 0..grid.size {
        if column > 0 {
            if column % grid.box_width == 0 {
                line.push('║');
            }
            else {
                line.push('│');
            }
        }

        line.push(' ');
        line.push(digit_char(grid.cells[index(column, row, grid.size)]));
        line.push(' ');
    }

    line.push('║');
    line
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.size > 9 {
            return Err(fmt::Error::default());
        }

        let top =
            horizontal_line(self.size, self.box_width, '╔', '╤', '╦', '╗',
                '═');
        let thin =
            horizontal_line(self.size, self.box_width, '╟', '┼', '╫', '╢',
                '─');
        let thick =
            horizontal_line(self.size, self.box_width, '╠', '╪', '╬', '╣',
                '═');
        let bottom =
            horizontal_line(self.size, self.box_width, '╚', '╧', '╩', '╝',
                '═');

        for row in 0..self.size {
            if row == 0 {
                writeln!(f, "{}", top)?;
            }
            else if row % self.box_height == 0 {
                writeln!(f, "{}", thick)?;
            }
            else {
                writeln!(f, "{}", thin)?;
            }

            writeln!(f, "{}", content_line(self, row))?;
        }

        write!(f, "{}", bottom)
    }
}

fn parse_dimensions(code: &str) -> Result<(usize, usize), SudokuParseError> {
    let parts: Vec<&str> = code.split('x').collect();

    if parts.len() != 2 {
        return Err(SudokuParseError::MalformedDimensions);
    }

    Ok((parts[0].parse()?, parts[1].parse()?))
}

impl Grid {

    /// Creates a new, empty grid where the boxes have the given dimensions.
    /// The total width and height of the grid will be equal to the product of
    /// `box_width` and `box_height`.
    ///
    /// # Arguments
    ///
    /// * `box_width`: The horizontal dimension of one sub-box of the grid. To
    /// ensure a square grid, this is also the number of boxes that compose
    /// the grid vertically. For a classic grid, this is 3.  Must be greater
    /// than 0.
    /// * `box_height`: The vertical dimension of one sub-box of the grid. To
    /// ensure a square grid, this is also the number of boxes that compose
    /// the grid horizontally. For a classic grid, this is 3. Must be greater
    /// than 0.
    ///
    /// # Errors
    ///
    /// If `box_width` or `box_height` is invalid (zero).
    pub fn new(box_width: usize, box_height: usize) -> SudokuResult<Grid> {
        if box_width == 0 || box_height == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = box_width * box_height;
        let cells = vec![0; size * size];

        Ok(Grid {
            box_width,
            box_height,
            size,
            cells
        })
    }

    /// Parses a code encoding a grid. The code has to be of the format
    /// `<box_width>x<box_height>;<cells>` where `<cells>` is a
    /// comma-separated list of entries, which are either empty, `0`, or a
    /// digit in `[1, size]`. Empty entries and `0` both denote an empty cell.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting. The number of
    /// entries must match the amount of cells in a grid with the given
    /// dimensions, i.e. it must be `(box_width · box_height)²`.
    ///
    /// As an example, the code `2x2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will
    /// parse to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<Grid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(SudokuParseError::WrongNumberOfParts);
        }

        let (box_width, box_height) = parse_dimensions(parts[0])?;
        let mut grid = match Grid::new(box_width, box_height) {
            Ok(grid) => grid,
            Err(_) => return Err(SudokuParseError::InvalidDimensions)
        };
        let size = grid.size();
        let entries: Vec<&str> = parts[1].split(',').collect();

        if entries.len() != size * size {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let digit = entry.parse::<usize>()?;

            if digit > size {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = digit;
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_forge::Grid;
    ///
    /// let mut grid = Grid::new(3, 2).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set(1, 1, 4).unwrap();
    /// grid.set(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = Grid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{}x{};", self.box_width, self.box_height);
        let cells = self.cells.iter()
            .map(|&c| if c == 0 { String::from("") } else { c.to_string() })
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the width (number of columns) of one sub-box of the grid. To
    /// ensure a square grid, this is also the number of boxes that compose
    /// the grid vertically.
    pub fn box_width(&self) -> usize {
        self.box_width
    }

    /// Gets the height (number of rows) of one sub-box of the grid. To ensure
    /// a square grid, this is also the number of boxes that compose the grid
    /// horizontally.
    pub fn box_height(&self) -> usize {
        self.box_height
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position. `0` indicates
    /// an empty cell.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get(&self, column: usize, row: usize) -> SudokuResult<usize> {
        if column >= self.size || row >= self.size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row, self.size)])
        }
    }

    /// Indicates whether the cell at the specified position holds the given
    /// digit. This will return `false` if there is a different digit in that
    /// cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `digit`: The digit to check for in the specified cell. If it is
    /// *not* in the range `[1, size]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, digit: usize)
            -> SudokuResult<bool> {
        let content = self.get(column, row)?;
        Ok(content != 0 && content == digit)
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `digit` is not in the specified
    /// range.
    pub fn set(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<()> {
        if column >= self.size || row >= self.size {
            return Err(SudokuError::OutOfBounds);
        }

        if digit == 0 || digit > self.size {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row, self.size)] = digit;
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear(&mut self, column: usize, row: usize) -> SudokuResult<()> {
        if column >= self.size || row >= self.size {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row, self.size)] = 0;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns the square of
    /// [Grid::size].
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != 0)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }
}

/// One cell of a [Board]. Besides the digit it holds (`0` for an empty
/// cell), a cell tracks whether it was part of the generated puzzle (a
/// *given* cell, immutable from the user's perspective) and whether its
/// current content conflicts with a peer in its row, column or box.
///
/// The validity flag is derived state. It is maintained by
/// [rules::revalidate], which is run after every user edit, and an empty
/// cell is always considered valid.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cell {
    value: usize,
    given: bool,
    valid: bool
}

impl Cell {

    /// Creates a cell that was part of the generated puzzle. It holds the
    /// given digit, is flagged as given and counts as valid.
    pub fn new_given(value: usize) -> Cell {
        Cell {
            value,
            given: true,
            valid: true
        }
    }

    /// Creates an empty, user-editable cell. Empty cells are vacuously
    /// valid.
    pub fn new_empty() -> Cell {
        Cell {
            value: 0,
            given: false,
            valid: true
        }
    }

    /// Gets the digit this cell holds, or `0` if it is empty.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Indicates whether this cell was part of the generated puzzle and is
    /// therefore immutable from the user's perspective.
    pub fn is_given(&self) -> bool {
        self.given
    }

    /// Indicates whether the content of this cell does not conflict with any
    /// peer in its row, column or box, as of the last revalidation. Empty
    /// cells are always valid.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Indicates whether this cell is empty.
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub(crate) fn set_value(&mut self, value: usize) {
        self.value = value;
    }

    pub(crate) fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }
}

/// A board is the user-facing counterpart of a [Grid]: a square matrix of
/// [Cell]s organized into boxes, where each cell carries a given-flag and a
/// validity flag in addition to its digit.
///
/// Given cells are write-once at creation. User edits through
/// [Board::enter_digit] and [Board::clear_digit] silently ignore given cells,
/// so a board created by the [Carver](crate::generator::Carver) never loses
/// its clues. Validity flags are *not* updated by edits; run
/// [rules::revalidate] on the board afterwards.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Board {
    box_width: usize,
    box_height: usize,
    size: usize,
    cells: Vec<Cell>
}

impl Board {

    /// Creates a new board of the given box dimensions where every cell is
    /// empty and user-editable.
    ///
    /// # Errors
    ///
    /// If `box_width` or `box_height` is invalid (zero). In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn new(box_width: usize, box_height: usize) -> SudokuResult<Board> {
        if box_width == 0 || box_height == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = box_width * box_height;

        Ok(Board {
            box_width,
            box_height,
            size,
            cells: vec![Cell::new_empty(); size * size]
        })
    }

    /// Wraps a solution grid into a board. Every filled cell of the grid
    /// becomes a given cell holding the same digit, while empty cells become
    /// empty, user-editable cells. For a full grid, as produced by the
    /// [Generator](crate::generator::Generator), the result consists of
    /// givens only.
    pub fn from_solution(solution: &Grid) -> Board {
        let cells = solution.cells().iter()
            .map(|&value| if value == 0 {
                Cell::new_empty()
            }
            else {
                Cell::new_given(value)
            })
            .collect();

        Board {
            box_width: solution.box_width(),
            box_height: solution.box_height(),
            size: solution.size(),
            cells
        }
    }

    /// Gets the width (number of columns) of one sub-box of the board.
    pub fn box_width(&self) -> usize {
        self.box_width
    }

    /// Gets the height (number of rows) of one sub-box of the board.
    pub fn box_height(&self) -> usize {
        self.box_height
    }

    /// Gets the total size of the board on one axis (horizontally or
    /// vertically).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets a copy of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get(&self, column: usize, row: usize) -> SudokuResult<Cell> {
        if column >= self.size || row >= self.size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row, self.size)])
        }
    }

    /// Enters a digit into the cell at the specified position, as a user
    /// edit. If the cell is a given cell, the edit is ignored and `false` is
    /// returned. Otherwise the digit is written, overwriting any previous
    /// content, and `true` is returned.
    ///
    /// Validity flags are not updated by this method; run
    /// [rules::revalidate] on the board afterwards.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the edited cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the edited cell. Must be in the
    /// range `[0, size[`.
    /// * `digit`: The digit to enter. Must be in the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `digit` is not in the specified
    /// range.
    pub fn enter_digit(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<bool> {
        if column >= self.size || row >= self.size {
            return Err(SudokuError::OutOfBounds);
        }

        if digit == 0 || digit > self.size {
            return Err(SudokuError::InvalidNumber);
        }

        let cell = &mut self.cells[index(column, row, self.size)];

        if cell.is_given() {
            Ok(false)
        }
        else {
            cell.set_value(digit);
            Ok(true)
        }
    }

    /// Removes the digit from the cell at the specified position, as a user
    /// edit. If the cell is a given cell, the edit is ignored and `false` is
    /// returned. Otherwise the cell is emptied, which also makes it valid,
    /// and `true` is returned.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the edited cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the edited cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_digit(&mut self, column: usize, row: usize)
            -> SudokuResult<bool> {
        if column >= self.size || row >= self.size {
            return Err(SudokuError::OutOfBounds);
        }

        let cell = &mut self.cells[index(column, row, self.size)];

        if cell.is_given() {
            Ok(false)
        }
        else {
            cell.set_value(0);
            cell.set_valid(true);
            Ok(true)
        }
    }

    /// Turns the cell at the specified position into an empty, user-editable
    /// cell, even if it is a given cell. This is the primitive with which the
    /// [Carver](crate::generator::Carver) removes clues from a complete
    /// board.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the blanked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the blanked cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn blank_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= self.size || row >= self.size {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row, self.size)] = Cell::new_empty();
        Ok(())
    }

    /// Extracts the raw digits of this board into a [Grid] with the same box
    /// dimensions. Empty cells become `0` entries.
    pub fn value_grid(&self) -> Grid {
        Grid {
            box_width: self.box_width,
            box_height: self.box_height,
            size: self.size,
            cells: self.cells.iter().map(|c| c.value()).collect()
        }
    }

    /// Counts the number of given cells of this board.
    pub fn count_givens(&self) -> usize {
        self.cells.iter().filter(|c| c.is_given()).count()
    }

    /// Indicates whether every cell of this board is filled with a digit.
    /// Note that a full board is not necessarily free of conflicts; use
    /// [rules::is_complete] to check for a solved puzzle.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn set_valid(&mut self, column: usize, row: usize,
            valid: bool) {
        self.cells[index(column, row, self.size)].set_valid(valid);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value_grid().fmt(f)
    }
}

/// An enumeration of the available difficulty levels. The difficulty selects
/// both the board shape and the number of cells the
/// [Carver](crate::generator::Carver) blanks when creating a puzzle.
///
/// | Difficulty | Grid | Boxes | Removed cells |
/// |------------|------|-------|---------------|
/// | `Kids`     | 6x6  | 3x2   | 15            |
/// | `Easy`     | 9x9  | 3x3   | 35            |
/// | `Medium`   | 9x9  | 3x3   | 45            |
/// | `Hard`     | 9x9  | 3x3   | 55            |
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// A simplified 6x6 board with 3x2 boxes and few removed cells, intended
    /// for younger players.
    Kids,

    /// A classic 9x9 board with few removed cells.
    Easy,

    /// A classic 9x9 board with a moderate number of removed cells.
    Medium,

    /// A classic 9x9 board with many removed cells.
    Hard
}

impl Difficulty {

    /// Gets the width of one sub-box of boards with this difficulty.
    pub fn box_width(self) -> usize {
        3
    }

    /// Gets the height of one sub-box of boards with this difficulty.
    pub fn box_height(self) -> usize {
        match self {
            Difficulty::Kids => 2,
            _ => 3
        }
    }

    /// Gets the total size of boards with this difficulty on one axis, that
    /// is, the product of [Difficulty::box_width] and
    /// [Difficulty::box_height].
    pub fn grid_size(self) -> usize {
        self.box_width() * self.box_height()
    }

    /// Gets the number of cells the [Carver](crate::generator::Carver)
    /// blanks when creating a puzzle with this difficulty. This is always
    /// less than the total number of cells, so a puzzle retains at least one
    /// given cell.
    pub fn removed_cells(self) -> usize {
        match self {
            Difficulty::Kids => 15,
            Difficulty::Easy => 35,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let grid_res = Grid::parse("2x2; 1,,,2, ,3,,4, ,2,,, 3,,,");

        if let Ok(grid) = grid_res {
            assert_eq!(2, grid.box_width());
            assert_eq!(2, grid.box_height());
            assert_eq!(1, grid.get(0, 0).unwrap());
            assert_eq!(0, grid.get(1, 0).unwrap());
            assert_eq!(0, grid.get(2, 0).unwrap());
            assert_eq!(2, grid.get(3, 0).unwrap());
            assert_eq!(0, grid.get(0, 1).unwrap());
            assert_eq!(3, grid.get(1, 1).unwrap());
            assert_eq!(0, grid.get(2, 1).unwrap());
            assert_eq!(4, grid.get(3, 1).unwrap());
            assert_eq!(0, grid.get(0, 2).unwrap());
            assert_eq!(2, grid.get(1, 2).unwrap());
            assert_eq!(0, grid.get(2, 2).unwrap());
            assert_eq!(0, grid.get(3, 2).unwrap());
            assert_eq!(3, grid.get(0, 3).unwrap());
            assert_eq!(0, grid.get(1, 3).unwrap());
            assert_eq!(0, grid.get(2, 3).unwrap());
            assert_eq!(0, grid.get(3, 3).unwrap());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    #[test]
    fn parse_explicit_zero_is_empty() {
        let grid = Grid::parse("2x2;0,1,0,2,,,,,,,,,,,,").unwrap();

        assert_eq!(0, grid.get(0, 0).unwrap());
        assert_eq!(1, grid.get(1, 0).unwrap());
        assert_eq!(2, grid.count_clues());
    }

    #[test]
    fn parse_malformed_dimensions() {
        assert_eq!(Err(SudokuParseError::MalformedDimensions),
            Grid::parse("2x2x2;,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_invalid_dimensions() {
        assert_eq!(Err(SudokuParseError::InvalidDimensions),
            Grid::parse("2x0;,"));
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfParts),
            Grid::parse("2x2;,,,,,,,,,,,,,,,;whatever"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            Grid::parse("2x#;,"));
    }

    #[test]
    fn parse_invalid_number() {
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            Grid::parse("2x2;,,,4,,,5,,,,,,,,,"));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            Grid::parse("2x2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3"));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            Grid::parse("2x2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3,4,1"));
    }

    #[test]
    fn to_parseable_string() {
        let mut grid = Grid::new(2, 2).unwrap();

        assert_eq!("2x2;,,,,,,,,,,,,,,,", grid.to_parseable_string().as_str());

        grid.set(0, 0, 1).unwrap();
        grid.set(1, 1, 2).unwrap();
        grid.set(2, 2, 3).unwrap();
        grid.set(3, 3, 4).unwrap();

        assert_eq!("2x2;1,,,,,2,,,,,3,,,,,4",
            grid.to_parseable_string().as_str());
    }

    #[test]
    fn size() {
        let grid3x2 = Grid::new(3, 2).unwrap();
        let grid3x3 = Grid::new(3, 3).unwrap();
        assert_eq!(6, grid3x2.size());
        assert_eq!(9, grid3x3.size());
    }

    #[test]
    fn grid_rejects_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get(4, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set(0, 4, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear(4, 4));
    }

    #[test]
    fn grid_rejects_invalid_digit() {
        let mut grid = Grid::new(2, 2).unwrap();

        assert_eq!(Err(SudokuError::InvalidNumber), grid.set(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set(0, 0, 5));
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = Grid::parse("2x2;,,,,,,,,,,,,,,,").unwrap();
        let partial = Grid::parse("2x2;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let full = Grid::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(5, partial.count_clues());
        assert_eq!(16, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn board_from_solution_wraps_all_cells_as_givens() {
        let solution = Grid::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();
        let board = Board::from_solution(&solution);

        assert_eq!(16, board.count_givens());
        assert!(board.is_full());

        for row in 0..4 {
            for column in 0..4 {
                let cell = board.get(column, row).unwrap();
                assert_eq!(solution.get(column, row).unwrap(), cell.value());
                assert!(cell.is_given());
                assert!(cell.is_valid());
            }
        }
    }

    #[test]
    fn board_edit_ignored_on_given_cell() {
        let solution = Grid::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();
        let mut board = Board::from_solution(&solution);

        assert_eq!(Ok(false), board.enter_digit(0, 0, 4));
        assert_eq!(2, board.get(0, 0).unwrap().value());

        assert_eq!(Ok(false), board.clear_digit(0, 0));
        assert_eq!(2, board.get(0, 0).unwrap().value());
    }

    #[test]
    fn board_edit_applies_to_editable_cell() {
        let mut board = Board::new(2, 2).unwrap();

        assert_eq!(Ok(true), board.enter_digit(1, 2, 3));
        assert_eq!(3, board.get(1, 2).unwrap().value());

        assert_eq!(Ok(true), board.clear_digit(1, 2));
        assert!(board.get(1, 2).unwrap().is_empty());
    }

    #[test]
    fn board_edit_rejects_invalid_digit() {
        let mut board = Board::new(2, 2).unwrap();

        assert_eq!(Err(SudokuError::InvalidNumber),
            board.enter_digit(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber),
            board.enter_digit(0, 0, 5));
        assert_eq!(Err(SudokuError::OutOfBounds),
            board.enter_digit(4, 0, 1));
    }

    #[test]
    fn board_blank_cell_overrides_given() {
        let solution = Grid::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();
        let mut board = Board::from_solution(&solution);

        board.blank_cell(2, 1).unwrap();
        let cell = board.get(2, 1).unwrap();

        assert!(cell.is_empty());
        assert!(!cell.is_given());
        assert!(cell.is_valid());
        assert_eq!(15, board.count_givens());
    }

    #[test]
    fn value_grid_matches_board() {
        let solution = Grid::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();
        let mut board = Board::from_solution(&solution);
        board.blank_cell(3, 3).unwrap();
        let grid = board.value_grid();

        assert_eq!(0, grid.get(3, 3).unwrap());
        assert_eq!(15, grid.count_clues());
        assert_eq!(2, grid.get(0, 0).unwrap());
    }

    #[test]
    fn difficulty_table() {
        assert_eq!(6, Difficulty::Kids.grid_size());
        assert_eq!(9, Difficulty::Easy.grid_size());
        assert_eq!(9, Difficulty::Medium.grid_size());
        assert_eq!(9, Difficulty::Hard.grid_size());

        assert_eq!(15, Difficulty::Kids.removed_cells());
        assert_eq!(35, Difficulty::Easy.removed_cells());
        assert_eq!(45, Difficulty::Medium.removed_cells());
        assert_eq!(55, Difficulty::Hard.removed_cells());
    }

    #[test]
    fn difficulty_leaves_givens() {
        let difficulties = [Difficulty::Kids, Difficulty::Easy,
            Difficulty::Medium, Difficulty::Hard];

        for &difficulty in difficulties.iter() {
            let cells = difficulty.grid_size() * difficulty.grid_size();
            assert!(difficulty.removed_cells() < cells,
                "Difficulty would remove all cells.");
        }
    }

    #[test]
    fn board_serde_round_trip() {
        let solution = Grid::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();
        let mut board = Board::from_solution(&solution);
        board.blank_cell(1, 0).unwrap();
        board.enter_digit(1, 0, 3).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(board, parsed);
    }

    #[test]
    fn display_grid() {
        let grid = Grid::parse("2x2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2")
            .unwrap();
        let expected =
            "╔═══╤═══╦═══╤═══╗\n\
             ║ 1 │   ║ 2 │   ║\n\
             ╟───┼───╫───┼───╢\n\
             ║   │ 3 ║   │ 4 ║\n\
             ╠═══╪═══╬═══╪═══╣\n\
             ║   │   ║ 3 │   ║\n\
             ╟───┼───╫───┼───╢\n\
             ║   │ 1 ║   │ 2 ║\n\
             ╚═══╧═══╩═══╧═══╝";

        assert_eq!(expected, format!("{}", grid));
    }
}
