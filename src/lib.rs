// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand and flexible Futoshiki
//! engine. It supports the following key features:
//!
//! * Parsing and printing Futoshiki grids and inequality constraints
//! * Checking validity of partial and complete grids against the row and
//! column uniqueness rules and the inequality constraints
//! * Solving Futoshiki using a plain backtracking algorithm
//! * Solving Futoshiki using constraint propagation over per-cell candidate
//! sets, combined with minimum-remaining-candidates backtracking
//!
//! Note that in this introduction we will mostly be using small grids due
//! to their simpler nature. The engine itself works with any grid size.
//!
//! # Parsing and printing Futoshiki
//!
//! See [FutoshikiGrid::parse] for the exact format of a grid code and
//! [InequalitySet::parse](constraint::InequalitySet::parse) for the format
//! of an inequality code.
//!
//! Codes can be used to exchange puzzles, while pretty prints can be used
//! to display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use futoshiki::FutoshikiGrid;
//!
//! let grid =
//!     FutoshikiGrid::parse("4;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity of Futoshiki
//!
//! To check validity, an instance of [Futoshiki] not only contains the
//! numbers (stored in a [FutoshikiGrid]), but also the
//! [InequalitySet](constraint::InequalitySet) which specifies the ordering
//! constraints between adjacent cells. Inequalities are checked from both
//! of their endpoints, so a violation is detected no matter which of the
//! two related cells was filled last.
//!
//! ```
//! use futoshiki::{Futoshiki, FutoshikiGrid};
//! use futoshiki::constraint::{Inequality, InequalitySet, Orientation};
//!
//! // A grid satisfying the uniqueness rules ...
//! let grid = FutoshikiGrid::parse("2;1,2,2,1").unwrap();
//! let mut inequalities = InequalitySet::new(2).unwrap();
//!
//! // ... but violating the constraint that the top-left cell must exceed
//! // its right neighbor.
//! inequalities
//!     .add(Inequality::new(0, 0, Orientation::Horizontal, true))
//!     .unwrap();
//! let futoshiki = Futoshiki::new(grid, inequalities).unwrap();
//!
//! assert!(!futoshiki.is_valid());
//! ```
//!
//! # Solving Futoshiki
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! totally or partially solve Futoshiki. Two complete implementations are
//! provided: [BacktrackingSolver](solver::BacktrackingSolver), which tests
//! all valid numbers for each cell, and
//! [StrategicBacktrackingSolver](solver::strategy::StrategicBacktrackingSolver),
//! which interleaves constraint propagation with the search and usually
//! visits far fewer states. Both return the first solution they find, or
//! [Solution::Unsolvable](solver::Solution::Unsolvable) if there is none.
//!
//! ```
//! use futoshiki::{Futoshiki, FutoshikiGrid};
//! use futoshiki::solver::{BacktrackingSolver, Solution, Solver};
//! use futoshiki::solver::strategy::{
//!     standard_strategy,
//!     StrategicBacktrackingSolver
//! };
//!
//! // An empty 2x2 grid where the top-left cell must exceed its right
//! // neighbor. This forces the entire grid.
//! let futoshiki = Futoshiki::parse("2;,,,", "2;>, ; , ").unwrap();
//! let expected = FutoshikiGrid::parse("2;2,1,1,2").unwrap();
//!
//! let solution = BacktrackingSolver.solve(&futoshiki);
//! assert_eq!(Solution::Solved(expected.clone()), solution);
//!
//! let solver = StrategicBacktrackingSolver::new(standard_strategy());
//! assert_eq!(Solution::Solved(expected), solver.solve(&futoshiki));
//! ```

pub mod constraint;
pub mod error;
pub mod solver;
pub mod util;

#[cfg(test)]
mod random_tests;

use constraint::InequalitySet;
use error::{
    FutoshikiError,
    FutoshikiParseError,
    FutoshikiParseResult,
    FutoshikiResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Error, Formatter};

/// A Futoshiki grid is a square arrangement of cells, each of which may or
/// may not be occupied by a number. In a solved grid, every row and every
/// column contains each of the numbers 1 to `size` exactly once.
///
/// `FutoshikiGrid` implements `Display`, but only grids with a size of less
/// than or equal to 9 can be displayed with digits 1 to 9. Grids of all
/// other sizes will raise an error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct FutoshikiGrid {
    size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(grid: &FutoshikiGrid, start: char, sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char,
        newline: bool) -> String {
    let size = grid.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else {
            result.push(sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &FutoshikiGrid) -> String {
    line(grid, '┌', '┬', |_| '─', '─', '┐', true)
}

fn separator_line(grid: &FutoshikiGrid) -> String {
    line(grid, '├', '┼', |_| '─', '─', '┤', true)
}

fn bottom_row(grid: &FutoshikiGrid) -> String {
    line(grid, '└', '┴', |_| '─', '─', '┘', false)
}

fn content_row(grid: &FutoshikiGrid, y: usize) -> String {
    line(grid, '│', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ',
        '│', true)
}

impl Display for FutoshikiGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > 9 {
            return Err(Error::default());
        }

        let separator_line = separator_line(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row(self).as_str())?;
            }
            else {
                f.write_str(separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row(self).as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

impl FutoshikiGrid {

    /// Creates a new, empty Futoshiki grid with the given size, that is,
    /// the number of columns and rows.
    ///
    /// # Errors
    ///
    /// If `size` is invalid (zero). In that case,
    /// `FutoshikiError::InvalidDimensions` is returned.
    pub fn new(size: usize) -> FutoshikiResult<FutoshikiGrid> {
        if size == 0 {
            return Err(FutoshikiError::InvalidDimensions);
        }

        Ok(FutoshikiGrid {
            size,
            cells: vec![None; size * size]
        })
    }

    /// Parses a code encoding a Futoshiki grid. The code has to be of the
    /// format `<size>;<cells>` where `<cells>` is a comma-separated list of
    /// entries, which are either empty or a number. The entries are
    /// assigned left-to-right, top-to-bottom, where each row is completed
    /// before the next one is started. Whitespace in the entries is ignored
    /// to allow for more intuitive formatting. The number of entries must
    /// be `size²`.
    ///
    /// As an example, the code `4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` parses
    /// to the following grid:
    ///
    /// ```text
    /// ┌───┬───┬───┬───┐
    /// │ 1 │   │ 2 │   │
    /// ├───┼───┼───┼───┤
    /// │   │ 3 │   │ 4 │
    /// ├───┼───┼───┼───┤
    /// │   │   │   │ 3 │
    /// ├───┼───┼───┼───┤
    /// │   │ 1 │   │ 2 │
    /// └───┴───┴───┴───┘
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `FutoshikiParseError` (see that
    /// documentation).
    pub fn parse(code: &str) -> FutoshikiParseResult<FutoshikiGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(FutoshikiParseError::WrongNumberOfParts);
        }

        let size: usize = parts[0].trim().parse()?;

        if let Ok(mut grid) = FutoshikiGrid::new(size) {
            let numbers: Vec<&str> = parts[1].split(',').collect();

            if numbers.len() != size * size {
                return Err(FutoshikiParseError::WrongNumberOfCells);
            }

            for (i, number_str) in numbers.iter().enumerate() {
                let number_str = number_str.trim();

                if number_str.is_empty() {
                    continue;
                }

                let number = number_str.parse::<usize>()?;

                if number == 0 || number > size {
                    return Err(FutoshikiParseError::InvalidNumber);
                }

                grid.cells[i] = Some(number);
            }

            Ok(grid)
        }
        else {
            Err(FutoshikiParseError::InvalidDimensions)
        }
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [FutoshikiGrid::parse](#method.parse). That is, a grid that is
    /// converted to a string and parsed again will not change, as is
    /// illustrated below.
    ///
    /// ```
    /// use futoshiki::FutoshikiGrid;
    ///
    /// let mut grid = FutoshikiGrid::new(4).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 3).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = FutoshikiGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.size);
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `FutoshikiError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> FutoshikiResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(FutoshikiError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row, size)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, size]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `FutoshikiError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> FutoshikiResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `FutoshikiError::OutOfBounds` If either `column` or `row` are not
    /// in the specified range.
    /// * `FutoshikiError::InvalidNumber` If `number` is not in the
    /// specified range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> FutoshikiResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(FutoshikiError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(FutoshikiError::InvalidNumber);
        }

        self.cells[index(column, row, size)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is,
    /// if it contains a number, that number is removed. If the cell is
    /// already empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `FutoshikiError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> FutoshikiResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(FutoshikiError::OutOfBounds);
        }

        self.cells[index(column, row, size)] = None;
        Ok(())
    }

    fn verify_dimensions(&self, other: &FutoshikiGrid)
            -> FutoshikiResult<()> {
        if self.size != other.size {
            Err(FutoshikiError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`. The other grid must have
    /// the same size as this one.
    ///
    /// # Errors
    ///
    /// If the sizes are not the same. In that case,
    /// `FutoshikiError::InvalidDimensions` is returned.
    pub fn assign(&mut self, other: &FutoshikiGrid) -> FutoshikiResult<()> {
        self.verify_dimensions(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with
    /// a number. In this case, [FutoshikiGrid::count_clues] returns the
    /// square of [FutoshikiGrid::size].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [FutoshikiGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another
    /// one. That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` grid are not the same. In that
    /// case, `FutoshikiError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &FutoshikiGrid) -> FutoshikiResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            }))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition
    /// is met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` grid are not the same. In that
    /// case, `FutoshikiError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &FutoshikiGrid)
            -> FutoshikiResult<bool> {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }

    /// Gets a mutable reference to the vector which holds the cells. They
    /// are in left-to-right, top-to-bottom order, where rows are together.
    pub fn cells_mut(&mut self) -> &mut Vec<Option<usize>> {
        &mut self.cells
    }
}

impl From<FutoshikiGrid> for String {
    fn from(grid: FutoshikiGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for FutoshikiGrid {
    type Error = FutoshikiParseError;

    fn try_from(code: String) -> FutoshikiParseResult<FutoshikiGrid> {
        FutoshikiGrid::parse(&code)
    }
}

/// A Futoshiki represents a grid of numbers together with the inequality
/// constraints between adjacent cells. The numbers may or may not fulfill
/// the rules, but there are methods to check that.
///
/// There is no guarantee that the Futoshiki is solvable, however there are
/// ways to check that (see the [solver] module).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "(FutoshikiGrid, InequalitySet)",
    try_from = "(FutoshikiGrid, InequalitySet)")]
pub struct Futoshiki {
    grid: FutoshikiGrid,
    inequalities: InequalitySet
}

impl Futoshiki {

    /// Creates a new Futoshiki with an empty grid of the given size and no
    /// inequality constraints.
    ///
    /// # Errors
    ///
    /// If `size` is invalid (zero). In that case,
    /// `FutoshikiError::InvalidDimensions` is returned.
    pub fn new_empty(size: usize) -> FutoshikiResult<Futoshiki> {
        Ok(Futoshiki {
            grid: FutoshikiGrid::new(size)?,
            inequalities: InequalitySet::new(size)?
        })
    }

    /// Creates a new Futoshiki from the given grid, which may already
    /// contain some numbers, and the given inequality constraints. Note
    /// that it is *not* checked whether the grid fulfills the rules - it is
    /// perfectly legal to create an invalid Futoshiki here. The
    /// inequalities themselves have already been verified to reference
    /// cells within their grid by the [InequalitySet].
    ///
    /// # Errors
    ///
    /// If the sizes of the grid and the inequality set are not the same. In
    /// that case, `FutoshikiError::InvalidDimensions` is returned.
    pub fn new(grid: FutoshikiGrid, inequalities: InequalitySet)
            -> FutoshikiResult<Futoshiki> {
        if grid.size() != inequalities.size() {
            return Err(FutoshikiError::InvalidDimensions);
        }

        Ok(Futoshiki {
            grid,
            inequalities
        })
    }

    /// Parses a grid code and an inequality code into a Futoshiki. See
    /// [FutoshikiGrid::parse] and
    /// [InequalitySet::parse](constraint::InequalitySet::parse) for the
    /// formats. Note that it is not required that the grid matches the
    /// constraints. It is perfectly legal to parse an invalid Futoshiki.
    ///
    /// # Errors
    ///
    /// If the parsing of either code fails, or if the two codes specify
    /// different sizes (`FutoshikiParseError::MismatchedDimensions`).
    pub fn parse(grid_code: &str, inequality_code: &str)
            -> FutoshikiParseResult<Futoshiki> {
        let grid = FutoshikiGrid::parse(grid_code)?;
        let inequalities = InequalitySet::parse(inequality_code)?;

        Futoshiki::new(grid, inequalities)
            .map_err(|_| FutoshikiParseError::MismatchedDimensions)
    }

    /// Gets a reference to the [FutoshikiGrid] of this Futoshiki.
    pub fn grid(&self) -> &FutoshikiGrid {
        &self.grid
    }

    /// Gets a mutable reference to the [FutoshikiGrid] of this Futoshiki.
    pub fn grid_mut(&mut self) -> &mut FutoshikiGrid {
        &mut self.grid
    }

    /// Gets a reference to the [InequalitySet] of this Futoshiki.
    pub fn inequalities(&self) -> &InequalitySet {
        &self.inequalities
    }

    fn check_number(&self, grid: &FutoshikiGrid, column: usize, row: usize,
            number: usize) -> bool {
        let size = grid.size();

        for other_column in 0..size {
            if other_column != column &&
                    grid.has_number(other_column, row, number).unwrap() {
                return false;
            }
        }

        for other_row in 0..size {
            if other_row != row &&
                    grid.has_number(column, other_row, number).unwrap() {
                return false;
            }
        }

        for inequality in self.inequalities.incident(column, row) {
            if inequality.origin() == (column, row) {
                let (neighbor_column, neighbor_row) = inequality.neighbor();
                let neighbor =
                    grid.get_cell(neighbor_column, neighbor_row).unwrap();

                if let Some(neighbor_number) = neighbor {
                    if !inequality.holds(number, neighbor_number) {
                        return false;
                    }
                }
            }
            else {
                let (origin_column, origin_row) = inequality.origin();
                let origin =
                    grid.get_cell(origin_column, origin_row).unwrap();

                if let Some(origin_number) = origin {
                    if !inequality.holds(origin_number, number) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_grid(&self, grid: &FutoshikiGrid) -> bool {
        let size = grid.size();

        for row in 0..size {
            for column in 0..size {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !self.check_number(grid, column, row, number) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Indicates whether the entire grid matches the rules, that is, no
    /// number is repeated within a row or column and no filled pair of
    /// cells violates an inequality constraint. Empty cells are ignored.
    pub fn is_valid(&self) -> bool {
        self.check_grid(&self.grid)
    }

    /// Indicates whether the cell at the given location matches the rules.
    /// That is, if the specified cell violates row or column uniqueness or
    /// an incident inequality, `false` is returned, and `true` otherwise.
    /// Empty cells are always valid.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `FutoshikiError::OutOfBounds` is returned.
    pub fn is_valid_cell(&self, column: usize, row: usize)
            -> FutoshikiResult<bool> {
        if let Some(number) = self.grid.get_cell(column, row)? {
            Ok(self.check_number(&self.grid, column, row, number))
        }
        else {
            Ok(true)
        }
    }

    /// Indicates whether the given number would be valid in the cell at the
    /// given location. That is, if the number violated row or column
    /// uniqueness or an incident inequality, `false` is returned, and
    /// `true` otherwise. Inequalities are checked from both endpoints: it
    /// does not matter whether the checked cell is the origin or the
    /// neighbor of the constraint, as long as the other cell is filled.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is valid in the given
    /// cell. Must be in the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `FutoshikiError::OutOfBounds` If either `column` or `row` are not
    /// in the specified range.
    /// * `FutoshikiError::InvalidNumber` If `number` is not in the
    /// specified range.
    pub fn is_valid_number(&self, column: usize, row: usize, number: usize)
            -> FutoshikiResult<bool> {
        let size = self.grid.size();

        if column >= size || row >= size {
            Err(FutoshikiError::OutOfBounds)
        }
        else if number == 0 || number > size {
            Err(FutoshikiError::InvalidNumber)
        }
        else {
            Ok(self.check_number(&self.grid, column, row, number))
        }
    }

    /// Indicates whether the given [FutoshikiGrid] is a valid solution to
    /// this puzzle. That is the case if all numbers from this Futoshiki can
    /// be found in the `solution`, it matches the rules and the inequality
    /// constraints, and it is full.
    ///
    /// # Errors
    ///
    /// If the sizes of this Futoshiki's grid and the `solution` grid are
    /// not the same. In that case, `FutoshikiError::InvalidDimensions` is
    /// returned.
    pub fn is_valid_solution(&self, solution: &FutoshikiGrid)
            -> FutoshikiResult<bool> {
        Ok(self.grid.is_subset(solution)? &&
            self.check_grid(solution) &&
            solution.is_full())
    }
}

impl From<Futoshiki> for (FutoshikiGrid, InequalitySet) {
    fn from(futoshiki: Futoshiki) -> (FutoshikiGrid, InequalitySet) {
        (futoshiki.grid, futoshiki.inequalities)
    }
}

impl TryFrom<(FutoshikiGrid, InequalitySet)> for Futoshiki {
    type Error = FutoshikiError;

    fn try_from(parts: (FutoshikiGrid, InequalitySet))
            -> FutoshikiResult<Futoshiki> {
        Futoshiki::new(parts.0, parts.1)
    }
}
