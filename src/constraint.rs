//! This module defines the inequality constraints which, together with the
//! row and column uniqueness rules, specify a Futoshiki puzzle.
//!
//! An [Inequality](struct.Inequality.html) is a binary ordering constraint
//! between two adjacent cells. The first cell, called the *origin*, is
//! identified by its coordinates; the second cell, called the *neighbor*, is
//! its right neighbor for horizontal constraints and the cell below for
//! vertical constraints. The `origin_greater` flag states which of the two
//! must hold the greater value.
//!
//! Inequalities are collected in an
//! [InequalitySet](struct.InequalitySet.html), which validates each
//! constraint against the grid size at insertion time and maintains an index
//! from every incident cell to the constraints touching it. The index covers
//! *both* endpoints, so a validator can check a constraint no matter which
//! of its two cells is assigned last.
//!
//! # Parsing
//!
//! Inequality sets can be parsed from a textual code, which is mostly
//! useful for tests and for exchanging puzzles. See
//! [InequalitySet::parse](struct.InequalitySet.html#method.parse) for the
//! format. An example with one horizontal and one vertical constraint on a
//! 4x4 grid is provided below.
//!
//! ```
//! use futoshiki::constraint::InequalitySet;
//!
//! let inequalities =
//!     InequalitySet::parse("4;>, , , , , , , , , , , ;\
//!         , ,v, , , , , , , , , ").unwrap();
//! assert_eq!(2, inequalities.len());
//! ```

use crate::error::{
    FutoshikiError,
    FutoshikiParseError,
    FutoshikiParseResult,
    FutoshikiResult
};

use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::convert::TryFrom;
use std::slice::Iter;

/// The two possible orientations of an [Inequality](struct.Inequality.html).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Orientation {

    /// The constraint relates a cell to its right neighbor, i.e. the cell in
    /// the next column of the same row.
    Horizontal,

    /// The constraint relates a cell to the cell below it, i.e. the cell in
    /// the next row of the same column.
    Vertical
}

/// A binary ordering constraint between two adjacent cells of a Futoshiki
/// grid. The *origin* cell is given by its coordinates; the *neighbor* is
/// determined by the [Orientation](enum.Orientation.html). If
/// `origin_greater` is `true`, the origin cell must hold a greater value
/// than the neighbor, otherwise a smaller one.
///
/// An `Inequality` on its own is plain data; it is validated against a grid
/// size when it is added to an [InequalitySet](struct.InequalitySet.html).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Inequality {
    column: usize,
    row: usize,
    orientation: Orientation,
    origin_greater: bool
}

impl Inequality {

    /// Creates a new inequality with the given origin cell, orientation, and
    /// direction flag.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the origin cell.
    /// * `row`: The row (y-coordinate) of the origin cell.
    /// * `orientation`: Whether the constraint relates the origin to its
    /// right neighbor (`Orientation::Horizontal`) or to the cell below it
    /// (`Orientation::Vertical`).
    /// * `origin_greater`: If `true`, the origin cell's value must exceed
    /// the neighbor cell's value, otherwise it must be less.
    pub fn new(column: usize, row: usize, orientation: Orientation,
            origin_greater: bool) -> Inequality {
        Inequality {
            column,
            row,
            orientation,
            origin_greater
        }
    }

    /// Gets the column (x-coordinate) of the origin cell.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the row (y-coordinate) of the origin cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the [Orientation](enum.Orientation.html) of this inequality.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Indicates whether the origin cell must hold the greater value. If
    /// this is `false`, the neighbor cell must hold the greater value.
    pub fn origin_greater(&self) -> bool {
        self.origin_greater
    }

    /// Gets the coordinates of the origin cell in the form `(column, row)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    /// Gets the coordinates of the neighbor cell in the form
    /// `(column, row)`, that is, the cell to the right of the origin for
    /// horizontal constraints and the cell below it for vertical ones.
    pub fn neighbor(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.column + 1, self.row),
            Orientation::Vertical => (self.column, self.row + 1)
        }
    }

    /// Indicates whether this inequality is satisfied by the given pair of
    /// values, where `origin_value` is the value of the origin cell and
    /// `neighbor_value` the value of the neighbor cell.
    pub fn holds(&self, origin_value: usize, neighbor_value: usize) -> bool {
        if self.origin_greater {
            origin_value > neighbor_value
        }
        else {
            origin_value < neighbor_value
        }
    }
}

/// A validated collection of [Inequality](struct.Inequality.html) instances
/// for a grid of a fixed size. Every constraint is checked at insertion
/// time: both its origin and its neighbor cell must lie within the grid.
/// Constraints whose neighbor would fall outside the grid, such as a
/// horizontal inequality in the last column or a vertical one in the last
/// row, are configuration errors and are rejected with
/// `FutoshikiError::InvalidConstraint` before any solving work happens.
///
/// The set maintains an index from each cell to all constraints incident to
/// it, regardless of whether the cell is the origin or the neighbor. This
/// allows validators to check a constraint from whichever endpoint is
/// assigned last.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct InequalitySet {
    size: usize,
    inequalities: Vec<Inequality>,
    incidence: HashMap<(usize, usize), Vec<usize>>
}

fn parse_tokens(part: &str, expected: usize)
        -> FutoshikiParseResult<Vec<&str>> {
    if expected == 0 {
        return if part.trim().is_empty() {
            Ok(Vec::new())
        }
        else {
            Err(FutoshikiParseError::WrongNumberOfRelations)
        };
    }

    let tokens: Vec<&str> = part.split(',').collect();

    if tokens.len() != expected {
        return Err(FutoshikiParseError::WrongNumberOfRelations);
    }

    Ok(tokens)
}

impl InequalitySet {

    /// Creates a new, empty inequality set for a grid of the given size.
    ///
    /// # Errors
    ///
    /// If `size` is zero. In that case, `FutoshikiError::InvalidDimensions`
    /// is returned.
    pub fn new(size: usize) -> FutoshikiResult<InequalitySet> {
        if size == 0 {
            return Err(FutoshikiError::InvalidDimensions);
        }

        Ok(InequalitySet {
            size,
            inequalities: Vec::new(),
            incidence: HashMap::new()
        })
    }

    /// Parses a code encoding an inequality set. The code has to be of the
    /// format `<size>;<horizontal relations>;<vertical relations>`.
    ///
    /// The horizontal relations are a comma-separated list of
    /// `size · (size - 1)` entries, assigned left-to-right, top-to-bottom to
    /// the gaps between horizontally adjacent cells. Each entry is either
    /// empty (no constraint), `>` (the left cell is greater), or `<` (the
    /// right cell is greater).
    ///
    /// The vertical relations are a comma-separated list of
    /// `(size - 1) · size` entries, assigned left-to-right, top-to-bottom to
    /// the gaps between vertically adjacent cells. Each entry is either
    /// empty (no constraint), `v` (the upper cell is greater), or `^` (the
    /// lower cell is greater).
    ///
    /// Whitespace in the entries is ignored to allow for more intuitive
    /// formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `FutoshikiParseError` (see that
    /// documentation).
    pub fn parse(code: &str) -> FutoshikiParseResult<InequalitySet> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 3 {
            return Err(FutoshikiParseError::WrongNumberOfParts);
        }

        let size: usize = parts[0].trim().parse()?;
        let mut set = InequalitySet::new(size)
            .map_err(|_| FutoshikiParseError::InvalidDimensions)?;
        let horizontal_tokens = parse_tokens(parts[1], size * (size - 1))?;
        let vertical_tokens = parse_tokens(parts[2], (size - 1) * size)?;

        for (i, token) in horizontal_tokens.iter().enumerate() {
            let column = i % (size - 1);
            let row = i / (size - 1);
            let origin_greater = match token.trim() {
                "" => continue,
                ">" => true,
                "<" => false,
                _ => return Err(FutoshikiParseError::InvalidRelation)
            };

            set.add(Inequality::new(column, row, Orientation::Horizontal,
                origin_greater)).unwrap();
        }

        for (i, token) in vertical_tokens.iter().enumerate() {
            let column = i % size;
            let row = i / size;
            let origin_greater = match token.trim() {
                "" => continue,
                "v" => true,
                "^" => false,
                _ => return Err(FutoshikiParseError::InvalidRelation)
            };

            set.add(Inequality::new(column, row, Orientation::Vertical,
                origin_greater)).unwrap();
        }

        Ok(set)
    }

    /// Converts this set into a `String` in a way that is consistent with
    /// [InequalitySet::parse](#method.parse). That is, a set that is
    /// converted to a string and parsed again will not change.
    pub fn to_parseable_string(&self) -> String {
        let size = self.size;
        let mut horizontal = vec![""; size * (size - 1)];
        let mut vertical = vec![""; (size - 1) * size];

        for inequality in &self.inequalities {
            match inequality.orientation() {
                Orientation::Horizontal => {
                    let index =
                        inequality.row() * (size - 1) + inequality.column();
                    horizontal[index] =
                        if inequality.origin_greater() { ">" } else { "<" };
                }
                Orientation::Vertical => {
                    let index = inequality.row() * size + inequality.column();
                    vertical[index] =
                        if inequality.origin_greater() { "v" } else { "^" };
                }
            }
        }

        format!("{};{};{}", size, horizontal.join(","), vertical.join(","))
    }

    fn verify(&self, inequality: &Inequality) -> FutoshikiResult<()> {
        let (origin_column, origin_row) = inequality.origin();
        let (neighbor_column, neighbor_row) = inequality.neighbor();

        if origin_column >= self.size || origin_row >= self.size ||
                neighbor_column >= self.size || neighbor_row >= self.size {
            return Err(FutoshikiError::InvalidConstraint);
        }

        Ok(())
    }

    /// Adds the given inequality to this set, after verifying that both its
    /// origin and its neighbor cell lie within the grid.
    ///
    /// # Errors
    ///
    /// If the origin or neighbor cell is outside the grid, i.e. the
    /// inequality is horizontal and its origin lies in the last column, or
    /// it is vertical and its origin lies in the last row, or its origin
    /// coordinates exceed the grid entirely. In that case,
    /// `FutoshikiError::InvalidConstraint` is returned.
    pub fn add(&mut self, inequality: Inequality) -> FutoshikiResult<()> {
        self.verify(&inequality)?;

        let index = self.inequalities.len();
        self.incidence.entry(inequality.origin())
            .or_insert_with(Vec::new)
            .push(index);
        self.incidence.entry(inequality.neighbor())
            .or_insert_with(Vec::new)
            .push(index);
        self.inequalities.push(inequality);
        Ok(())
    }

    /// Gets the size of the grid for which this set holds constraints.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of inequalities contained in this set.
    pub fn len(&self) -> usize {
        self.inequalities.len()
    }

    /// Indicates whether this set contains no inequalities.
    pub fn is_empty(&self) -> bool {
        self.inequalities.is_empty()
    }

    /// Returns an iterator over all inequalities in this set, in insertion
    /// order.
    pub fn iter(&self) -> Iter<'_, Inequality> {
        self.inequalities.iter()
    }

    /// Returns an iterator over all inequalities incident to the cell at
    /// the specified position, that is, all constraints for which that cell
    /// is either the origin or the neighbor. Cells outside the grid have no
    /// incident inequalities.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cell.
    /// * `row`: The row (y-coordinate) of the cell.
    pub fn incident(&self, column: usize, row: usize)
            -> impl Iterator<Item = &Inequality> {
        self.incidence.get(&(column, row))
            .map(|indices| indices.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&index| &self.inequalities[index])
    }
}

impl From<InequalitySet> for String {
    fn from(set: InequalitySet) -> String {
        set.to_parseable_string()
    }
}

impl TryFrom<String> for InequalitySet {
    type Error = FutoshikiParseError;

    fn try_from(code: String) -> FutoshikiParseResult<InequalitySet> {
        InequalitySet::parse(&code)
    }
}
