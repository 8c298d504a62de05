//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing, see [FutoshikiParseError](enum.FutoshikiParseError.html) for
/// that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FutoshikiError {

    /// Indicates that the size specified for a created grid or inequality set
    /// is invalid. This is the case if it is zero, or if a grid and an
    /// inequality set of different sizes are combined.
    InvalidDimensions,

    /// Indicates that some number is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds,

    /// Indicates that an inequality references a neighbor cell outside the
    /// grid, that is, a horizontal inequality in the last column or a
    /// vertical inequality in the last row. Such constraints are
    /// configuration errors and are rejected before any solving begins.
    InvalidConstraint
}

impl Display for FutoshikiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FutoshikiError::InvalidDimensions =>
                write!(f, "invalid dimensions"),
            FutoshikiError::InvalidNumber =>
                write!(f, "number outside the valid range for this grid"),
            FutoshikiError::OutOfBounds =>
                write!(f, "cell coordinates outside the grid"),
            FutoshikiError::InvalidConstraint =>
                write!(f, "inequality references a cell outside the grid")
        }
    }
}

/// Syntactic sugar for `Result<V, FutoshikiError>`.
pub type FutoshikiResult<V> = Result<V, FutoshikiError>;

/// An enumeration of the errors that may occur when parsing a
/// [FutoshikiGrid](../struct.FutoshikiGrid.html), an
/// [InequalitySet](../constraint/struct.InequalitySet.html), or a complete
/// [Futoshiki](../struct.Futoshiki.html).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FutoshikiParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. A grid code has two parts (size and cells)
    /// and an inequality code has three (size, horizontal relations, and
    /// vertical relations).
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the square of the size.
    WrongNumberOfCells,

    /// Indicates that the number of relation tokens (which are separated by
    /// commas) does not match the grid size, i.e. `size · (size - 1)` for
    /// the horizontal part and `(size - 1) · size` for the vertical part.
    WrongNumberOfRelations,

    /// Indicates that the provided size is invalid (i.e. zero).
    InvalidDimensions,

    /// Indicates that a grid code and an inequality code specify different
    /// sizes.
    MismatchedDimensions,

    /// Indicates that one of the numbers (size or cell content) could not be
    /// parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than the grid size).
    InvalidNumber,

    /// Indicates that a relation token is not one of the permitted symbols,
    /// that is `>`, `<`, or an empty entry for horizontal relations and `v`,
    /// `^`, or an empty entry for vertical relations.
    InvalidRelation
}

impl Display for FutoshikiParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FutoshikiParseError::WrongNumberOfParts =>
                write!(f, "wrong number of semicolon-separated parts"),
            FutoshikiParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells for the given size"),
            FutoshikiParseError::WrongNumberOfRelations =>
                write!(f, "wrong number of relation tokens for the given \
                    size"),
            FutoshikiParseError::InvalidDimensions =>
                write!(f, "invalid size"),
            FutoshikiParseError::MismatchedDimensions =>
                write!(f, "grid and inequality codes specify different \
                    sizes"),
            FutoshikiParseError::NumberFormatError =>
                write!(f, "malformed number"),
            FutoshikiParseError::InvalidNumber =>
                write!(f, "cell filled with a number outside the valid \
                    range"),
            FutoshikiParseError::InvalidRelation =>
                write!(f, "invalid relation token")
        }
    }
}

impl From<ParseIntError> for FutoshikiParseError {
    fn from(_: ParseIntError) -> Self {
        FutoshikiParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, FutoshikiParseError>`.
pub type FutoshikiParseResult<V> = Result<V, FutoshikiParseError>;
