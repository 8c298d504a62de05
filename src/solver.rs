//! This module contains the logic for solving Futoshiki.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally
//! usable implementation. A usually faster solver that interleaves
//! constraint propagation with the search is available in the
//! [strategy](strategy/index.html) submodule.

use crate::{Futoshiki, FutoshikiGrid};

pub mod strategy;

/// An enumeration of the different outcomes of attempting to solve a
/// Futoshiki. Both complete solvers in this crate report the first solution
/// they find, searching deterministically, so two runs on the same input
/// yield the same outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the Futoshiki is not solvable at all. This is an
    /// expected answer for an unsatisfiable puzzle, not an error.
    Unsolvable,

    /// Indicates that a solution has been found, which is wrapped in this
    /// instance.
    Solved(FutoshikiGrid),

    /// Indicates that the solver was unable to find a solution or prove
    /// that none exists. This is only produced by partial solvers such as
    /// [StrategicSolver](strategy/struct.StrategicSolver.html); complete
    /// solvers never return it.
    Undetermined
}

/// A trait for structs which have the ability to solve Futoshiki. Not all
/// implementers must be able to solve every solvable puzzle, some solvers
/// may be less powerful, similar to a less experienced human solver. This
/// may make sense to check whether some Futoshiki is solvable using pure
/// reasoning, without search.
pub trait Solver {

    /// Solves, or attempts to solve, the provided Futoshiki. If the solver
    /// cannot find a solution or prove that none exists (either because the
    /// puzzle is too hard for it or it is not a complete solver), it shall
    /// return `Solution::Undetermined`.
    fn solve(&self, futoshiki: &Futoshiki) -> Solution;
}

/// A complete [Solver](trait.Solver.html) which solves Futoshiki by
/// recursively testing all valid numbers for each empty cell, in row-major
/// scan order. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// puzzle has many missing numbers.
/// * It finds a solution whenever one exists, and otherwise proves that
/// there is none.
///
/// Each tried number is checked against the row and column uniqueness rules
/// and against all incident inequalities before it is entered, so the
/// search never visits a state that already violates a constraint.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn find_empty(grid: &FutoshikiGrid) -> Option<(usize, usize)> {
        let size = grid.size();

        for row in 0..size {
            for column in 0..size {
                if grid.get_cell(column, row).unwrap() == None {
                    return Some((column, row));
                }
            }
        }

        None
    }

    fn solve_rec(futoshiki: &mut Futoshiki) -> Solution {
        let (column, row) =
            match BacktrackingSolver::find_empty(futoshiki.grid()) {
                Some(coordinates) => coordinates,
                None => return Solution::Solved(futoshiki.grid().clone())
            };
        let size = futoshiki.grid().size();

        for number in 1..=size {
            if futoshiki.is_valid_number(column, row, number).unwrap() {
                futoshiki.grid_mut().set_cell(column, row, number).unwrap();

                if let Solution::Solved(grid) =
                        BacktrackingSolver::solve_rec(futoshiki) {
                    return Solution::Solved(grid);
                }

                futoshiki.grid_mut().clear_cell(column, row).unwrap();
            }
        }

        Solution::Unsolvable
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, futoshiki: &Futoshiki) -> Solution {
        if !futoshiki.is_valid() {
            return Solution::Unsolvable;
        }

        let mut clone = futoshiki.clone();
        BacktrackingSolver::solve_rec(&mut clone)
    }
}
