//! This module contains the constraint-propagation machinery used by the
//! [StrategicSolver] and the [StrategicBacktrackingSolver].
//!
//! The central data structure is the [FutoshikiInfo], which enriches a
//! [Futoshiki](crate::Futoshiki) with one [CandidateSet] per cell tracking
//! the values not yet ruled out for that cell. This is analogous to the
//! pencil markings a human player would make.
//!
//! [Strategies](trait.Strategy.html) use logical reasoning to shrink these
//! candidate sets. Each application reports a [Propagation] outcome, which
//! makes a detected contradiction (an emptied candidate set) an explicit
//! signal that callers can use to abandon a search branch immediately. The
//! [propagate] function drives a strategy to a fixpoint, i.e. until a full
//! application no longer changes any candidate set.

use crate::Futoshiki;
use crate::FutoshikiGrid;
use crate::constraint::Inequality;
use crate::error::{FutoshikiError, FutoshikiResult};
use crate::solver::{Solution, Solver};
use crate::util::CandidateSet;

/// Enriches a [Futoshiki](crate::Futoshiki) with additional information
/// about which numbers can go into the cells. A cell that is filled in the
/// underlying puzzle starts with only that number as a candidate, while an
/// empty cell starts with all numbers from 1 to the grid size.
///
/// During a search, cloning a `FutoshikiInfo` takes a full snapshot of all
/// candidate sets; dropping the clone restores the previous state, since the
/// store has no identity beyond its current content.
#[derive(Clone)]
pub struct FutoshikiInfo {
    futoshiki: Futoshiki,
    cell_options: Vec<CandidateSet>
}

impl FutoshikiInfo {

    /// Creates a new Futoshiki info for a [Futoshiki](crate::Futoshiki).
    /// The options for all cells that are empty in the provided puzzle are
    /// all valid numbers, and the options for cells which are filled are
    /// only the number in that cell.
    pub fn from_futoshiki(futoshiki: Futoshiki) -> FutoshikiInfo {
        let size = futoshiki.grid().size();
        let mut cell_options = Vec::new();

        for row in 0..size {
            for column in 0..size {
                let cell = futoshiki.grid().get_cell(column, row).unwrap();
                let options = match cell {
                    Some(number) =>
                        CandidateSet::singleton(size, number).unwrap(),
                    None => CandidateSet::full(size)
                };

                cell_options.push(options);
            }
        }

        FutoshikiInfo {
            futoshiki,
            cell_options
        }
    }

    fn verified_index(&self, column: usize, row: usize)
            -> FutoshikiResult<usize> {
        let size = self.size();

        if column >= size || row >= size {
            Err(FutoshikiError::OutOfBounds)
        }
        else {
            Ok(crate::index(column, row, size))
        }
    }

    /// Gets the total size of the grid for which this instance tracks
    /// information on one axis (horizontally or vertically). Since grids
    /// are always squares, this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.futoshiki.grid().size()
    }

    /// Gets the [Futoshiki](crate::Futoshiki) for which this instance
    /// stores additional information.
    pub fn futoshiki(&self) -> &Futoshiki {
        &self.futoshiki
    }

    /// Gets a reference to the [CandidateSet] of the possible numbers that
    /// can be entered into the cell at the given position according to this
    /// info.
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
    pub fn get_options(&self, column: usize, row: usize)
            -> FutoshikiResult<&CandidateSet> {
        let index = self.verified_index(column, row)?;
        Ok(&self.cell_options[index])
    }

    /// Gets a mutable reference to the [CandidateSet] that tracks the
    /// possible numbers of the cell at the given position according to this
    /// info.
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
    pub fn get_options_mut(&mut self, column: usize, row: usize)
            -> FutoshikiResult<&mut CandidateSet> {
        let index = self.verified_index(column, row)?;
        Ok(&mut self.cell_options[index])
    }

    /// Gets a read-only reference to the vector storing the options for
    /// every cell in a [CandidateSet]. The cells are in left-to-right,
    /// top-to-bottom order, where rows are together.
    pub fn cell_options(&self) -> &Vec<CandidateSet> {
        &self.cell_options
    }

    /// Replaces the options of the cell at the specified position with the
    /// singleton set containing only the given number. This is used by the
    /// search to enter a trial assignment.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the collapsed cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the collapsed cell. Must be in
    /// the range `[0, size[`.
    /// * `number`: The number to which the cell is fixed. Must be in the
    /// range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `FutoshikiError::OutOfBounds` If either `column` or `row` are not
    /// in the specified range.
    /// * `FutoshikiError::InvalidNumber` If `number` is not in the
    /// specified range.
    pub fn collapse(&mut self, column: usize, row: usize, number: usize)
            -> FutoshikiResult<()> {
        let size = self.size();
        let index = self.verified_index(column, row)?;
        self.cell_options[index] = CandidateSet::singleton(size, number)?;
        Ok(())
    }

    /// Indicates whether every cell has been determined, that is, every
    /// candidate set contains exactly one number. Note that this is a
    /// structural check only; use
    /// [Futoshiki::is_valid_solution](crate::Futoshiki::is_valid_solution)
    /// on the materialized grid to verify correctness.
    pub fn is_solved(&self) -> bool {
        self.cell_options.iter().all(|options| options.len() == 1)
    }

    /// If every cell has been determined, builds the grid holding each
    /// cell's unique candidate and returns it. Otherwise, `None` is
    /// returned.
    pub fn solved_grid(&self) -> Option<FutoshikiGrid> {
        if !self.is_solved() {
            return None;
        }

        let size = self.size();
        let mut grid = FutoshikiGrid::new(size).unwrap();

        for row in 0..size {
            for column in 0..size {
                let number = self.get_options(column, row).unwrap()
                    .min()
                    .unwrap();
                grid.set_cell(column, row, number).unwrap();
            }
        }

        Some(grid)
    }
}

/// The observable outcome of applying a [Strategy] or of running
/// [propagate] to a fixpoint. A contradiction is an explicit signal rather
/// than an implicit side effect, so the search can prune a branch as soon
/// as any candidate set becomes empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Propagation {

    /// No candidate was removed and no cell was collapsed. Returned by
    /// [propagate] once a full application of the strategy no longer
    /// changes anything, i.e. the fixpoint has been reached.
    Stalled,

    /// At least one candidate set shrunk.
    Progressed,

    /// Some candidate set became empty, meaning the current state is
    /// infeasible and the enclosing search branch can be abandoned.
    Contradiction
}

impl Propagation {

    /// Computes the combined outcome of two strategy applications. A
    /// contradiction in either dominates; otherwise any progress is
    /// retained.
    pub fn combine(self, other: Propagation) -> Propagation {
        match (self, other) {
            (Propagation::Contradiction, _) => Propagation::Contradiction,
            (_, Propagation::Contradiction) => Propagation::Contradiction,
            (Propagation::Progressed, _) => Propagation::Progressed,
            (_, Propagation::Progressed) => Propagation::Progressed,
            _ => Propagation::Stalled
        }
    }

    fn from_changed(changed: bool) -> Propagation {
        if changed {
            Propagation::Progressed
        }
        else {
            Propagation::Stalled
        }
    }
}

/// A trait for strategies, which use logical reasoning to restrict the
/// candidate sets of a [FutoshikiInfo].
pub trait Strategy {

    /// Applies this strategy to the given Futoshiki info. The strategy may
    /// rely on and modify the information in `info`. This instance is given
    /// to other strategies that participate in the solution and/or future
    /// applications of the same strategy, so it can be used to communicate
    /// insights.
    ///
    /// This method shall return `Propagation::Progressed` if and only if at
    /// least one candidate was removed, `Propagation::Contradiction` if a
    /// candidate set became empty, and `Propagation::Stalled` otherwise.
    fn apply(&self, info: &mut FutoshikiInfo) -> Propagation;
}

/// Repeatedly applies the given strategy until it no longer makes progress,
/// that is, to a fixpoint. Returns `Propagation::Stalled` once the fixpoint
/// has been reached, or `Propagation::Contradiction` as soon as the
/// strategy empties any candidate set, without finishing the loop.
pub fn propagate(strategy: &impl Strategy, info: &mut FutoshikiInfo)
        -> Propagation {
    loop {
        match strategy.apply(info) {
            Propagation::Progressed => {}
            outcome => return outcome
        }
    }
}

fn row_group(size: usize, row: usize) -> Vec<(usize, usize)> {
    (0..size).map(|column| (column, row)).collect()
}

fn column_group(size: usize, column: usize) -> Vec<(usize, usize)> {
    (0..size).map(|row| (column, row)).collect()
}

/// A [Strategy] which removes the values of determined cells from the
/// candidate sets of all other cells in the same row or column. A cell is
/// determined if its candidate set contains exactly one value; cells that
/// are already determined are never modified by this strategy.
#[derive(Clone)]
pub struct PeerEliminationStrategy;

fn eliminate_in_group(info: &mut FutoshikiInfo, group: &[(usize, usize)])
        -> Propagation {
    let size = info.size();
    let mut determined = CandidateSet::new(size);

    for &(column, row) in group {
        let options = info.get_options(column, row).unwrap();

        if options.len() == 1 {
            determined.insert(options.min().unwrap()).unwrap();
        }
    }

    if determined.is_empty() {
        return Propagation::Stalled;
    }

    let mut changed = false;

    for &(column, row) in group {
        let options = info.get_options_mut(column, row).unwrap();

        if options.len() > 1 {
            changed |= options.remove_all(&determined).unwrap();

            if options.is_empty() {
                return Propagation::Contradiction;
            }
        }
    }

    Propagation::from_changed(changed)
}

impl Strategy for PeerEliminationStrategy {
    fn apply(&self, info: &mut FutoshikiInfo) -> Propagation {
        let size = info.size();
        let mut outcome = Propagation::Stalled;

        for row in 0..size {
            outcome = outcome
                .combine(eliminate_in_group(info, &row_group(size, row)));

            if outcome == Propagation::Contradiction {
                return outcome;
            }
        }

        for column in 0..size {
            outcome = outcome.combine(
                eliminate_in_group(info, &column_group(size, column)));

            if outcome == Propagation::Contradiction {
                return outcome;
            }
        }

        outcome
    }
}

/// A [Strategy] which tightens candidate sets along the inequality
/// constraints using the extremes of the related cells: if the origin must
/// exceed the neighbor, all origin candidates not exceeding the neighbor's
/// minimum and all neighbor candidates not below the origin's maximum are
/// eliminated, and mirrored for the reversed direction.
///
/// This reasoning is sound but not complete. It only uses the extremes of
/// each set, so it can leave candidate pairs that are individually
/// extremal-consistent but jointly impossible; such residual inconsistency
/// is resolved by the search, never by propagation alone.
#[derive(Clone)]
pub struct InequalityBoundStrategy;

impl Strategy for InequalityBoundStrategy {
    fn apply(&self, info: &mut FutoshikiInfo) -> Propagation {
        let inequalities: Vec<Inequality> =
            info.futoshiki().inequalities().iter().copied().collect();
        let mut changed = false;

        for inequality in inequalities {
            let (origin_column, origin_row) = inequality.origin();
            let (neighbor_column, neighbor_row) = inequality.neighbor();
            let neighbor =
                info.get_options(neighbor_column, neighbor_row).unwrap();
            let (neighbor_min, neighbor_max) =
                match (neighbor.min(), neighbor.max()) {
                    (Some(min), Some(max)) => (min, max),
                    _ => return Propagation::Contradiction
                };
            let origin =
                info.get_options_mut(origin_column, origin_row).unwrap();

            if inequality.origin_greater() {
                changed |= origin.remove_at_most(neighbor_min);
            }
            else {
                changed |= origin.remove_at_least(neighbor_max);
            }

            let (origin_min, origin_max) = match (origin.min(), origin.max()) {
                (Some(min), Some(max)) => (min, max),
                _ => return Propagation::Contradiction
            };
            let neighbor =
                info.get_options_mut(neighbor_column, neighbor_row).unwrap();

            if inequality.origin_greater() {
                changed |= neighbor.remove_at_least(origin_max);
            }
            else {
                changed |= neighbor.remove_at_most(origin_min);
            }

            if neighbor.is_empty() {
                return Propagation::Contradiction;
            }
        }

        Propagation::from_changed(changed)
    }
}

#[derive(Clone)]
enum Location {
    None,
    One(usize, usize),
    Multiple
}

impl Location {
    fn union(&self, column: usize, row: usize) -> Location {
        match self {
            Location::None => Location::One(column, row),
            Location::One(_, _) => Location::Multiple,
            Location::Multiple => Location::Multiple
        }
    }
}

/// A [Strategy] which detects situations in which a number can only go in
/// one cell of a row or column and collapses that cell's candidate set to
/// the number in question.
///
/// As a visualization, the cell marked with X in the following example is
/// the only one in its row that can be a 3, since the other two open cells
/// have had it eliminated by the inequalities with their determined
/// neighbors.
///
/// ```text
/// ┌───┬───┬───┬───┐
/// │ X │   < 3 │   │
/// └───┴───┴───┴───┘
/// ```
#[derive(Clone)]
pub struct OnlyCellStrategy;

fn collapse_only_cells_in_group(info: &mut FutoshikiInfo,
        group: &[(usize, usize)]) -> Propagation {
    let size = info.size();
    let mut changed = false;

    for value in 1..=size {
        let mut location = Location::None;

        for &(column, row) in group {
            if info.get_options(column, row).unwrap().contains(value) {
                location = location.union(column, row);
            }
        }

        if let Location::One(column, row) = location {
            if info.get_options(column, row).unwrap().len() > 1 {
                info.collapse(column, row, value).unwrap();
                changed = true;
            }
        }
    }

    Propagation::from_changed(changed)
}

impl Strategy for OnlyCellStrategy {
    fn apply(&self, info: &mut FutoshikiInfo) -> Propagation {
        let size = info.size();
        let mut outcome = Propagation::Stalled;

        for row in 0..size {
            outcome = outcome.combine(
                collapse_only_cells_in_group(info, &row_group(size, row)));
        }

        for column in 0..size {
            outcome = outcome.combine(collapse_only_cells_in_group(info,
                &column_group(size, column)));
        }

        outcome
    }
}

/// A [Strategy] which uses two strategies by first applying one and then
/// the other on the output of the first one. If any child detects a
/// contradiction, it is reported immediately without applying the second
/// child; otherwise progress of either child is retained.
pub struct CompositeStrategy<S1: Strategy, S2: Strategy> {
    s1: S1,
    s2: S2
}

impl<S1: Strategy, S2: Strategy> CompositeStrategy<S1, S2> {

    /// Creates a new composite strategy from the two children strategies.
    ///
    /// # Arguments
    ///
    /// * `s1`: The strategy which is applied first.
    /// * `s2`: The strategy which is applied second.
    pub fn new(s1: S1, s2: S2) -> CompositeStrategy<S1, S2> {
        CompositeStrategy {
            s1,
            s2
        }
    }
}

impl<S1: Strategy, S2: Strategy> Strategy for CompositeStrategy<S1, S2> {
    fn apply(&self, info: &mut FutoshikiInfo) -> Propagation {
        let first = self.s1.apply(info);

        if first == Propagation::Contradiction {
            return first;
        }

        first.combine(self.s2.apply(info))
    }
}

impl<S1, S2> Clone for CompositeStrategy<S1, S2>
where
    S1: Strategy + Clone,
    S2: Strategy + Clone
{
    fn clone(&self) -> Self {
        CompositeStrategy::new(self.s1.clone(), self.s2.clone())
    }
}

/// Creates the composition of all three rule strategies offered by this
/// module: [PeerEliminationStrategy], [InequalityBoundStrategy], and
/// [OnlyCellStrategy]. Driving this strategy to a fixpoint with [propagate]
/// applies all rules until none of them produces any further change.
pub fn standard_strategy() -> impl Strategy + Clone {
    CompositeStrategy::new(
        CompositeStrategy::new(PeerEliminationStrategy,
            InequalityBoundStrategy),
        OnlyCellStrategy)
}

/// A partial [Solver](crate::solver::Solver) which uses a [Strategy] to
/// solve a Futoshiki as well as possible without searching. If it finds a
/// contradiction, it will conclude that the puzzle is unsolvable. If the
/// strategy gets stuck before every cell is determined, it will resort to
/// returning `Solution::Undetermined`. Only if the wrapped strategy is able
/// to solve the puzzle completely, a `Solution::Solved` variant is
/// returned.
pub struct StrategicSolver<S: Strategy> {
    strategy: S
}

impl<S: Strategy> StrategicSolver<S> {

    /// Creates a new strategic solver that uses the given `strategy` to
    /// attempt to solve Futoshiki.
    pub fn new(strategy: S) -> StrategicSolver<S> {
        StrategicSolver { strategy }
    }
}

impl<S: Strategy> Solver for StrategicSolver<S> {
    fn solve(&self, futoshiki: &Futoshiki) -> Solution {
        if !futoshiki.is_valid() {
            return Solution::Unsolvable;
        }

        let mut info = FutoshikiInfo::from_futoshiki(futoshiki.clone());

        if propagate(&self.strategy, &mut info) == Propagation::Contradiction {
            return Solution::Unsolvable;
        }

        if let Some(grid) = info.solved_grid() {
            if info.futoshiki().is_valid_solution(&grid).unwrap() {
                Solution::Solved(grid)
            }
            else {
                Solution::Unsolvable
            }
        }
        else {
            Solution::Undetermined
        }
    }
}

impl<S: Strategy + Clone> Clone for StrategicSolver<S> {
    fn clone(&self) -> Self {
        StrategicSolver::new(self.strategy.clone())
    }
}

/// A complete [Solver](crate::solver::Solver) which uses a [Strategy] to
/// accelerate the solving process. After driving the strategy to a
/// fixpoint, it branches on the cell with the fewest remaining candidates,
/// taking the first minimum in row-major order, and tries its candidates in
/// ascending order. Before each trial the whole candidate store is
/// snapshotted, so a failed branch is discarded without affecting its
/// siblings. The first solution found is returned.
pub struct StrategicBacktrackingSolver<S: Strategy> {
    strategy: S
}

/// Finds the undetermined cell for which there are the fewest options and
/// returns its coordinates in the form `(column, row)`.
fn find_min_options(info: &FutoshikiInfo) -> (usize, usize) {
    let size = info.size();
    let mut min_options_column = 0usize;
    let mut min_options_row = 0usize;
    let mut min_options = size + 1;

    for row in 0..size {
        for column in 0..size {
            let options = info.get_options(column, row).unwrap();

            if options.len() > 1 && options.len() < min_options {
                min_options_column = column;
                min_options_row = row;
                min_options = options.len();
            }
        }
    }

    (min_options_column, min_options_row)
}

impl<S: Strategy> StrategicBacktrackingSolver<S> {

    /// Creates a new strategic backtracking solver that uses the given
    /// `strategy`.
    pub fn new(strategy: S) -> StrategicBacktrackingSolver<S> {
        StrategicBacktrackingSolver { strategy }
    }

    fn solve_rec(&self, info: &mut FutoshikiInfo) -> Solution {
        if propagate(&self.strategy, info) == Propagation::Contradiction {
            return Solution::Unsolvable;
        }

        if let Some(grid) = info.solved_grid() {
            return if info.futoshiki().is_valid_solution(&grid).unwrap() {
                Solution::Solved(grid)
            }
            else {
                Solution::Unsolvable
            };
        }

        let (min_options_column, min_options_row) = find_min_options(info);
        let numbers: Vec<usize> = info
            .get_options(min_options_column, min_options_row)
            .unwrap()
            .iter()
            .collect();

        for number in numbers {
            let mut child = info.clone();
            child.collapse(min_options_column, min_options_row, number)
                .unwrap();

            if let Solution::Solved(grid) = self.solve_rec(&mut child) {
                return Solution::Solved(grid);
            }
        }

        Solution::Unsolvable
    }
}

impl<S: Strategy> Solver for StrategicBacktrackingSolver<S> {
    fn solve(&self, futoshiki: &Futoshiki) -> Solution {
        if !futoshiki.is_valid() {
            return Solution::Unsolvable;
        }

        self.solve_rec(&mut FutoshikiInfo::from_futoshiki(futoshiki.clone()))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::{candidates, Futoshiki, FutoshikiGrid};
    use crate::constraint::{Inequality, InequalitySet, Orientation};

    fn futoshiki_with_inequalities(size: usize,
            inequalities: Vec<Inequality>) -> Futoshiki {
        let mut set = InequalitySet::new(size).unwrap();

        for inequality in inequalities {
            set.add(inequality).unwrap();
        }

        Futoshiki::new(FutoshikiGrid::new(size).unwrap(), set).unwrap()
    }

    #[test]
    fn info_initialization_from_grid() {
        let grid = FutoshikiGrid::parse("4;2,,,, ,,,, ,,,, ,,,3").unwrap();
        let futoshiki =
            Futoshiki::new(grid, InequalitySet::new(4).unwrap()).unwrap();
        let info = FutoshikiInfo::from_futoshiki(futoshiki);

        assert_eq!(candidates!(4; 2), *info.get_options(0, 0).unwrap());
        assert_eq!(candidates!(4; 3), *info.get_options(3, 3).unwrap());
        assert_eq!(CandidateSet::full(4), *info.get_options(1, 0).unwrap());
        assert!(!info.is_solved());
        assert_eq!(None, info.solved_grid());
    }

    #[test]
    fn info_collapse_and_solved_grid() {
        let futoshiki = Futoshiki::new_empty(2).unwrap();
        let mut info = FutoshikiInfo::from_futoshiki(futoshiki);

        info.collapse(0, 0, 1).unwrap();
        info.collapse(1, 0, 2).unwrap();
        info.collapse(0, 1, 2).unwrap();
        assert!(!info.is_solved());

        info.collapse(1, 1, 1).unwrap();
        assert!(info.is_solved());

        let expected = FutoshikiGrid::parse("2;1,2,2,1").unwrap();
        assert_eq!(Some(expected), info.solved_grid());
    }

    #[test]
    fn peer_elimination_removes_determined_values() {
        let grid = FutoshikiGrid::parse("4;1,,,, ,,,, ,,,, ,,,").unwrap();
        let futoshiki =
            Futoshiki::new(grid, InequalitySet::new(4).unwrap()).unwrap();
        let mut info = FutoshikiInfo::from_futoshiki(futoshiki);

        assert_eq!(Propagation::Progressed,
            PeerEliminationStrategy.apply(&mut info));

        assert_eq!(candidates!(4; 1), *info.get_options(0, 0).unwrap());
        assert_eq!(candidates!(4; 2, 3, 4), *info.get_options(1, 0).unwrap());
        assert_eq!(candidates!(4; 2, 3, 4), *info.get_options(0, 1).unwrap());
        assert_eq!(CandidateSet::full(4), *info.get_options(1, 1).unwrap());
    }

    #[test]
    fn peer_elimination_detects_contradiction() {
        let futoshiki = Futoshiki::new_empty(4).unwrap();
        let mut info = FutoshikiInfo::from_futoshiki(futoshiki);

        // Restrict (2, 0) to {1, 2} while determining 1 and 2 elsewhere in
        // the row.
        *info.get_options_mut(2, 0).unwrap() = candidates!(4; 1, 2);
        info.collapse(0, 0, 1).unwrap();
        info.collapse(1, 0, 2).unwrap();

        assert_eq!(Propagation::Contradiction,
            PeerEliminationStrategy.apply(&mut info));
    }

    #[test]
    fn inequality_bounds_tighten_extremes() {
        let futoshiki = futoshiki_with_inequalities(4,
            vec![Inequality::new(0, 0, Orientation::Horizontal, true)]);
        let mut info = FutoshikiInfo::from_futoshiki(futoshiki);

        assert_eq!(Propagation::Progressed,
            InequalityBoundStrategy.apply(&mut info));

        assert_eq!(candidates!(4; 2, 3, 4), *info.get_options(0, 0).unwrap());
        assert_eq!(candidates!(4; 1, 2, 3), *info.get_options(1, 0).unwrap());

        // The rule only uses the extremes, so a second application changes
        // nothing.
        assert_eq!(Propagation::Stalled,
            InequalityBoundStrategy.apply(&mut info));
    }

    #[test]
    fn inequality_bounds_tighten_reversed_direction() {
        let futoshiki = futoshiki_with_inequalities(4,
            vec![Inequality::new(1, 2, Orientation::Vertical, false)]);
        let mut info = FutoshikiInfo::from_futoshiki(futoshiki);

        assert_eq!(Propagation::Progressed,
            InequalityBoundStrategy.apply(&mut info));

        assert_eq!(candidates!(4; 1, 2, 3), *info.get_options(1, 2).unwrap());
        assert_eq!(candidates!(4; 2, 3, 4), *info.get_options(1, 3).unwrap());
    }

    #[test]
    fn inequality_bounds_detect_contradiction() {
        let grid = FutoshikiGrid::parse("2;1,,,").unwrap();
        let mut inequalities = InequalitySet::new(2).unwrap();
        inequalities
            .add(Inequality::new(0, 0, Orientation::Horizontal, true))
            .unwrap();
        let futoshiki = Futoshiki::new(grid, inequalities).unwrap();
        let mut info = FutoshikiInfo::from_futoshiki(futoshiki);

        // (0, 0) is fixed to 1 but must exceed its neighbor, which leaves
        // no candidate for it.
        assert_eq!(Propagation::Contradiction,
            InequalityBoundStrategy.apply(&mut info));
    }

    #[test]
    fn only_cell_collapses_unique_candidate() {
        let futoshiki = Futoshiki::new_empty(9).unwrap();
        let mut info = FutoshikiInfo::from_futoshiki(futoshiki);

        // Remove 7 from all cells of row 0 except (3, 0).
        for column in 0..9 {
            if column != 3 {
                info.get_options_mut(column, 0).unwrap().remove(7).unwrap();
            }
        }

        assert_eq!(Propagation::Progressed,
            OnlyCellStrategy.apply(&mut info));
        assert_eq!(candidates!(9; 7), *info.get_options(3, 0).unwrap());
    }

    #[test]
    fn only_cell_ignores_determined_cells() {
        let grid = FutoshikiGrid::parse("4;1,,,, ,,,, ,,,, ,,,").unwrap();
        let futoshiki =
            Futoshiki::new(grid, InequalitySet::new(4).unwrap()).unwrap();
        let mut info = FutoshikiInfo::from_futoshiki(futoshiki);

        // After peer elimination, 1 is only a candidate of (0, 0) in its
        // row and column, but that cell is already determined, so the only
        // cell strategy has nothing left to do.
        PeerEliminationStrategy.apply(&mut info);

        assert_eq!(Propagation::Stalled, OnlyCellStrategy.apply(&mut info));
        assert_eq!(candidates!(4; 1), *info.get_options(0, 0).unwrap());
    }

    #[test]
    fn propagation_reaches_fixpoint() {
        let grid =
            FutoshikiGrid::parse("4;,2,3,4,3,,1,2,4,3,,1,2,1,4,").unwrap();
        let futoshiki = Futoshiki::new(grid,
            InequalitySet::new(4).unwrap()).unwrap();
        let mut info = FutoshikiInfo::from_futoshiki(futoshiki);
        let strategy = standard_strategy();

        assert_eq!(Propagation::Stalled, propagate(&strategy, &mut info));

        // This puzzle is fully determined by propagation alone.
        assert!(info.cell_options().iter().all(|options| options.len() == 1));

        // Re-running any rule after convergence produces no further change.
        assert_eq!(Propagation::Stalled,
            PeerEliminationStrategy.apply(&mut info));
        assert_eq!(Propagation::Stalled,
            InequalityBoundStrategy.apply(&mut info));
        assert_eq!(Propagation::Stalled, OnlyCellStrategy.apply(&mut info));
    }

    #[test]
    fn strategic_solver_solves_by_propagation_alone() {
        let grid =
            FutoshikiGrid::parse("4;,2,3,4,3,,1,2,4,3,,1,2,1,4,").unwrap();
        let futoshiki = Futoshiki::new(grid,
            InequalitySet::new(4).unwrap()).unwrap();
        let solver = StrategicSolver::new(standard_strategy());
        let expected =
            FutoshikiGrid::parse("4;1,2,3,4,3,4,1,2,4,3,2,1,2,1,4,3")
                .unwrap();

        assert_eq!(Solution::Solved(expected), solver.solve(&futoshiki));
    }

    #[test]
    fn strategic_solver_unable_to_solve() {
        let futoshiki = Futoshiki::new_empty(2).unwrap();
        let solver = StrategicSolver::new(standard_strategy());

        assert_eq!(Solution::Undetermined, solver.solve(&futoshiki));
    }

    #[test]
    fn strategic_solver_detects_infeasibility() {
        let futoshiki = futoshiki_with_inequalities(2, vec![
            Inequality::new(0, 0, Orientation::Horizontal, true),
            Inequality::new(0, 0, Orientation::Horizontal, false)
        ]);
        let solver = StrategicSolver::new(standard_strategy());

        assert_eq!(Solution::Unsolvable, solver.solve(&futoshiki));
    }

    #[test]
    fn strategic_backtracking_solves_forced_puzzle() {
        let futoshiki = Futoshiki::parse("2;,,,", "2;>, ; , ").unwrap();
        let solver = StrategicBacktrackingSolver::new(standard_strategy());
        let expected = FutoshikiGrid::parse("2;2,1,1,2").unwrap();

        assert_eq!(Solution::Solved(expected), solver.solve(&futoshiki));
    }

    #[test]
    fn strategic_backtracking_searches_when_stalled() {
        // Propagation alone cannot decide an unconstrained empty grid, so
        // the solver must branch. The minimum-remaining-candidates
        // selection and ascending value order make the result
        // deterministic.
        let futoshiki = Futoshiki::new_empty(2).unwrap();
        let solver = StrategicBacktrackingSolver::new(standard_strategy());
        let expected = FutoshikiGrid::parse("2;1,2,2,1").unwrap();

        assert_eq!(Solution::Solved(expected.clone()),
            solver.solve(&futoshiki));
        assert_eq!(Solution::Solved(expected), solver.solve(&futoshiki));
    }

    #[test]
    fn strategic_backtracking_solves_larger_unique_completion() {
        let grid = FutoshikiGrid::parse("5;\
             ,2,3,4,5,\
            2, ,4,5,1,\
            3,4, ,1,2,\
            4,5,1, ,3,\
            5,1,2,3, ").unwrap();
        let mut inequalities = InequalitySet::new(5).unwrap();
        inequalities
            .add(Inequality::new(0, 0, Orientation::Horizontal, false))
            .unwrap();
        inequalities
            .add(Inequality::new(2, 1, Orientation::Vertical, false))
            .unwrap();
        let futoshiki = Futoshiki::new(grid, inequalities).unwrap();
        let solver = StrategicBacktrackingSolver::new(standard_strategy());
        let expected = FutoshikiGrid::parse("5;\
            1,2,3,4,5,\
            2,3,4,5,1,\
            3,4,5,1,2,\
            4,5,1,2,3,\
            5,1,2,3,4").unwrap();

        assert_eq!(Solution::Solved(expected), solver.solve(&futoshiki));
    }

    #[test]
    fn strategic_backtracking_detects_duplicate_givens() {
        let grid = FutoshikiGrid::parse("4;1,1,,,,,,,,,,,,,,").unwrap();
        let futoshiki =
            Futoshiki::new(grid, InequalitySet::new(4).unwrap()).unwrap();
        let solver = StrategicBacktrackingSolver::new(standard_strategy());

        assert_eq!(Solution::Unsolvable, solver.solve(&futoshiki));
    }

    #[test]
    fn strategic_backtracking_exhausts_unsolvable_search() {
        // A cycle of strict inequalities along the top row of a 3x3 grid
        // cannot be satisfied together with the reversed constraint, so the
        // search must exhaust all branches.
        let futoshiki = futoshiki_with_inequalities(3, vec![
            Inequality::new(0, 0, Orientation::Horizontal, true),
            Inequality::new(1, 0, Orientation::Horizontal, true),
            Inequality::new(0, 1, Orientation::Vertical, true),
            Inequality::new(0, 0, Orientation::Vertical, false)
        ]);
        let solver = StrategicBacktrackingSolver::new(standard_strategy());

        assert_eq!(Solution::Unsolvable, solver.solve(&futoshiki));
    }

    #[test]
    fn forced_chain_orders_top_row() {
        // The chain (0, 0) < (1, 0) < (2, 0) < (3, 0) forces the top row to
        // 1, 2, 3, 4 while leaving the rest of the grid open.
        let futoshiki = futoshiki_with_inequalities(4, vec![
            Inequality::new(0, 0, Orientation::Horizontal, false),
            Inequality::new(1, 0, Orientation::Horizontal, false),
            Inequality::new(2, 0, Orientation::Horizontal, false)
        ]);
        let strategic =
            StrategicBacktrackingSolver::new(standard_strategy());
        let solution = strategic.solve(&futoshiki);

        if let Solution::Solved(grid) = solution {
            assert!(futoshiki.is_valid_solution(&grid).unwrap());
            assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
            assert_eq!(Some(2), grid.get_cell(1, 0).unwrap());
            assert_eq!(Some(3), grid.get_cell(2, 0).unwrap());
            assert_eq!(Some(4), grid.get_cell(3, 0).unwrap());
        }
        else {
            panic!("Solvable Futoshiki marked as unsolvable.");
        }
    }
}
