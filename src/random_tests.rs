use crate::{Futoshiki, FutoshikiGrid};
use crate::constraint::{Inequality, InequalitySet, Orientation};
use crate::solver::{BacktrackingSolver, Solution, Solver};
use crate::solver::strategy::{
    propagate,
    standard_strategy,
    FutoshikiInfo,
    InequalityBoundStrategy,
    OnlyCellStrategy,
    PeerEliminationStrategy,
    Propagation,
    StrategicBacktrackingSolver,
    Strategy
};

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;

use rand_chacha::ChaCha8Rng;

// Puzzles are derived from randomly generated Latin squares: the inequality
// constraints are read off the solved square, so every derived puzzle is
// guaranteed to be solvable, and the square itself is a known valid
// completion against which propagation can be checked.

fn random_latin_square(size: usize, rng: &mut impl Rng) -> Vec<Vec<usize>> {
    let mut symbols: Vec<usize> = (1..=size).collect();
    let mut row_offsets: Vec<usize> = (0..size).collect();
    let mut column_offsets: Vec<usize> = (0..size).collect();
    symbols.shuffle(rng);
    row_offsets.shuffle(rng);
    column_offsets.shuffle(rng);

    (0..size)
        .map(|row| (0..size)
            .map(|column| {
                let index =
                    (row_offsets[row] + column_offsets[column]) % size;
                symbols[index]
            })
            .collect())
        .collect()
}

fn derive_inequalities(square: &[Vec<usize>], probability: f64,
        rng: &mut impl Rng) -> InequalitySet {
    let size = square.len();
    let mut inequalities = InequalitySet::new(size).unwrap();

    for row in 0..size {
        for column in 0..(size - 1) {
            if rng.gen_bool(probability) {
                let origin_greater =
                    square[row][column] > square[row][column + 1];
                inequalities.add(Inequality::new(column, row,
                    Orientation::Horizontal, origin_greater)).unwrap();
            }
        }
    }

    for row in 0..(size - 1) {
        for column in 0..size {
            if rng.gen_bool(probability) {
                let origin_greater =
                    square[row][column] > square[row + 1][column];
                inequalities.add(Inequality::new(column, row,
                    Orientation::Vertical, origin_greater)).unwrap();
            }
        }
    }

    inequalities
}

fn derive_puzzle(square: &[Vec<usize>], probability: f64, blanks: usize,
        rng: &mut impl Rng) -> Futoshiki {
    let size = square.len();
    let inequalities = derive_inequalities(square, probability, rng);
    let mut grid = FutoshikiGrid::new(size).unwrap();

    for row in 0..size {
        for column in 0..size {
            grid.set_cell(column, row, square[row][column]).unwrap();
        }
    }

    let mut cells: Vec<(usize, usize)> = (0..size)
        .flat_map(|row| (0..size).map(move |column| (column, row)))
        .collect();
    cells.shuffle(rng);

    for &(column, row) in cells.iter().take(blanks) {
        grid.clear_cell(column, row).unwrap();
    }

    Futoshiki::new(grid, inequalities).unwrap()
}

fn assert_permutation_rows_and_columns(grid: &FutoshikiGrid) {
    let size = grid.size();

    for row in 0..size {
        for number in 1..=size {
            assert_eq!(1, (0..size)
                .filter(|&column|
                    grid.has_number(column, row, number).unwrap())
                .count(),
                "Row {} does not contain {} exactly once.", row, number);
        }
    }

    for column in 0..size {
        for number in 1..=size {
            assert_eq!(1, (0..size)
                .filter(|&row| grid.has_number(column, row, number).unwrap())
                .count(),
                "Column {} does not contain {} exactly once.", column,
                number);
        }
    }
}

fn assert_inequalities_satisfied(futoshiki: &Futoshiki,
        grid: &FutoshikiGrid) {
    for inequality in futoshiki.inequalities().iter() {
        let (origin_column, origin_row) = inequality.origin();
        let (neighbor_column, neighbor_row) = inequality.neighbor();
        let origin_number =
            grid.get_cell(origin_column, origin_row).unwrap().unwrap();
        let neighbor_number =
            grid.get_cell(neighbor_column, neighbor_row).unwrap().unwrap();

        assert!(inequality.holds(origin_number, neighbor_number),
            "Inequality at ({}, {}) violated by solution.", origin_column,
            origin_row);
    }
}

fn assert_solves_and_satisfies(solver: &impl Solver, puzzle: &Futoshiki) {
    let solution = solver.solve(puzzle);

    if let Solution::Solved(grid) = solution {
        assert!(puzzle.is_valid_solution(&grid).unwrap());
        assert_permutation_rows_and_columns(&grid);
        assert_inequalities_satisfied(puzzle, &grid);
    }
    else {
        panic!("Derived puzzle reported as unsolvable.");
    }
}

#[test]
fn plain_backtracking_solves_derived_puzzles() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);

    for &size in &[4usize, 5, 6] {
        for _ in 0..5 {
            let square = random_latin_square(size, &mut rng);
            let puzzle = derive_puzzle(&square, 0.3, size * 2, &mut rng);

            assert_solves_and_satisfies(&BacktrackingSolver, &puzzle);
        }
    }
}

#[test]
fn strategic_backtracking_solves_derived_puzzles() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let solver = StrategicBacktrackingSolver::new(standard_strategy());

    for _ in 0..10 {
        let square = random_latin_square(9, &mut rng);
        let puzzle = derive_puzzle(&square, 0.25, 40, &mut rng);

        assert_solves_and_satisfies(&solver, &puzzle);
    }
}

#[test]
fn strategic_backtracking_solves_blank_constrained_puzzles() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let solver = StrategicBacktrackingSolver::new(standard_strategy());

    for _ in 0..5 {
        let square = random_latin_square(6, &mut rng);
        let puzzle = derive_puzzle(&square, 0.5, 36, &mut rng);

        assert_solves_and_satisfies(&solver, &puzzle);
    }
}

#[test]
fn solvers_are_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(47);
    let strategic = StrategicBacktrackingSolver::new(standard_strategy());

    for _ in 0..5 {
        let square = random_latin_square(5, &mut rng);
        let puzzle = derive_puzzle(&square, 0.3, 10, &mut rng);

        assert_eq!(BacktrackingSolver.solve(&puzzle),
            BacktrackingSolver.solve(&puzzle));
        assert_eq!(strategic.solve(&puzzle), strategic.solve(&puzzle));
    }
}

#[test]
fn propagation_never_removes_solution_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(59);
    let strategy = standard_strategy();

    for _ in 0..10 {
        let square = random_latin_square(9, &mut rng);
        let puzzle = derive_puzzle(&square, 0.3, 45, &mut rng);
        let mut info = FutoshikiInfo::from_futoshiki(puzzle);

        assert_ne!(Propagation::Contradiction,
            propagate(&strategy, &mut info));

        for row in 0..9 {
            for column in 0..9 {
                assert!(info.get_options(column, row).unwrap()
                    .contains(square[row][column]),
                    "Propagation removed the solution value {} of ({}, {}).",
                    square[row][column], column, row);
            }
        }
    }
}

#[test]
fn propagation_converges_to_fixpoint() {
    let mut rng = ChaCha8Rng::seed_from_u64(71);
    let strategy = standard_strategy();

    for _ in 0..5 {
        let square = random_latin_square(7, &mut rng);
        let puzzle = derive_puzzle(&square, 0.4, 30, &mut rng);
        let mut info = FutoshikiInfo::from_futoshiki(puzzle);

        assert_ne!(Propagation::Contradiction,
            propagate(&strategy, &mut info));

        assert_eq!(Propagation::Stalled,
            PeerEliminationStrategy.apply(&mut info));
        assert_eq!(Propagation::Stalled,
            InequalityBoundStrategy.apply(&mut info));
        assert_eq!(Propagation::Stalled, OnlyCellStrategy.apply(&mut info));
    }
}
