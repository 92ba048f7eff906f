//! End-to-end solving tests exercising the public crate surface.

use nonuple_solver::{Board, Engine, InputError, SolveOutcome, Solver};

/// Solvable by propagation alone.
const EASY: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

/// The unique completion of `EASY`.
const EASY_SOLUTION: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// Propagation stalls on this grid; search must finish it.
const HARD: &str = "
    1__ __7 _9_
    _3_ _2_ __8
    __9 6__ 5__
    __5 3__ 9__
    _1_ _8_ __2
    6__ __4 ___
    3__ ___ _1_
    _4_ ___ __7
    __7 ___ 3__
";

fn values_of(s: &str) -> [u8; 81] {
    s.parse::<Board>().unwrap().to_values()
}

#[test]
fn solves_easy_puzzle_without_guessing() {
    let mut board: Board = EASY.parse().unwrap();
    let report = Solver::new().solve(&mut board);

    assert!(report.solved());
    assert_eq!(report.guesses, 0, "propagation alone should suffice");
    assert_eq!(board.to_values(), values_of(EASY_SOLUTION));
}

#[test]
fn hard_puzzle_stalls_propagation() {
    let mut board: Board = HARD.parse().unwrap();
    Engine::with_deduction_rules().run(&mut board);
    assert!(!board.is_complete());
    assert!(board.is_valid());
}

#[test]
fn solves_hard_puzzle_with_search() {
    let mut board: Board = HARD.parse().unwrap();
    let clues = board.to_values();
    let report = Solver::new().solve(&mut board);

    assert!(report.solved());
    assert!(report.guesses > 0);
    assert!(board.is_complete());
    assert!(board.is_valid());
    for (given, cell) in clues.iter().zip(&board.to_values()) {
        if *given != 0 {
            assert_eq!(given, cell);
        }
    }
}

#[test]
fn repeat_solves_are_identical() {
    let solver = Solver::new();
    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut board: Board = HARD.parse().unwrap();
        assert!(solver.solve(&mut board).solved());
        runs.push(board.to_values());
    }
    assert_eq!(runs[0], runs[1]);
}

#[test]
fn duplicate_clues_fail_cleanly() {
    // Two 5s in the first row
    let mut values = values_of(EASY);
    values[1] = 5;
    let mut board = Board::from_values(&values).unwrap();

    assert!(!board.is_valid());
    let report = Solver::new().solve(&mut board);
    assert_eq!(report.outcome, SolveOutcome::Unsolvable);
    // The board was not touched
    assert_eq!(board.to_values(), values);
}

#[test]
fn malformed_input_is_rejected_at_construction() {
    assert!(matches!(
        Board::from_values(&[0; 80]),
        Err(InputError::WrongLength { len: 80 })
    ));
    assert!(matches!(
        Board::from_values(&[0; 82]),
        Err(InputError::WrongLength { len: 82 })
    ));

    let mut values = [0_u8; 81];
    values[40] = 12;
    assert!(matches!(
        Board::from_values(&values),
        Err(InputError::ValueOutOfRange {
            index: 40,
            value: 12
        })
    ));
}

#[test]
fn empty_board_finds_some_completion() {
    // 0 clues: everything is a guess, and any completion is acceptable
    let mut board = Board::new();
    let report = Solver::new().solve(&mut board);

    assert!(report.solved());
    assert!(board.is_complete());
    assert!(board.is_valid());
}
