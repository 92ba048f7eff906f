//! Command-line front end for the nonuple solving engine.
//!
//! Loads an 81-value puzzle from an argument or a file, runs the solver, and
//! prints the grid before and after. The core performs no I/O; everything
//! user-facing lives here.
//!
//! # Usage
//!
//! ```sh
//! # Grid string: digits are clues, 0/_/. are blanks, whitespace is ignored
//! nonuple 530070000600195000098000060800060003400803001700020006060000280000419005000080079
//!
//! # From a file containing a grid string or comma-separated values
//! nonuple --file puzzle.csv
//! ```
//!
//! Exits with status 1 when the puzzle is malformed or no solution exists.

use std::{fmt::Write as _, fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use nonuple_solver::{Board, Dimension, InputError, SolveOutcome, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as an 81-character grid string.
    puzzle: Option<String>,

    /// Read the puzzle from a file (grid string or comma-separated values).
    #[arg(long, value_name = "PATH", conflicts_with = "puzzle")]
    file: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("no puzzle given; pass a grid string or --file")]
    MissingPuzzle,
    #[display("malformed puzzle: {_0}")]
    Input(InputError),
    #[display("invalid cell value {field:?} in comma-separated puzzle")]
    #[from(ignore)]
    BadCsvField {
        field: String,
    },
    #[display("cannot read puzzle file: {_0}")]
    Io(io::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(SolveOutcome::Solved) => ExitCode::SUCCESS,
        Ok(outcome) => {
            log::debug!("unsuccessful outcome: {outcome:?}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<SolveOutcome, CliError> {
    let mut board = load_board(args)?;

    println!("{}", render(&board));
    let report = Solver::new().solve(&mut board);

    match report.outcome {
        SolveOutcome::Solved => {
            println!("{}", render(&board));
            println!(
                "solved ({} guesses, {} passes)",
                report.guesses,
                report.engine.passes()
            );
        }
        SolveOutcome::Unsolvable => println!("no solution found"),
        SolveOutcome::Aborted => println!("aborted"),
    }
    Ok(report.outcome)
}

fn load_board(args: &Args) -> Result<Board, CliError> {
    let text = match (&args.puzzle, &args.file) {
        (Some(puzzle), _) => puzzle.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => return Err(CliError::MissingPuzzle),
    };
    let board = if text.contains(',') {
        from_csv(&text)?
    } else {
        text.parse()?
    };
    Ok(board)
}

/// Parses the comma-separated form: 81 values, `0` or empty for blanks.
fn from_csv(text: &str) -> Result<Board, CliError> {
    let mut values = Vec::with_capacity(81);
    for field in text.split(',') {
        let field = field.trim();
        if field.is_empty() {
            values.push(0);
        } else {
            // Report the whole field, not a single character: non-numeric
            // and out-of-`u8` fields (e.g. `300`) both land here.
            let value = field.parse::<u8>().map_err(|_| CliError::BadCsvField {
                field: field.to_owned(),
            })?;
            values.push(value);
        }
    }
    Ok(Board::from_values(&values)?)
}

/// Renders the board with divider lines around each 3×3 box.
fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..9 {
        if row % 3 == 0 {
            out.push_str("------------------\n");
        }
        for (i, pos) in Dimension::Row.positions(row).iter().enumerate() {
            let value = board.value(*pos).map_or(0, |d| d.value());
            let sep = if i % 3 == 2 { '|' } else { ' ' };
            let _ = write!(out, "{value}{sep}");
        }
        out.push('\n');
    }
    out.push_str("------------------");
    out
}
