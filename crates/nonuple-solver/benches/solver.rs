//! Solver benchmarks over representative puzzles.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use nonuple_solver::{Board, Solver};

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

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::new();

    let easy: Board = EASY.parse().unwrap();
    c.bench_function("solve/propagation_only", |b| {
        b.iter(|| {
            let mut board = easy.clone();
            hint::black_box(solver.solve(hint::black_box(&mut board)))
        });
    });

    let hard: Board = HARD.parse().unwrap();
    c.bench_function("solve/search_required", |b| {
        b.iter(|| {
            let mut board = hard.clone();
            hint::black_box(solver.solve(hint::black_box(&mut board)))
        });
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
