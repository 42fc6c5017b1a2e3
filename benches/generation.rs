use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_life::core::{step, step_n, Grid, SimpleRng};

fn random_grid(rows: usize, cols: usize, seed: u32) -> Grid {
    let mut grid = Grid::new(rows, cols);
    grid.fill_random(&mut SimpleRng::new(seed));
    grid
}

fn bench_step(c: &mut Criterion) {
    let mut grid = random_grid(256, 256, 12345);

    c.bench_function("step_256x256", |b| {
        b.iter(|| {
            step(black_box(&mut grid));
        })
    });
}

fn bench_terminal_board(c: &mut Criterion) {
    // A typical 80x24 terminal leaves 23 rows for the board.
    let mut grid = random_grid(23, 80, 7);

    c.bench_function("step_23x80", |b| {
        b.iter(|| {
            step(black_box(&mut grid));
        })
    });
}

fn bench_population(c: &mut Criterion) {
    let mut grid = random_grid(256, 256, 99);
    step_n(&mut grid, 10);

    c.bench_function("population_256x256", |b| {
        b.iter(|| black_box(&grid).population())
    });
}

criterion_group!(benches, bench_step, bench_terminal_board, bench_population);
criterion_main!(benches);
