//! Known Life patterns on wrapped boards

use term_life::core::{step, step_in_order, step_n, Grid, SimpleRng};

fn alive(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter_alive().collect()
}

/// Cells of `grid` moved by (dr, dc) with wrap-around.
fn translated(grid: &Grid, dr: usize, dc: usize) -> Vec<(usize, usize)> {
    let (rows, cols) = grid.dimensions();
    let mut cells: Vec<_> = grid
        .iter_alive()
        .map(|(r, c)| ((r + dr) % rows, (c + dc) % cols))
        .collect();
    cells.sort_unstable();
    cells
}

#[test]
fn all_dead_stays_dead() {
    for (rows, cols) in [(1, 1), (2, 3), (6, 6), (17, 40)] {
        let mut grid = Grid::new(rows, cols);
        step_n(&mut grid, 25);
        assert!(grid.is_empty(), "{}x{} grid came alive", rows, cols);
        assert_eq!(grid.generation(), 25);
    }
}

#[test]
fn block_is_a_still_life() {
    let mut grid = Grid::from_picture(&[
        "......",
        "......",
        "..##..",
        "..##..",
        "......",
        "......",
    ]);
    let start = alive(&grid);
    for _ in 0..10 {
        step(&mut grid);
        assert_eq!(alive(&grid), start);
    }
}

#[test]
fn block_split_across_the_seam_is_still_a_still_life() {
    let mut grid = Grid::new(6, 6);
    for (r, c) in [(5, 5), (5, 0), (0, 5), (0, 0)] {
        grid.set(r, c, true);
    }
    let start = alive(&grid);
    step_n(&mut grid, 7);
    assert_eq!(alive(&grid), start);
}

#[test]
fn blinker_has_period_two() {
    let mut grid = Grid::from_picture(&[
        "......",
        "......",
        ".###..",
        "......",
        "......",
        "......",
    ]);
    let horizontal = alive(&grid);

    step(&mut grid);
    assert_eq!(alive(&grid), vec![(1, 2), (2, 2), (3, 2)]);

    step(&mut grid);
    assert_eq!(alive(&grid), horizontal);

    step_n(&mut grid, 4);
    assert_eq!(alive(&grid), horizontal);
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    let mut grid = Grid::from_picture(&[
        ".#........",
        "..#.......",
        "###.......",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
    ]);

    let mut expected = translated(&grid, 1, 1);
    for _ in 0..3 {
        let before = alive(&grid);
        step(&mut grid);
        assert_ne!(alive(&grid), before);
    }
    step(&mut grid);
    assert_eq!(alive(&grid), expected);

    // Keep going across both seams; a full lap on a 10x10 torus takes 40 steps.
    for _ in 0..9 {
        expected = translated(&grid, 1, 1);
        step_n(&mut grid, 4);
        assert_eq!(alive(&grid), expected);
        assert_eq!(grid.population(), 5);
    }
}

#[test]
fn step_result_does_not_depend_on_evaluation_order() {
    let mut rng = SimpleRng::new(2024);
    for &(rows, cols) in &[(6, 6), (9, 13), (20, 7)] {
        let mut base = Grid::new(rows, cols);
        base.fill_random(&mut rng);

        let mut reference = base.clone();
        step(&mut reference);

        let mut order: Vec<(usize, usize)> = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .collect();
        for _ in 0..5 {
            rng.shuffle(&mut order);
            let mut shuffled = base.clone();
            step_in_order(&mut shuffled, order.iter().copied());
            assert_eq!(shuffled.cells(), reference.cells());
        }
    }
}

#[test]
fn random_fill_is_reproducible_from_seed() {
    let mut a = Grid::new(12, 12);
    let mut b = Grid::new(12, 12);
    a.fill_random(&mut SimpleRng::new(5));
    b.fill_random(&mut SimpleRng::new(5));
    assert_eq!(a, b);
    assert!(a.population() > 0 && a.population() < 144);
}
