//! Stepping a generation must reuse the grid's two buffers.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering::Relaxed};

use term_life::core::{step, step_in_order, Grid, SimpleRng};

struct Tally;

static ARMED: AtomicBool = AtomicBool::new(false);
static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

fn tally() {
    if ARMED.load(Relaxed) {
        ALLOCATIONS.fetch_add(1, Relaxed);
    }
}

#[global_allocator]
static ALLOCATOR: Tally = Tally;

unsafe impl GlobalAlloc for Tally {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        tally();
        System.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        tally();
        System.alloc_zeroed(layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        tally();
        System.realloc(ptr, layout, new_size)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

fn allocations_during(f: impl FnOnce()) -> usize {
    ALLOCATIONS.store(0, Relaxed);
    ARMED.store(true, Relaxed);
    f();
    ARMED.store(false, Relaxed);
    ALLOCATIONS.load(Relaxed)
}

#[test]
fn generation_step_does_not_allocate() {
    let mut grid = Grid::new(64, 96);
    grid.fill_random(&mut SimpleRng::new(42));
    let (rows, cols) = grid.dimensions();

    let count = allocations_during(|| {
        for _ in 0..100 {
            step(&mut grid);
        }
        let order = (0..rows).rev().flat_map(|r| (0..cols).map(move |c| (r, c)));
        step_in_order(&mut grid, order);
        let _ = grid.population();
        let _ = grid.neighbor_count(0, 0);
    });

    assert_eq!(count, 0);
    assert_eq!(grid.generation(), 101);
}
