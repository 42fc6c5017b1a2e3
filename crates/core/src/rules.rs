//! Rules module - Conway's B3/S23 transition
//!
//! A live cell survives with 2 or 3 live neighbors, a dead cell is born with
//! exactly 3, and every other cell is dead in the next generation.

/// Next state of one cell given its state and live neighbor count.
///
/// # Examples
///
/// ```
/// use term_life_core::next_state;
///
/// assert!(next_state(true, 2));   // survives
/// assert!(next_state(false, 3));  // birth
/// assert!(!next_state(true, 4));  // overpopulation
/// assert!(!next_state(false, 2)); // stays dead
/// ```
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2 | 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert!(!next_state(true, n), "live cell with {} neighbors should die", n);
        }
    }

    #[test]
    fn test_reproduction() {
        assert!(next_state(false, 3));
    }

    #[test]
    fn test_dead_cells_stay_dead_otherwise() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert!(!next_state(false, n), "dead cell with {} neighbors should stay dead", n);
        }
    }
}
