//! Seeded random source for board seeding.
//!
//! A 64-bit LCG (Knuth's MMIX multiplier) whose output is the high half of the
//! state. The same seed (`--seed`) always produces the same board.

use std::time::{SystemTime, UNIX_EPOCH};

const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            state: u64::from(seed) ^ 0x9e37_79b9_7f4a_7c15,
        };
        // Mix the seed so that nearby seeds diverge from the first draw.
        rng.next_u32();
        rng
    }

    /// Seed from the wall clock.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        log::debug!("random seed {}", seed);
        Self::new(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 32) as u32
    }

    /// One fair bit, from the most significant output bit.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }

    /// Uniform-enough value in `0..bound`; `bound` must be non-zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }

    /// Fisher-Yates.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::from_clock()
    }
}
