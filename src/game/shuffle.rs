use crate::game::random::TileRng;
use serde::{Deserialize, Serialize};

/// How dealt tile slots get permuted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleStrategy {
    /// One swap of two distinct random slots per pair on the board.
    /// Not a uniform permutation; kept for layouts compatible with the first release.
    Legacy,
    /// Uniform Fisher-Yates over every slot.
    #[default]
    FisherYates,
}

pub fn shuffle_slots<T>(slots: &mut [T], strategy: ShuffleStrategy, rng: &mut dyn TileRng) {
    match strategy {
        ShuffleStrategy::Legacy => legacy_swaps(slots, slots.len() / 2, rng),
        ShuffleStrategy::FisherYates => fisher_yates(slots, rng),
    }
}

fn legacy_swaps<T>(slots: &mut [T], swaps: usize, rng: &mut dyn TileRng) {
    let len = slots.len();
    if len < 2 {
        return;
    }
    for _ in 0..swaps {
        let first = rng.below(len);
        let mut second = rng.below(len);
        while second == first {
            second = rng.below(len);
        }
        slots.swap(first, second);
    }
}

fn fisher_yates<T>(slots: &mut [T], rng: &mut dyn TileRng) {
    for i in (1..slots.len()).rev() {
        let j = rng.below(i + 1);
        slots.swap(i, j);
    }
}
