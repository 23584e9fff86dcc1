use crate::game::engine::{GameEngine, GameEvent};
use crate::game::random::{StdTileRng, TileRng};
use crate::game::tile::ImageLabel;
use std::collections::HashMap;

/// Automated player with perfect recall of every tile it has seen.
pub struct MemoryPlayer {
    seen: HashMap<usize, ImageLabel>,
    rng: Box<dyn TileRng>,
}

impl MemoryPlayer {
    pub fn new(rng: Box<dyn TileRng>) -> Self {
        Self {
            seen: HashMap::new(),
            rng,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(StdTileRng::seeded(seed)))
    }

    pub fn observe(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::TileRevealed { index, label } => {
                    self.seen.insert(*index, label.clone());
                }
                GameEvent::PairMatched { first, second } => {
                    self.seen.remove(first);
                    self.seen.remove(second);
                }
                _ => {}
            }
        }
    }

    pub fn forget(&mut self) {
        self.seen.clear();
    }

    pub fn remembered(&self) -> usize {
        self.seen.len()
    }

    /// Opening pick of a turn: half of a remembered pair, else a tile never seen,
    /// else any face-down tile.
    pub fn choose_first(&mut self, engine: &GameEngine) -> Option<usize> {
        let hidden: Vec<usize> = engine.session().board().hidden_indices().collect();

        let mut by_label: HashMap<&ImageLabel, Vec<usize>> = HashMap::new();
        for index in &hidden {
            if let Some(label) = self.seen.get(index) {
                by_label.entry(label).or_default().push(*index);
            }
        }
        let mut known_pairs: Vec<usize> = by_label
            .values()
            .filter(|indices| indices.len() >= 2)
            .map(|indices| indices[0])
            .collect();
        known_pairs.sort_unstable();
        if let Some(index) = self.pick(&known_pairs) {
            return Some(index);
        }

        let unseen: Vec<usize> = hidden
            .iter()
            .copied()
            .filter(|index| !self.seen.contains_key(index))
            .collect();
        self.pick(&unseen).or_else(|| self.pick(&hidden))
    }

    /// Second pick: the remembered partner of `first`, else a tile never seen,
    /// else any other face-down tile.
    pub fn choose_second(&mut self, engine: &GameEngine, first: usize) -> Option<usize> {
        let label = engine.tile(first)?.label.clone();
        let hidden: Vec<usize> = engine
            .session()
            .board()
            .hidden_indices()
            .filter(|&index| index != first)
            .collect();

        if let Some(partner) = hidden
            .iter()
            .copied()
            .find(|index| self.seen.get(index) == Some(&label))
        {
            return Some(partner);
        }

        let unseen: Vec<usize> = hidden
            .iter()
            .copied()
            .filter(|index| !self.seen.contains_key(index))
            .collect();
        self.pick(&unseen).or_else(|| self.pick(&hidden))
    }

    fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.below(candidates.len())])
    }
}
