use crate::game::random::TileRng;
use crate::game::tile::ImageLabel;
use std::collections::HashSet;

/// Image labels shipped with the game.
pub const DEFAULT_IMAGE_LABELS: [&str; 45] = [
    "brick", "symbol", "pick", "checkmate", "spades",
    "zombie", "ghost", "mushroom", "mushroom", "chess_board",
    "hearts", "ingot", "donkey", "castle", "king",
    "clock", "diamond", "bow", "metroid", "bricks",
    "rook", "shovel", "clubs", "arrow", "alien",
    "mushroom", "bishop", "poker_chip", "dices", "bone",
    "helmet", "flower", "queen", "pinball", "puzzle",
    "symbols", "coin", "pawn", "ping_pong", "axe",
    "sword", "pipe", "knight", "poker", "dominoes",
];

/// Distinct image labels pairs are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    labels: Vec<ImageLabel>,
}

impl Catalogue {
    /// Builds a catalogue keeping the first occurrence of each label.
    pub fn new<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<ImageLabel>,
    {
        let mut seen = HashSet::new();
        let labels = labels
            .into_iter()
            .map(Into::into)
            .filter(|label: &ImageLabel| seen.insert(label.clone()))
            .collect();
        Self { labels }
    }

    pub fn labels(&self) -> &[ImageLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest board this catalogue can fill.
    pub fn max_tile_count(&self) -> usize {
        self.labels.len() * 2
    }

    /// Draws `count` distinct labels uniformly without replacement.
    /// The caller guarantees `count <= self.len()`.
    pub fn draw(&self, count: usize, rng: &mut dyn TileRng) -> Vec<ImageLabel> {
        let mut pool = self.labels.clone();
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count.min(pool.len()) {
            let idx = rng.below(pool.len());
            drawn.push(pool.remove(idx));
        }
        drawn
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_LABELS)
    }
}
