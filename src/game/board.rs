use crate::game::catalogue::Catalogue;
use crate::game::random::TileRng;
use crate::game::shuffle::{shuffle_slots, ShuffleStrategy};
use crate::game::tile::{ImageLabel, Tile, TileStatus};
use crate::{MemoryMatchError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) tiles: Vec<Tile>,
}

/// Checks that `tile_count` is a positive even number the catalogue can fill.
pub fn validate_tile_count(tile_count: usize, catalogue: &Catalogue) -> Result<()> {
    if tile_count == 0 || tile_count % 2 != 0 {
        return Err(MemoryMatchError::InvalidTileCount(tile_count));
    }
    let needed = tile_count / 2;
    if needed > catalogue.len() {
        return Err(MemoryMatchError::CatalogueTooSmall {
            needed,
            available: catalogue.len(),
        });
    }
    Ok(())
}

/// Deals a fresh board: `tile_count / 2` labels drawn from the catalogue,
/// each placed on two slots, then shuffled.
pub fn deal_board(
    catalogue: &Catalogue,
    tile_count: usize,
    strategy: ShuffleStrategy,
    rng: &mut dyn TileRng,
) -> Result<Board> {
    validate_tile_count(tile_count, catalogue)?;

    let pairs = tile_count / 2;
    let labels = catalogue.draw(pairs, rng);
    let mut slots: Vec<ImageLabel> = (0..tile_count)
        .map(|i| labels[i % pairs].clone())
        .collect();
    shuffle_slots(&mut slots, strategy, rng);

    Ok(Board {
        tiles: slots.into_iter().map(Tile::hidden).collect(),
    })
}

impl Board {
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.tiles.get(index).is_some_and(Tile::is_visible)
    }

    pub fn same_label(&self, first: usize, second: usize) -> bool {
        match (self.tiles.get(first), self.tiles.get(second)) {
            (Some(a), Some(b)) => a.label == b.label,
            _ => false,
        }
    }

    /// Hidden -> Flipped. Returns whether the tile changed.
    pub(crate) fn flip(&mut self, index: usize) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) if tile.status == TileStatus::Hidden => {
                tile.status = TileStatus::Flipped;
                true
            }
            _ => false,
        }
    }

    /// Flipped -> Hidden. Matched tiles never hide again.
    pub(crate) fn hide(&mut self, index: usize) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) if tile.status == TileStatus::Flipped => {
                tile.status = TileStatus::Hidden;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn mark_matched(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.status = TileStatus::Matched;
        }
    }

    pub fn hidden_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.status == TileStatus::Hidden)
            .map(|(i, _)| i)
    }
}
