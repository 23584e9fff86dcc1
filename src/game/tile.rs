use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the image hidden under a tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageLabel(String);

impl ImageLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ImageLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&str> for ImageLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStatus {
    Hidden,
    /// Face up and waiting in the selection buffer.
    Flipped,
    /// Face up for the rest of the session.
    Matched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub label: ImageLabel,
    pub status: TileStatus,
}

impl Tile {
    pub fn hidden(label: ImageLabel) -> Self {
        Self {
            label,
            status: TileStatus::Hidden,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.status != TileStatus::Hidden
    }
}
