pub mod stars;
pub mod time_format;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use stars::{star_rating, star_string, MAX_STARS};
pub use time_format::format_elapsed;

/// Snapshot of the score panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub moves: u32,
    pub elapsed_seconds: u64,
    pub stars: u8,
}

impl Score {
    pub fn new(moves: u32, elapsed_seconds: u64) -> Self {
        Self {
            moves,
            elapsed_seconds,
            stars: star_rating(moves),
        }
    }

    pub fn formatted_elapsed(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }

    pub fn star_string(&self) -> String {
        star_string(self.stars)
    }

    pub fn moves_label(&self) -> String {
        format!("{} moves", self.moves)
    }
}

/// Final result of a solved session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub session_id: Uuid,
    pub tile_count: usize,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_derives_stars_from_moves() {
        let score = Score::new(26, 75);

        assert_eq!(score.stars, 4);
        assert_eq!(score.star_string(), "★★★★☆");
        assert_eq!(score.formatted_elapsed(), "1mn 15s");
        assert_eq!(score.moves_label(), "26 moves");
    }
}
