use crate::game::board::Board;
use crate::game::selection::SelectionBuffer;
use crate::scoring::{GameSummary, Score};
use crate::timing::TimerId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    InProgress,
    Solved,
}

/// State of one game, from deal to solve.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) id: Uuid,
    pub(crate) board: Board,
    pub(crate) selection: SelectionBuffer,
    pub(crate) moves: u32,
    pub(crate) tiles_remaining: usize,
    pub(crate) state: SessionState,
    pub(crate) started_at: Option<Duration>,
    pub(crate) finished_at: Option<Duration>,
    pub(crate) summary: Option<GameSummary>,
    pub(crate) hide_timer: Option<TimerId>,
    pub(crate) tick_timer: Option<TimerId>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            id: Uuid::new_v4(),
            tiles_remaining: board.len(),
            board,
            selection: SelectionBuffer::new(),
            moves: 0,
            state: SessionState::NotStarted,
            started_at: None,
            finished_at: None,
            summary: None,
            hide_timer: None,
            tick_timer: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn tiles_remaining(&self) -> usize {
        self.tiles_remaining
    }

    pub fn selection(&self) -> &[usize] {
        self.selection.as_slice()
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    /// Whole seconds played as of `now`; frozen once solved.
    pub fn elapsed_seconds(&self, now: Duration) -> u64 {
        match self.started_at {
            None => 0,
            Some(start) => {
                let end = self.finished_at.unwrap_or(now);
                end.saturating_sub(start).as_secs()
            }
        }
    }

    pub fn score(&self, now: Duration) -> Score {
        Score::new(self.moves, self.elapsed_seconds(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::deal_board;
    use crate::game::catalogue::Catalogue;
    use crate::game::random::StdTileRng;
    use crate::game::shuffle::ShuffleStrategy;

    fn session(tile_count: usize) -> GameSession {
        let mut rng = StdTileRng::seeded(9);
        let board = deal_board(
            &Catalogue::default(),
            tile_count,
            ShuffleStrategy::FisherYates,
            &mut rng,
        )
        .unwrap();
        GameSession::new(board)
    }

    #[test]
    fn test_new_session_is_zeroed() {
        let session = session(16);

        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.tiles_remaining(), 16);
        assert!(session.selection().is_empty());
        assert!(session.summary().is_none());
        assert_eq!(session.elapsed_seconds(Duration::from_secs(99)), 0);
    }

    #[test]
    fn test_elapsed_floors_and_freezes() {
        let mut session = session(4);
        session.started_at = Some(Duration::from_millis(500));

        assert_eq!(session.elapsed_seconds(Duration::from_millis(1499)), 0);
        assert_eq!(session.elapsed_seconds(Duration::from_millis(1500)), 1);
        assert_eq!(session.elapsed_seconds(Duration::from_millis(76_400)), 75);

        session.finished_at = Some(Duration::from_millis(10_600));
        assert_eq!(session.elapsed_seconds(Duration::from_secs(3600)), 10);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(session(2).id(), session(2).id());
    }
}
