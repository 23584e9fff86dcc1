use crate::config::GameConfig;
use crate::game::board::deal_board;
use crate::game::catalogue::Catalogue;
use crate::game::random::{StdTileRng, TileRng};
use crate::game::session::{GameSession, SessionState};
use crate::game::tile::{ImageLabel, Tile};
use crate::scoring::{star_string, GameSummary, Score};
use crate::timing::{Clock, FiredTimer, Scheduler, TimerId, TimerKind, VirtualTime};
use crate::Result;
use uuid::Uuid;

/// Notifications for whatever renders the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    TileRevealed { index: usize, label: ImageLabel },
    TileHidden { index: usize },
    PairMatched { first: usize, second: usize },
    /// The pair stays face up until the hide delay runs out or another tile is picked.
    Mismatched { first: usize, second: usize },
    ScoreChanged(Score),
    Solved(GameSummary),
}

/// Owns one game session and drives it from tile selections and timer deliveries.
///
/// The engine never sleeps or spawns. Timers are armed through the injected
/// [`Scheduler`] and the host hands fired timers back via [`GameEngine::on_timer`].
pub struct GameEngine {
    config: GameConfig,
    catalogue: Catalogue,
    rng: Box<dyn TileRng>,
    clock: Box<dyn Clock>,
    scheduler: Box<dyn Scheduler>,
    session: GameSession,
}

impl GameEngine {
    /// Validates `config` and deals the first board.
    pub fn new(
        config: GameConfig,
        mut rng: Box<dyn TileRng>,
        clock: Box<dyn Clock>,
        scheduler: Box<dyn Scheduler>,
    ) -> Result<Self> {
        config.validate()?;
        let catalogue = config.build_catalogue();
        let board = deal_board(&catalogue, config.tile_count, config.shuffle, rng.as_mut())?;
        let session = GameSession::new(board);
        log::info!(
            "New memory session {} with {} tiles ({:?} shuffle)",
            session.id(),
            config.tile_count,
            config.shuffle
        );

        Ok(Self {
            config,
            catalogue,
            rng,
            clock,
            scheduler,
            session,
        })
    }

    /// Engine on a manually driven timeline with a seeded RNG.
    /// The returned [`VirtualTime`] shares the engine's clock and timers.
    pub fn with_virtual_time(config: GameConfig, seed: u64) -> Result<(Self, VirtualTime)> {
        let time = VirtualTime::new();
        let engine = Self::new(
            config,
            Box::new(StdTileRng::seeded(seed)),
            Box::new(time.clone()),
            Box::new(time.clone()),
        )?;
        Ok((engine, time))
    }

    /// Deals a new board of `tile_count` tiles and starts over.
    /// On error the current session is left untouched.
    pub fn reset(&mut self, tile_count: usize) -> Result<()> {
        let board = deal_board(
            &self.catalogue,
            tile_count,
            self.config.shuffle,
            self.rng.as_mut(),
        )?;
        self.cancel_timers();

        let previous = self.session.id();
        self.session = GameSession::new(board);
        self.config.tile_count = tile_count;
        log::info!(
            "Session {} reset to {} with {} tiles",
            previous,
            self.session.id(),
            tile_count
        );
        Ok(())
    }

    pub fn replay(&mut self) -> Result<()> {
        self.reset(self.config.tile_count)
    }

    /// Flips tile `index`. Out-of-range and already visible tiles are ignored.
    pub fn select_tile(&mut self, index: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let Some(tile) = self.session.board.tile(index) else {
            log::debug!(
                "Ignoring tile {} on a {}-tile board",
                index,
                self.session.board.len()
            );
            return events;
        };
        if tile.is_visible() {
            log::debug!("Ignoring tile {}: already face up", index);
            return events;
        }
        let label = tile.label.clone();

        if self.session.state == SessionState::NotStarted {
            self.start(&mut events);
        }

        // A third pick while a mismatch is still showing turns that pair back over first.
        if self.session.selection.is_full() {
            self.hide_selection(&mut events);
        }

        self.session.selection.push(index);
        self.session.board.flip(index);
        events.push(GameEvent::TileRevealed { index, label });

        self.session.moves += 1;
        events.push(GameEvent::ScoreChanged(self.score()));

        if let Some((first, second)) = self.session.selection.pair() {
            self.resolve_pair(first, second, &mut events);
        }

        if self.session.tiles_remaining == 0 {
            self.finish(&mut events);
        }

        events
    }

    /// Handles a timer delivered by the host. Ids this session does not own are ignored.
    pub fn on_timer(&mut self, id: TimerId) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.session.hide_timer == Some(id) {
            self.session.hide_timer = None;
            self.hide_selection(&mut events);
        } else if self.session.tick_timer == Some(id) {
            events.push(GameEvent::ScoreChanged(self.score()));
        } else {
            log::debug!("Ignoring stale {} for session {}", id, self.session.id());
        }

        events
    }

    pub fn on_timers(&mut self, fired: impl IntoIterator<Item = FiredTimer>) -> Vec<GameEvent> {
        fired
            .into_iter()
            .flat_map(|timer| self.on_timer(timer.id))
            .collect()
    }

    fn start(&mut self, events: &mut Vec<GameEvent>) {
        self.session.started_at = Some(self.clock.now());
        self.session.state = SessionState::InProgress;
        self.session.tick_timer = Some(
            self.scheduler
                .schedule_repeating(self.config.tick_interval(), TimerKind::DisplayTick),
        );
        log::info!("Session {} started", self.session.id());
        events.push(GameEvent::Started);
    }

    fn resolve_pair(&mut self, first: usize, second: usize, events: &mut Vec<GameEvent>) {
        if self.session.board.same_label(first, second) {
            self.session.board.mark_matched(first);
            self.session.board.mark_matched(second);
            self.session.selection.clear();
            self.session.tiles_remaining = self.session.tiles_remaining.saturating_sub(2);
            events.push(GameEvent::PairMatched { first, second });
        } else {
            let id = self
                .scheduler
                .schedule_once(self.config.hide_delay(), TimerKind::HideMismatch);
            self.session.hide_timer = Some(id);
            events.push(GameEvent::Mismatched { first, second });
        }
    }

    fn hide_selection(&mut self, events: &mut Vec<GameEvent>) {
        if let Some(id) = self.session.hide_timer.take() {
            self.scheduler.cancel(id);
        }
        for index in self.session.selection.take() {
            if self.session.board.hide(index) {
                events.push(GameEvent::TileHidden { index });
            }
        }
    }

    fn finish(&mut self, events: &mut Vec<GameEvent>) {
        self.session.finished_at = Some(self.clock.now());
        self.cancel_timers();
        self.session.state = SessionState::Solved;

        let summary = GameSummary {
            session_id: self.session.id(),
            tile_count: self.session.board.len(),
            score: self.score(),
        };
        log::info!(
            "Session {} solved in {} moves, {} ({} stars)",
            summary.session_id,
            summary.score.moves,
            summary.score.formatted_elapsed(),
            summary.score.stars
        );
        self.session.summary = Some(summary.clone());
        events.push(GameEvent::Solved(summary));
    }

    fn cancel_timers(&mut self) {
        if let Some(id) = self.session.hide_timer.take() {
            self.scheduler.cancel(id);
        }
        if let Some(id) = self.session.tick_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_id(&self) -> Uuid {
        self.session.id()
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn is_solved(&self) -> bool {
        self.session.state() == SessionState::Solved
    }

    pub fn tile_count(&self) -> usize {
        self.session.board.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        self.session.board.tiles()
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.session.board.tile(index)
    }

    pub fn is_tile_visible(&self, index: usize) -> bool {
        self.session.board.is_visible(index)
    }

    pub fn selection(&self) -> &[usize] {
        self.session.selection()
    }

    pub fn moves(&self) -> u32 {
        self.session.moves()
    }

    pub fn tiles_remaining(&self) -> usize {
        self.session.tiles_remaining()
    }

    pub fn pairs_remaining(&self) -> usize {
        self.session.tiles_remaining() / 2
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.session.elapsed_seconds(self.clock.now())
    }

    pub fn formatted_elapsed(&self) -> String {
        self.score().formatted_elapsed()
    }

    pub fn star_rating(&self) -> u8 {
        self.score().stars
    }

    pub fn star_string(&self) -> String {
        star_string(self.star_rating())
    }

    pub fn score(&self) -> Score {
        self.session.score(self.clock.now())
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.session.summary()
    }
}
