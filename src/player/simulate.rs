use crate::config::GameConfig;
use crate::game::engine::GameEngine;
use crate::player::memory_player::MemoryPlayer;
use crate::scoring::{GameSummary, MAX_STARS};
use crate::timing::VirtualTime;
use crate::{MemoryMatchError, Result};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Plays one full game with a [`MemoryPlayer`] on virtual time.
///
/// `think_time` passes after every click, and timers that come due meanwhile
/// are delivered before the next pick.
pub fn simulate_game(config: GameConfig, seed: u64, think_time: Duration) -> Result<GameSummary> {
    let (mut engine, time) = GameEngine::with_virtual_time(config, seed)?;
    let mut player = MemoryPlayer::seeded(seed.wrapping_add(1));
    // A perfect-recall player needs at most two turns per pair.
    let move_limit = (engine.tile_count() as u32).saturating_mul(4);

    while !engine.is_solved() {
        let Some(first) = player.choose_first(&engine) else {
            break;
        };
        click(&mut engine, &mut player, &time, first, think_time);
        if engine.is_solved() {
            break;
        }

        let Some(second) = player.choose_second(&engine, first) else {
            break;
        };
        click(&mut engine, &mut player, &time, second, think_time);

        if engine.moves() > move_limit {
            return Err(MemoryMatchError::Simulation(format!(
                "no solution after {} moves on {} tiles",
                engine.moves(),
                engine.tile_count()
            )));
        }
    }

    engine.summary().cloned().ok_or_else(|| {
        MemoryMatchError::Simulation(format!(
            "player stopped with {} tiles left",
            engine.tiles_remaining()
        ))
    })
}

fn click(
    engine: &mut GameEngine,
    player: &mut MemoryPlayer,
    time: &VirtualTime,
    index: usize,
    think_time: Duration,
) {
    let events = engine.select_tile(index);
    player.observe(&events);
    let events = engine.on_timers(time.advance(think_time));
    player.observe(&events);
}

/// Aggregate of many simulated games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub games: usize,
    pub tile_count: usize,
    pub mean_moves: f64,
    pub min_moves: u32,
    pub max_moves: u32,
    pub mean_seconds: f64,
    /// `star_histogram[n]` counts games rated `n` stars.
    pub star_histogram: [usize; MAX_STARS as usize + 1],
}

impl SimulationReport {
    pub fn from_summaries(summaries: &[GameSummary]) -> Self {
        let games = summaries.len();
        let mut star_histogram = [0; MAX_STARS as usize + 1];
        for summary in summaries {
            star_histogram[summary.score.stars.min(MAX_STARS) as usize] += 1;
        }
        let total_moves: u64 = summaries.iter().map(|s| s.score.moves as u64).sum();
        let total_seconds: u64 = summaries.iter().map(|s| s.score.elapsed_seconds).sum();
        let mean = |total: u64| {
            if games == 0 {
                0.0
            } else {
                total as f64 / games as f64
            }
        };

        Self {
            games,
            tile_count: summaries.first().map_or(0, |s| s.tile_count),
            mean_moves: mean(total_moves),
            min_moves: summaries.iter().map(|s| s.score.moves).min().unwrap_or(0),
            max_moves: summaries.iter().map(|s| s.score.moves).max().unwrap_or(0),
            mean_seconds: mean(total_seconds),
            star_histogram,
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "games:        {}", self.games)?;
        writeln!(f, "tiles:        {}", self.tile_count)?;
        writeln!(
            f,
            "moves:        mean {:.2}, min {}, max {}",
            self.mean_moves, self.min_moves, self.max_moves
        )?;
        writeln!(f, "seconds:      mean {:.2}", self.mean_seconds)?;
        write!(f, "stars:       ")?;
        for (stars, count) in self.star_histogram.iter().enumerate().rev() {
            write!(f, " {}★={}", stars, count)?;
        }
        Ok(())
    }
}

/// Plays `games` games with seeds `seed, seed + 1, ...`.
pub fn run_simulations(
    config: &GameConfig,
    games: usize,
    seed: u64,
    think_time: Duration,
) -> Result<SimulationReport> {
    let mut summaries = Vec::with_capacity(games);
    for game in 0..games {
        let game_seed = seed.wrapping_add(game as u64);
        let summary = simulate_game(config.clone(), game_seed, think_time)?;
        log::debug!(
            "Simulated game {} (seed {}): {} moves, {} stars",
            game,
            game_seed,
            summary.score.moves,
            summary.score.stars
        );
        summaries.push(summary);
    }
    Ok(SimulationReport::from_summaries(&summaries))
}
