//! # Memory Match
//!
//! Game engine for a memory-matching (concentration) game: tiles hide paired
//! image labels, a player turns two over per move, matched pairs stay face
//! up and mismatches flip back after a delay.
//!
//! ## Features
//!
//! - **Game Engine**: board dealing, shuffling, the two-tile selection buffer and the session state machine
//! - **Scoring**: move count, elapsed time and the five-star rating
//! - **Timing**: injectable clock and scheduler, with a virtual timeline for deterministic play
//! - **Player**: automated perfect-recall player and batch simulation
//!
//! ## Usage
//!
//! ```rust
//! use memory_match::{GameConfig, GameEngine, GameEvent};
//!
//! let (mut engine, time) = GameEngine::with_virtual_time(GameConfig::default(), 42).unwrap();
//! let events = engine.select_tile(0);
//! assert!(matches!(events.first(), Some(GameEvent::Started)));
//! let _ = engine.on_timers(time.advance(std::time::Duration::from_secs(1)));
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Engine configuration
pub mod config;

/// Core game logic and rules
pub mod game;

/// Logger initialisation
pub mod logging;

/// Automated player and simulations
pub mod player;

/// Star rating and time formatting
pub mod scoring;

/// Clocks and schedulers
pub mod timing;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use config::GameConfig;
pub use game::*;
pub use player::{run_simulations, simulate_game, MemoryPlayer, SimulationReport};
pub use scoring::{format_elapsed, star_rating, star_string, GameSummary, Score};
pub use timing::{
    Clock, FiredTimer, Scheduler, SystemClock, TimerId, TimerKind, TokioScheduler, VirtualTime,
};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Memory Match library
#[derive(Debug, thiserror::Error)]
pub enum MemoryMatchError {
    #[error("Tile count must be a positive even number, got {0}")]
    InvalidTileCount(usize),

    #[error("Catalogue holds {available} distinct labels but {needed} pairs were requested")]
    CatalogueTooSmall { needed: usize, available: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MemoryMatchError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
