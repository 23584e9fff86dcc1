pub mod memory_player;
pub mod simulate;

pub use memory_player::MemoryPlayer;
pub use simulate::{run_simulations, simulate_game, SimulationReport};
