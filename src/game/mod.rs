pub mod board;
pub mod catalogue;
pub mod engine;
pub mod random;
pub mod selection;
pub mod session;
pub mod shuffle;
pub mod tile;

pub use board::{deal_board, Board};
pub use catalogue::{Catalogue, DEFAULT_IMAGE_LABELS};
pub use engine::{GameEngine, GameEvent};
pub use random::{StdTileRng, TileRng};
pub use selection::SelectionBuffer;
pub use session::{GameSession, SessionState};
pub use shuffle::ShuffleStrategy;
pub use tile::{ImageLabel, Tile, TileStatus};
