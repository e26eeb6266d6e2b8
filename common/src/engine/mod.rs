mod game_state;
mod level;
mod player;
mod types;

pub use game_state::GameState;
pub use level::Level;
pub use player::{Player, PlayerIdentity};
pub use types::{Direction, GameResult, PlayerColor, PlayerSlot, Point};
