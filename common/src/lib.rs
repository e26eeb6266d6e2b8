pub mod config;
pub mod engine;
pub mod level_loader;
pub mod logger;
pub mod scores;

pub use engine::{
    Direction, GameResult, GameState, Level, Player, PlayerColor, PlayerIdentity, PlayerSlot,
    Point,
};
