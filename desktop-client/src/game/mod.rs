mod local_game;
mod runner;

pub use local_game::local_game_task;
