mod app;
mod board;
mod colors;
mod game_over;
mod high_scores;
mod setup;

pub use app::TronApp;
