use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use eframe::egui;

use common::engine::{Direction, GameResult, PlayerColor, PlayerSlot, Point};
use common::scores::PlayerScore;

/// Name and color picked in the start dialog for one seat.
#[derive(Debug, Clone)]
pub struct PlayerSetup {
    pub name: String,
    pub color: PlayerColor,
}

#[derive(Debug, Clone)]
pub enum MenuCommand {
    StartGame {
        level_path: PathBuf,
        player_one: PlayerSetup,
        player_two: PlayerSetup,
    },
    RefreshHighScores,
}

#[derive(Debug, Clone)]
pub enum GameCommand {
    SetDirection {
        slot: PlayerSlot,
        direction: Direction,
    },
    QuitToMenu,
}

#[derive(Debug, Clone)]
pub enum ClientCommand {
    Menu(MenuCommand),
    Game(GameCommand),
}

#[derive(Debug, Clone)]
pub struct PlayerView {
    pub name: String,
    pub color: PlayerColor,
    pub position: Point,
    pub trail: Vec<Point>,
}

/// Everything the UI needs to draw one frame of the board, decoupled from
/// the live engine owned by the game task.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub level_name: String,
    pub width: i32,
    pub height: i32,
    pub walls: Vec<Point>,
    pub players: [PlayerView; 2],
    pub tick: u64,
    pub tick_interval_ms: u32,
    pub result: GameResult,
}

impl BoardSnapshot {
    /// Elapsed play time derived from the tick counter, not a clock.
    pub fn elapsed_seconds(&self) -> u64 {
        self.tick * u64::from(self.tick_interval_ms) / 1000
    }
}

#[derive(Debug, Clone)]
pub enum AppState {
    Setup,
    InGame {
        snapshot: BoardSnapshot,
    },
    GameOver {
        snapshot: BoardSnapshot,
        /// `None` for a draw.
        winner: Option<String>,
    },
}

pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    error: Arc<Mutex<Option<String>>>,
    high_scores: Arc<Mutex<Vec<PlayerScore>>>,
    egui_ctx: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Setup)),
            error: Arc::new(Mutex::new(None)),
            high_scores: Arc::new(Mutex::new(Vec::new())),
            egui_ctx: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
        self.request_repaint();
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap() = None;
    }

    pub fn set_high_scores(&self, scores: Vec<PlayerScore>) {
        *self.high_scores.lock().unwrap() = scores;
        self.request_repaint();
    }

    pub fn get_high_scores(&self) -> Vec<PlayerScore> {
        self.high_scores.lock().unwrap().clone()
    }

    pub fn has_context(&self) -> bool {
        self.egui_ctx.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.egui_ctx.lock().unwrap() = Some(ctx);
    }

    /// Wakes the UI thread after a background update; egui only repaints on
    /// demand.
    fn request_repaint(&self) {
        if let Some(ctx) = self.egui_ctx.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            error: Arc::clone(&self.error),
            high_scores: Arc::clone(&self.high_scores),
            egui_ctx: Arc::clone(&self.egui_ctx),
        }
    }
}
