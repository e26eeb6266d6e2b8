use std::path::{Path, PathBuf};

use eframe::egui;
use tokio::sync::mpsc;

use common::engine::PlayerColor;
use common::level_loader::list_levels;
use common::log;

use crate::config::{ClientConfigManager, Config, PlayerDefaults};
use crate::state::{AppState, ClientCommand, MenuCommand, PlayerSetup, SharedState};

pub type CommandSender = mpsc::UnboundedSender<ClientCommand>;

pub struct TronApp {
    pub(super) shared_state: SharedState,
    pub(super) command_sender: CommandSender,
    pub(super) config: Config,
    pub(super) config_manager: ClientConfigManager,
    pub(super) player_one_name: String,
    pub(super) player_two_name: String,
    pub(super) player_one_color: [u8; 3],
    pub(super) player_two_color: [u8; 3],
    pub(super) levels: Vec<PathBuf>,
    pub(super) selected_level: usize,
    pub(super) show_high_scores: bool,
}

impl TronApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config: Config,
        config_manager: ClientConfigManager,
    ) -> Self {
        let levels = list_levels(Path::new(&config.level_dir));
        let player_one_name = config.player_one.name.clone();
        let player_two_name = config.player_two.name.clone();
        let player_one_color = color_array(config.player_one.color);
        let player_two_color = color_array(config.player_two.color);
        Self {
            shared_state,
            command_sender,
            config,
            config_manager,
            player_one_name,
            player_two_name,
            player_one_color,
            player_two_color,
            levels,
            selected_level: 0,
            show_high_scores: false,
        }
    }

    pub(super) fn send_command(&self, command: ClientCommand) {
        if let Err(e) = self.command_sender.send(command) {
            log!("Failed to send command to game task: {}", e);
        }
    }

    pub(super) fn start_game(&mut self) {
        let Some(level_path) = self.levels.get(self.selected_level).cloned() else {
            self.shared_state.set_error(format!(
                "No level selected. Put level files into '{}' or browse for one.",
                self.config.level_dir
            ));
            return;
        };

        let player_one = PlayerSetup {
            name: effective_name(&self.player_one_name, &self.config.player_one.name),
            color: color_from_array(self.player_one_color),
        };
        let player_two = PlayerSetup {
            name: effective_name(&self.player_two_name, &self.config.player_two.name),
            color: color_from_array(self.player_two_color),
        };

        self.persist_player_defaults(&player_one, &player_two);

        self.send_command(ClientCommand::Menu(MenuCommand::StartGame {
            level_path,
            player_one,
            player_two,
        }));
    }

    /// Remembers the last used names and colors for the next launch. A write
    /// failure only costs the convenience, so it is logged and ignored.
    fn persist_player_defaults(&mut self, player_one: &PlayerSetup, player_two: &PlayerSetup) {
        self.config.player_one = PlayerDefaults {
            name: player_one.name.clone(),
            color: player_one.color,
        };
        self.config.player_two = PlayerDefaults {
            name: player_two.name.clone(),
            color: player_two.color,
        };
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log!("Failed to persist player defaults: {}", e);
        }
    }
}

impl eframe::App for TronApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.shared_state.clear_error();
                    }
                });
        }

        if self.show_high_scores {
            self.render_high_scores(ctx);
        }

        let current_state = self.shared_state.get_state();
        egui::CentralPanel::default().show(ctx, |ui| match current_state {
            AppState::Setup => {
                self.render_setup(ui);
            }
            AppState::InGame { snapshot } => {
                self.handle_game_input(ctx);
                self.render_board(ui, &snapshot);
            }
            AppState::GameOver { snapshot, winner } => {
                self.render_board(ui, &snapshot);
                self.render_game_over(ctx, &snapshot, winner.as_deref());
            }
        });
    }
}

fn color_array(color: PlayerColor) -> [u8; 3] {
    [color.r, color.g, color.b]
}

fn color_from_array(rgb: [u8; 3]) -> PlayerColor {
    PlayerColor::new(rgb[0], rgb[1], rgb[2])
}

fn effective_name(entered: &str, fallback: &str) -> String {
    let entered = entered.trim();
    if entered.is_empty() {
        fallback.to_string()
    } else {
        entered.to_string()
    }
}
