use eframe::egui;

use common::engine::GameResult;

use super::app::TronApp;
use crate::state::{AppState, BoardSnapshot, ClientCommand, MenuCommand};

impl TronApp {
    pub(super) fn render_game_over(
        &mut self,
        ctx: &egui::Context,
        snapshot: &BoardSnapshot,
        winner: Option<&str>,
    ) {
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    match (snapshot.result, winner) {
                        (GameResult::Won(_), Some(name)) => {
                            ui.heading(format!("{} wins!", name));
                        }
                        _ => {
                            ui.heading("Draw!");
                        }
                    }
                    ui.label(format!("Time: {}s", snapshot.elapsed_seconds()));
                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        if ui.button("Play Again").clicked() {
                            self.shared_state.set_state(AppState::Setup);
                        }
                        if ui.button("High Scores").clicked() {
                            self.send_command(ClientCommand::Menu(
                                MenuCommand::RefreshHighScores,
                            ));
                            self.show_high_scores = true;
                        }
                        if ui.button("Exit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }
}
