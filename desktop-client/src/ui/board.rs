use eframe::egui;

use common::engine::{Direction, PlayerSlot, Point};

use super::app::TronApp;
use super::colors::to_color32;
use crate::state::{BoardSnapshot, ClientCommand, GameCommand};

impl TronApp {
    /// WASD steers player one, the arrow keys player two, Escape abandons
    /// the duel. Commands are collected first so the input closure stays
    /// free of borrow conflicts with `self`.
    pub(super) fn handle_game_input(&self, ctx: &egui::Context) {
        let mut commands: Vec<ClientCommand> = Vec::new();
        ctx.input(|i| {
            let bindings = [
                (egui::Key::W, PlayerSlot::One, Direction::Up),
                (egui::Key::S, PlayerSlot::One, Direction::Down),
                (egui::Key::A, PlayerSlot::One, Direction::Left),
                (egui::Key::D, PlayerSlot::One, Direction::Right),
                (egui::Key::ArrowUp, PlayerSlot::Two, Direction::Up),
                (egui::Key::ArrowDown, PlayerSlot::Two, Direction::Down),
                (egui::Key::ArrowLeft, PlayerSlot::Two, Direction::Left),
                (egui::Key::ArrowRight, PlayerSlot::Two, Direction::Right),
            ];
            for (key, slot, direction) in bindings {
                if i.key_pressed(key) {
                    commands.push(ClientCommand::Game(GameCommand::SetDirection {
                        slot,
                        direction,
                    }));
                }
            }
            if i.key_pressed(egui::Key::Escape) {
                commands.push(ClientCommand::Game(GameCommand::QuitToMenu));
            }
        });
        for command in commands {
            self.send_command(command);
        }
    }

    pub(super) fn render_board(&self, ui: &mut egui::Ui, snapshot: &BoardSnapshot) {
        ui.columns(3, |columns| {
            columns[0].horizontal(|ui| {
                for player in &snapshot.players {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, to_color32(player.color));
                    ui.label(&player.name);
                }
            });
            columns[1].vertical_centered(|ui| {
                ui.label(&snapshot.level_name);
            });
            columns[2].with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Time: {}s", snapshot.elapsed_seconds()));
            });
        });
        ui.separator();

        let available = ui.available_size();
        let cell = (available.x / snapshot.width as f32)
            .min(available.y / snapshot.height as f32)
            .floor()
            .max(4.0);
        let board_size = egui::vec2(
            cell * snapshot.width as f32,
            cell * snapshot.height as f32,
        );
        let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());
        let origin = response.rect.min;

        let cell_rect = |point: Point| {
            egui::Rect::from_min_size(
                origin + egui::vec2(point.x as f32 * cell, point.y as f32 * cell),
                egui::vec2(cell, cell),
            )
        };

        painter.rect_filled(response.rect, 0.0, egui::Color32::from_gray(20));

        for wall in &snapshot.walls {
            painter.rect_filled(cell_rect(*wall), 0.0, egui::Color32::GRAY);
        }

        for player in &snapshot.players {
            let color = to_color32(player.color);
            for segment in &player.trail {
                painter.rect_filled(cell_rect(*segment).shrink(cell * 0.1), 0.0, color);
            }
        }

        // Heads go on top of everything so a head-on crash cell stays visible.
        for player in &snapshot.players {
            painter.circle_filled(
                cell_rect(player.position).center(),
                cell * 0.45,
                to_color32(player.color),
            );
        }
    }
}
