use eframe::egui;

use common::level_loader::{LEVEL_FILE_EXTENSION, level_name_from_path};

use super::app::TronApp;
use crate::state::{ClientCommand, MenuCommand};

impl TronApp {
    pub(super) fn render_setup(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading("Tron Light-Cycle Battle");
            ui.add_space(10.0);
            ui.label("Player 1 steers with WASD, Player 2 with the arrow keys.");
            ui.add_space(20.0);
        });

        egui::Grid::new("player_setup_grid")
            .num_columns(3)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Player 1:");
                ui.text_edit_singleline(&mut self.player_one_name);
                ui.color_edit_button_srgb(&mut self.player_one_color);
                ui.end_row();

                ui.label("Player 2:");
                ui.text_edit_singleline(&mut self.player_two_name);
                ui.color_edit_button_srgb(&mut self.player_two_color);
                ui.end_row();
            });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Level:");
            let selected_text = self
                .levels
                .get(self.selected_level)
                .map(|path| level_name_from_path(path))
                .unwrap_or_else(|| "No levels found".to_string());
            egui::ComboBox::from_id_salt("level_select")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (index, path) in self.levels.iter().enumerate() {
                        ui.selectable_value(
                            &mut self.selected_level,
                            index,
                            level_name_from_path(path),
                        );
                    }
                });
            if ui.button("Browse...").clicked() {
                self.open_level_file_dialog();
            }
        });

        ui.add_space(20.0);

        ui.horizontal(|ui| {
            if ui.button("Start Game").clicked() {
                self.start_game();
            }
            if ui.button("High Scores").clicked() {
                self.send_command(ClientCommand::Menu(MenuCommand::RefreshHighScores));
                self.show_high_scores = true;
            }
        });
    }

    fn open_level_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Level maps", &[LEVEL_FILE_EXTENSION])
            .pick_file()
        {
            // A level picked by hand joins the list and becomes the selection.
            if let Some(index) = self.levels.iter().position(|known| known == &path) {
                self.selected_level = index;
            } else {
                self.levels.push(path);
                self.selected_level = self.levels.len() - 1;
            }
        }
    }
}
