use eframe::egui;

use super::app::TronApp;

impl TronApp {
    pub(super) fn render_high_scores(&mut self, ctx: &egui::Context) {
        let scores = self.shared_state.get_high_scores();
        let mut open = self.show_high_scores;

        egui::Window::new("High Scores")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                if scores.is_empty() {
                    ui.label("No wins recorded yet.");
                } else {
                    egui::Grid::new("high_scores_grid")
                        .num_columns(2)
                        .striped(true)
                        .spacing([24.0, 4.0])
                        .show(ui, |ui| {
                            ui.strong("Player");
                            ui.strong("Wins");
                            ui.end_row();
                            for score in &scores {
                                ui.label(&score.name);
                                ui.label(score.wins.to_string());
                                ui.end_row();
                            }
                        });
                }
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    self.show_high_scores = false;
                }
            });

        // The title bar close button and the Close button both end here.
        self.show_high_scores = self.show_high_scores && open;
    }
}
