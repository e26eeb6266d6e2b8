use eframe::egui;

use common::engine::PlayerColor;

pub fn to_color32(color: PlayerColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
