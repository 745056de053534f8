//! Shared colors and framed-card helpers used across pages.

use eframe::egui;

/// Primary accent (indigo).
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(99, 102, 241);

/// Secondary accent (violet).
pub const ACCENT_ALT: egui::Color32 = egui::Color32::from_rgb(139, 92, 246);

/// Body text on the dark background.
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(230, 230, 235);

/// De-emphasized text (captions, metadata).
pub const TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(160, 160, 170);

/// Card background.
pub const CARD_BG: egui::Color32 = egui::Color32::from_rgb(30, 30, 46);

/// Card border.
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(58, 58, 90);

/// The framed card every content block sits in.
pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(CARD_BG)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .corner_radius(8)
        .inner_margin(egui::Margin::same(16))
}

/// A tighter frame for nested blocks (equations, code, readouts).
pub fn inset_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(egui::Color32::from_rgb(22, 22, 36))
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// A small rounded chip with colored background, as used for tags and
/// status labels.
pub fn chip(ui: &mut egui::Ui, text: &str, color: egui::Color32, font_size: f32) {
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.5)))
        .corner_radius(10)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(color).size(font_size));
        });
}

/// Dim a color the way a hidden legend entry is dimmed.
pub fn dimmed(color: egui::Color32) -> egui::Color32 {
    color.gamma_multiply(0.4)
}
