//! Resume page.

use eframe::egui;

use crate::app::FolioApp;
use crate::content::ExperienceItem;
use crate::fmt;
use crate::ui::style;

impl FolioApp {
    /// Render the experience/resume page.
    pub fn render_experience(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("experience")
                            .strong()
                            .size(self.scaled_font(32.0))
                            .color(style::ACCENT),
                    );
                });
                ui.add_space(24.0);

                let items = self.catalog.experience.clone();
                for item in &items {
                    self.render_experience_item(ui, item);
                    ui.add_space(16.0);
                }
                ui.add_space(24.0);
            });
    }

    fn render_experience_item(&mut self, ui: &mut egui::Ui, item: &ExperienceItem) {
        let font_17 = self.scaled_font(17.0);
        let font_14 = self.scaled_font(14.0);
        let font_12 = self.scaled_font(12.0);

        style::card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new(&item.position)
                    .strong()
                    .size(font_17)
                    .color(style::ACCENT),
            );
            ui.label(
                egui::RichText::new(format!(
                    "{}  |  {}",
                    item.company,
                    fmt::date_range(&item.start_date, item.end_date.as_deref())
                ))
                .size(font_12)
                .color(style::TEXT_DIM),
            );

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(&item.description)
                    .size(font_14)
                    .color(style::TEXT),
            );

            if !item.technologies.is_empty() {
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for tech in &item.technologies {
                        style::chip(ui, tech, style::ACCENT_ALT, font_12);
                    }
                });
            }

            if !item.achievements.is_empty() {
                ui.add_space(8.0);
                for achievement in &item.achievements {
                    ui.label(
                        egui::RichText::new(format!("\u{2022} {achievement}"))
                            .size(font_12)
                            .color(style::TEXT_DIM),
                    );
                }
            }
        });
    }
}
