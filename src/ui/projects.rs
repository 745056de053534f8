//! Project card listing page.

use eframe::egui;

use crate::app::FolioApp;
use crate::content::Project;
use crate::fmt;
use crate::state::Route;
use crate::ui::style;

impl FolioApp {
    /// Render the projects listing.
    pub fn render_projects(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("my projects")
                            .strong()
                            .size(self.scaled_font(32.0))
                            .color(style::ACCENT),
                    );
                    ui.label(
                        egui::RichText::new(
                            "a collection of projects i've built over the years. each one \
                             taught me something new. some of them are still ongoing.",
                        )
                        .size(self.scaled_font(15.0))
                        .color(style::TEXT_DIM),
                    );
                });
                ui.add_space(24.0);

                let projects = self.catalog.projects.clone();
                for pair in projects.chunks(2) {
                    ui.columns(pair.len(), |cols| {
                        for (col, project) in pair.iter().enumerate() {
                            self.render_project_card(&mut cols[col], project);
                        }
                    });
                    ui.add_space(16.0);
                }
            });
    }

    fn render_project_card(&mut self, ui: &mut egui::Ui, project: &Project) {
        let font_18 = self.scaled_font(18.0);
        let font_14 = self.scaled_font(14.0);
        let font_12 = self.scaled_font(12.0);

        style::card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new(&project.title)
                    .strong()
                    .size(font_18)
                    .color(style::TEXT),
            );

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let status = project.status;
                let rgb = status.color();
                style::chip(
                    ui,
                    status.label(),
                    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]),
                    font_12,
                );
                style::chip(ui, project.category.label(), style::ACCENT_ALT, font_12);
                ui.label(
                    egui::RichText::new(fmt::date_range(
                        &project.start_date,
                        project.end_date.as_deref(),
                    ))
                    .size(font_12)
                    .color(style::TEXT_DIM),
                );
            });

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(&project.short_description)
                    .size(font_14)
                    .color(style::TEXT),
            );

            if !project.key_features.is_empty() {
                ui.add_space(8.0);
                for feature in project.key_features.iter().take(3) {
                    ui.label(
                        egui::RichText::new(format!("\u{2022} {feature}"))
                            .size(font_12)
                            .color(style::TEXT_DIM),
                    );
                }
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("view details").size(font_14))
                    .clicked()
                {
                    self.navigate(Route::ProjectDetail(project.id.clone()));
                }
                if let Some(url) = &project.github_url {
                    if ui
                        .button(egui::RichText::new("github").size(font_14))
                        .clicked()
                    {
                        let url = url.clone();
                        self.open_link(&url);
                    }
                }
            });
        });
    }
}
