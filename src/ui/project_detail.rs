//! Project write-up page: header, table of contents and sections.

use eframe::egui;

use crate::app::FolioApp;
use crate::fmt;
use crate::state::Route;
use crate::ui::style;

impl FolioApp {
    /// Render one project's write-up, or the not-found page for an unknown
    /// id.
    pub fn render_project_detail(&mut self, ui: &mut egui::Ui, project_id: &str) {
        let Some(project) = self.catalog.project(project_id).cloned() else {
            self.render_project_not_found(ui);
            return;
        };

        let font_13 = self.scaled_font(13.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(12.0);
                if ui
                    .button(egui::RichText::new("\u{2190} back to projects").size(font_13))
                    .clicked()
                {
                    self.navigate(Route::Projects);
                    return;
                }

                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&project.title)
                            .strong()
                            .size(self.scaled_font(30.0))
                            .color(style::ACCENT),
                    );

                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for tag in &project.tags {
                            style::chip(ui, tag, style::ACCENT_ALT, font_13);
                        }
                    });

                    ui.add_space(6.0);
                    ui.horizontal_wrapped(|ui| {
                        let status = project.status;
                        let rgb = status.color();
                        style::chip(
                            ui,
                            status.label(),
                            egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]),
                            font_13,
                        );
                        ui.label(
                            egui::RichText::new(fmt::date_range(
                                &project.start_date,
                                project.end_date.as_deref(),
                            ))
                            .size(font_13)
                            .color(style::TEXT_DIM),
                        );
                        if let Some(url) = &project.github_url {
                            if ui
                                .button(egui::RichText::new("view on github").size(font_13))
                                .clicked()
                            {
                                let url = url.clone();
                                self.open_link(&url);
                            }
                        }
                    });
                });

                if let Some(abstract_text) = &project.abstract_text {
                    ui.add_space(16.0);
                    style::card_frame().show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("Abstract")
                                .strong()
                                .size(self.scaled_font(16.0))
                                .color(style::TEXT),
                        );
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(abstract_text)
                                .size(self.scaled_font(14.0))
                                .color(style::TEXT),
                        );
                    });
                }

                let sections = project.sections_ordered();

                if project.show_toc && !sections.is_empty() {
                    ui.add_space(16.0);
                    style::card_frame().show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("Contents")
                                .strong()
                                .size(self.scaled_font(16.0))
                                .color(style::TEXT),
                        );
                        ui.add_space(4.0);
                        for (index, section) in sections.iter().enumerate() {
                            let entry = format!("{}. {}", index + 1, section.title);
                            if ui
                                .link(egui::RichText::new(entry).size(font_13).color(style::ACCENT))
                                .clicked()
                            {
                                self.scroll_to_section = Some(section.id.clone());
                            }
                        }
                    });
                }

                ui.add_space(24.0);
                for section in project.sections_ordered() {
                    self.render_section(ui, section);
                }

                ui.add_space(40.0);
            });
    }

    fn render_project_not_found(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        if ui
            .button(
                egui::RichText::new("\u{2190} back to projects").size(self.scaled_font(13.0)),
            )
            .clicked()
        {
            self.navigate(Route::Projects);
            return;
        }

        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Project Not Found")
                    .strong()
                    .size(self.scaled_font(24.0))
                    .color(style::TEXT),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("The project you're looking for doesn't exist.")
                    .size(self.scaled_font(14.0))
                    .color(style::TEXT_DIM),
            );
        });
    }
}
