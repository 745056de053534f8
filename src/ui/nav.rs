//! Top navigation bar and settings menu.

use eframe::egui;

use crate::app::FolioApp;
use crate::state::{FontScale, Route};
use crate::ui::style;

impl FolioApp {
    /// Render the top navigation bar.
    pub fn render_nav(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("folio")
                        .strong()
                        .size(self.scaled_font(18.0))
                        .color(style::ACCENT),
                );

                ui.separator();

                self.nav_button(ui, "home", Route::Home);
                self.nav_button(ui, "projects", Route::Projects);
                self.nav_button(ui, "experience", Route::Experience);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.settings_menu(ui);
                });
            });
            ui.add_space(4.0);
        });
    }

    fn nav_button(&mut self, ui: &mut egui::Ui, label: &str, route: Route) {
        // Detail pages highlight the projects tab
        let selected = self.route == route
            || (route == Route::Projects && matches!(self.route, Route::ProjectDetail(_)));

        let text = egui::RichText::new(label).size(self.scaled_font(14.0));
        if ui.selectable_label(selected, text).clicked() {
            self.navigate(route);
        }
    }

    /// Settings dropdown: font scale, palette, intro skip. Every change is
    /// persisted immediately.
    fn settings_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("\u{2699}", |ui| {
            let mut changed = false;

            ui.label(egui::RichText::new("Font size").strong());
            for scale in FontScale::all() {
                if ui
                    .radio(self.settings.font_scale == *scale, scale.name())
                    .clicked()
                {
                    self.settings.font_scale = *scale;
                    changed = true;
                }
            }

            ui.separator();
            if ui
                .checkbox(
                    &mut self.settings.color_blind_mode,
                    "Colorblind-friendly charts",
                )
                .changed()
            {
                changed = true;
            }
            if ui
                .checkbox(&mut self.settings.skip_intro, "Skip intro animation")
                .changed()
            {
                changed = true;
            }

            if changed {
                self.save_settings();
            }
        });
    }
}
