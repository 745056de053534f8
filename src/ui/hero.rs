//! Landing page: the point-reveal illustration, staged intro text and the
//! contact dialog.

use eframe::egui;
use std::time::Instant;

use crate::app::FolioApp;
use crate::state::Route;
use crate::ui::style;

/// Design-space size of the illustration (points are authored in these
/// coordinates and scaled to the allocated rect).
const CANVAS_SIZE: egui::Vec2 = egui::vec2(400.0, 350.0);

/// Face outline, forehead around the jaw and back up.
const FACE_POINTS: &[[f32; 2]] = &[
    [200.0, 80.0],
    [190.0, 85.0],
    [180.0, 90.0],
    [170.0, 95.0],
    [165.0, 100.0],
    [160.0, 110.0],
    [158.0, 120.0],
    [155.0, 130.0],
    [154.0, 140.0],
    [153.0, 150.0],
    [152.0, 160.0],
    [151.0, 170.0],
    [150.0, 180.0],
    [152.0, 190.0],
    [155.0, 200.0],
    [158.0, 210.0],
    [162.0, 220.0],
    [167.0, 230.0],
    [173.0, 240.0],
    [180.0, 248.0],
    [188.0, 255.0],
    [196.0, 260.0],
    [205.0, 262.0],
    [214.0, 260.0],
    [222.0, 255.0],
    [230.0, 248.0],
    [237.0, 240.0],
    [243.0, 230.0],
    [248.0, 220.0],
    [252.0, 210.0],
    [255.0, 200.0],
    [258.0, 190.0],
    [259.0, 180.0],
    [260.0, 170.0],
    [259.0, 160.0],
    [258.0, 150.0],
    [257.0, 140.0],
    [256.0, 130.0],
    [254.0, 120.0],
    [252.0, 110.0],
    [248.0, 100.0],
    [242.0, 95.0],
    [235.0, 90.0],
    [225.0, 85.0],
    [215.0, 80.0],
];

/// Glasses: two lenses and the bridge.
const GLASSES_POINTS: &[[f32; 2]] = &[
    [170.0, 130.0],
    [175.0, 125.0],
    [185.0, 125.0],
    [190.0, 130.0],
    [190.0, 140.0],
    [185.0, 145.0],
    [175.0, 145.0],
    [170.0, 140.0],
    [195.0, 135.0],
    [205.0, 135.0],
    [215.0, 135.0],
    [220.0, 130.0],
    [225.0, 125.0],
    [235.0, 125.0],
    [240.0, 130.0],
    [240.0, 140.0],
    [235.0, 145.0],
    [225.0, 145.0],
    [220.0, 140.0],
];

/// Beard line along the jaw.
const BEARD_POINTS: &[[f32; 2]] = &[
    [167.0, 220.0],
    [170.0, 230.0],
    [175.0, 240.0],
    [182.0, 248.0],
    [190.0, 254.0],
    [200.0, 258.0],
    [210.0, 258.0],
    [220.0, 254.0],
    [228.0, 248.0],
    [235.0, 240.0],
    [240.0, 230.0],
    [243.0, 220.0],
];

/// Every point of the illustration, in reveal order.
pub fn all_points() -> impl Iterator<Item = [f32; 2]> {
    FACE_POINTS
        .iter()
        .chain(GLASSES_POINTS.iter())
        .chain(BEARD_POINTS.iter())
        .copied()
}

/// Total number of points; the reveal sequence's length.
pub fn point_count() -> usize {
    FACE_POINTS.len() + GLASSES_POINTS.len() + BEARD_POINTS.len()
}

const DOT_COLOR: egui::Color32 = egui::Color32::from_rgb(99, 102, 241);
const ACTIVE_DOT_COLOR: egui::Color32 = egui::Color32::from_rgb(251, 191, 36);

impl FolioApp {
    /// Render the landing page.
    pub fn render_home(&mut self, ui: &mut egui::Ui, now: Instant) {
        let title_visible = self.reveal.title_visible(now);
        let description_visible = self.reveal.description_visible(now);

        ui.add_space(40.0);
        ui.columns(2, |cols| {
            cols[0].vertical_centered(|ui| {
                self.draw_illustration(ui);
            });

            let ui = &mut cols[1];
            ui.add_space(40.0);

            if title_visible {
                ui.label(
                    egui::RichText::new("hi! i'm adam")
                        .strong()
                        .size(self.scaled_font(42.0))
                        .color(style::ACCENT),
                );
            }

            if description_visible {
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("software developer & masters in comp.sci")
                        .size(self.scaled_font(20.0))
                        .color(style::ACCENT_ALT),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(
                        "i'm a software developer based in denmark, with a great \
                         personal interest in computer graphics, computer vision \
                         and bioinformatics.",
                    )
                    .size(self.scaled_font(15.0))
                    .color(style::TEXT),
                );

                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(egui::RichText::new("view my work").size(self.scaled_font(15.0)))
                        .clicked()
                    {
                        self.navigate(Route::Projects);
                    }
                    if ui
                        .button(egui::RichText::new("my experience").size(self.scaled_font(15.0)))
                        .clicked()
                    {
                        self.navigate(Route::Experience);
                    }
                    if ui
                        .button(egui::RichText::new("get in touch").size(self.scaled_font(15.0)))
                        .clicked()
                    {
                        self.contact_open = true;
                    }
                });
            }
        });
    }

    /// Draw the dot-by-dot illustration at its current reveal phase.
    fn draw_illustration(&self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(CANVAS_SIZE, egui::Sense::hover());
        let painter = ui.painter_at(rect);

        let to_screen = |p: [f32; 2]| -> egui::Pos2 {
            rect.min + egui::vec2(p[0] / CANVAS_SIZE.x, p[1] / CANVAS_SIZE.y) * rect.size()
        };

        // Soft glow behind the face
        painter.circle_filled(
            to_screen([200.0, 175.0]),
            rect.width() * 0.3,
            style::ACCENT.gamma_multiply(0.06),
        );

        let points: Vec<[f32; 2]> = all_points().collect();
        let segment_color = DOT_COLOR.gamma_multiply(0.3);

        for (index, point) in points.iter().enumerate() {
            if !self.reveal.is_visible(index) {
                continue;
            }

            if index > 0 {
                painter.line_segment(
                    [to_screen(points[index - 1]), to_screen(*point)],
                    egui::Stroke::new(1.0, segment_color),
                );
            }

            if self.reveal.is_active(index) {
                painter.circle_filled(to_screen(*point), 4.0, ACTIVE_DOT_COLOR);
            } else {
                painter.circle_filled(to_screen(*point), 2.0, DOT_COLOR);
            }
        }
    }

    /// Contact dialog, available from the hero buttons.
    pub fn render_contact_dialog(&mut self, ctx: &egui::Context) {
        if !self.contact_open {
            return;
        }

        let mut open = self.contact_open;
        egui::Window::new("get in touch")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(
                        "always happy to talk about graphics, vision or a good dataset.",
                    )
                    .size(self.scaled_font(14.0))
                    .color(style::TEXT),
                );
                ui.add_space(10.0);

                if ui.button("adam@example.dev").clicked() {
                    ui.ctx().copy_text("adam@example.dev".to_string());
                    self.show_toast("Email address copied");
                }
                if ui.button("github.com/advel").clicked() {
                    self.open_link("https://github.com/advel");
                }
                if ui.button("linkedin.com/in/advel").clicked() {
                    self.open_link("https://www.linkedin.com/in/advel");
                }
            });
        self.contact_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_matches_groups() {
        assert_eq!(
            point_count(),
            FACE_POINTS.len() + GLASSES_POINTS.len() + BEARD_POINTS.len()
        );
        assert_eq!(all_points().count(), point_count());
    }

    #[test]
    fn test_points_fit_the_canvas() {
        for [x, y] in all_points() {
            assert!(x >= 0.0 && x <= CANVAS_SIZE.x);
            assert!(y >= 0.0 && y <= CANVAS_SIZE.y);
        }
    }
}
