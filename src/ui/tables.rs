//! Comparison and benchmark table renderers.

use eframe::egui;

use crate::app::FolioApp;
use crate::content::{BenchmarkTableData, ComparisonTableData};
use crate::ui::figure;
use crate::ui::style;

/// Height of one image cell in the comparison rows.
const COMPARISON_IMAGE_HEIGHT: f32 = 110.0;

/// Percent-of-optimal thresholds for the benchmark score coloring.
const GOOD_RATIO: f64 = 0.4;
const FAIR_RATIO: f64 = 0.3;

/// Fraction of the optimal score a solver reached. Scores are compared by
/// magnitude; the benchmark counts contacts as negative numbers.
pub fn performance_ratio(score: f64, optimal: f64) -> f64 {
    (score / optimal).abs()
}

/// Cell color for a solver score: green at >= 40% of optimal, amber at
/// >= 30%, red below.
pub fn performance_color(score: f64, optimal: f64) -> [u8; 3] {
    let ratio = performance_ratio(score, optimal);
    if ratio >= GOOD_RATIO {
        [34, 197, 94]
    } else if ratio >= FAIR_RATIO {
        [249, 115, 22]
    } else {
        [239, 68, 68]
    }
}

/// Percent-of-optimal label, one decimal.
pub fn performance_percent(score: f64, optimal: f64) -> String {
    format!("{:.1}%", performance_ratio(score, optimal) * 100.0)
}

impl FolioApp {
    /// Render the real-vs-generated comparison rows with per-item fool rates.
    pub fn render_comparison_table(&mut self, ui: &mut egui::Ui, data: &ComparisonTableData) {
        let font_16 = self.scaled_font(16.0);
        let font_13 = self.scaled_font(13.0);

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&data.title)
                    .strong()
                    .size(font_16)
                    .color(style::TEXT),
            );
        });
        ui.add_space(8.0);

        style::card_frame().show(ui, |ui| {
            // Row of originals, row of generated images, row of fool rates,
            // all aligned by column.
            labeled_image_row(ui, "Real Samples", data, |item| &item.original_image, font_13);
            ui.add_space(8.0);
            labeled_image_row(
                ui,
                "Colorized Samples",
                data,
                |item| &item.generated_image,
                font_13,
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                row_header(ui, "Fooled", font_13);
                for item in &data.items {
                    ui.vertical(|ui| {
                        ui.set_width(COMPARISON_IMAGE_HEIGHT);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(&item.percentage)
                                    .strong()
                                    .size(font_13)
                                    .color(style::ACCENT),
                            );
                        });
                    });
                }
            });
        });

        if let Some(caption) = &data.caption {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(caption)
                        .italics()
                        .size(font_13)
                        .color(style::TEXT_DIM),
                );
            });
        }
    }

    /// Render the solver-vs-optimal benchmark table with colored percent
    /// cells.
    pub fn render_benchmark_table(&mut self, ui: &mut egui::Ui, data: &BenchmarkTableData) {
        let font_16 = self.scaled_font(16.0);
        let font_13 = self.scaled_font(13.0);

        if let Some(title) = &data.title {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(title)
                        .strong()
                        .size(font_16)
                        .color(style::TEXT),
                );
            });
            ui.add_space(8.0);
        }

        style::card_frame().show(ui, |ui| {
            egui::Grid::new("benchmark_table")
                .num_columns(6)
                .spacing([24.0, 8.0])
                .striped(true)
                .show(ui, |ui| {
                    for header in ["Sequence", "Length", "Optimal", "ACO", "Hart", "% of Optimal"]
                    {
                        ui.label(
                            egui::RichText::new(header)
                                .strong()
                                .size(font_13)
                                .color(style::TEXT),
                        );
                    }
                    ui.end_row();

                    for row in &data.rows {
                        ui.label(egui::RichText::new(&row.id).size(font_13).color(style::TEXT));
                        ui.label(
                            egui::RichText::new(row.length.to_string())
                                .size(font_13)
                                .color(style::TEXT),
                        );
                        ui.label(
                            egui::RichText::new(format!("{:.0}", row.optimal))
                                .size(font_13)
                                .color(style::TEXT),
                        );
                        ui.label(
                            egui::RichText::new(format!("{:.0}", row.aco))
                                .size(font_13)
                                .color(style::TEXT),
                        );
                        ui.label(
                            egui::RichText::new(format!("{:.0}", row.hart))
                                .size(font_13)
                                .color(style::TEXT_DIM),
                        );

                        let rgb = performance_color(row.aco, row.optimal);
                        ui.label(
                            egui::RichText::new(performance_percent(row.aco, row.optimal))
                                .strong()
                                .size(font_13)
                                .color(egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])),
                        );
                        ui.end_row();
                    }
                });
        });

        if let Some(caption) = &data.caption {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(caption)
                        .italics()
                        .size(font_13)
                        .color(style::TEXT_DIM),
                );
            });
        }
    }
}

fn row_header(ui: &mut egui::Ui, text: &str, font: f32) {
    ui.vertical(|ui| {
        ui.set_width(110.0);
        ui.label(
            egui::RichText::new(text)
                .strong()
                .size(font)
                .color(style::TEXT),
        );
    });
}

fn labeled_image_row(
    ui: &mut egui::Ui,
    label: &str,
    data: &ComparisonTableData,
    image_of: impl Fn(&crate::content::ComparisonItem) -> &String,
    font: f32,
) {
    ui.horizontal(|ui| {
        row_header(ui, label, font);
        for item in &data.items {
            ui.vertical(|ui| {
                ui.set_width(COMPARISON_IMAGE_HEIGHT);
                figure::show_image(
                    ui,
                    image_of(item),
                    &format!("Sample {}", item.id),
                    COMPARISON_IMAGE_HEIGHT,
                );
            });
        }
    });
}
