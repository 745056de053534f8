//! Hue distribution charts.
//!
//! A histogram chart compares pixel counts per hue bucket between the ground
//! truth images and a fixed set of generated samples. The series set is not
//! configurable content; every histogram file carries the same columns.

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, VLine};

use crate::app::FolioApp;
use crate::content::{HistogramData, LineSpec};
use crate::fmt;
use crate::state::{ChartRuntime, HISTOGRAM_HEIGHT};
use crate::table::{AxisKey, DataTable};
use crate::ui::data_chart::{legend_rows, render_pending};
use crate::ui::style;
use crate::visibility::VisibilitySet;

const CURSOR_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 255);

/// The fixed series set of every histogram data file: five generated samples
/// plus the ground truth, stroked heavier.
pub fn histogram_series() -> Vec<LineSpec> {
    vec![
        LineSpec::new("s1", "Sample 1", [239, 68, 68]),
        LineSpec::new("s2", "Sample 2", [34, 197, 94]),
        LineSpec::new("s3", "Sample 3", [59, 130, 246]),
        LineSpec::new("s4", "Sample 4", [6, 182, 212]),
        LineSpec::new("s5", "Sample 5", [249, 115, 22]),
        LineSpec::new("real", "Ground Truth", [255, 255, 255]).width(3.0),
    ]
}

impl FolioApp {
    /// Render a hue distribution chart: title, plot over [0, 1], hover
    /// readout, legend, caption.
    pub fn render_histogram(&mut self, ui: &mut egui::Ui, id: &str, data: &HistogramData) {
        self.ensure_chart(id, &data.data_path);

        let font_16 = self.scaled_font(16.0);
        let font_13 = self.scaled_font(13.0);
        let series = histogram_series();
        let colors: Vec<egui::Color32> = series
            .iter()
            .enumerate()
            .map(|(i, line)| self.series_color(line.color, i))
            .collect();

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&data.title)
                    .strong()
                    .size(font_16)
                    .color(style::TEXT),
            );
        });
        ui.add_space(4.0);

        let Some(runtime) = self.charts.get_mut(id) else {
            return;
        };

        if runtime.data.is_loading() {
            render_pending(ui, "Loading histogram data...", true, font_13);
            return;
        }
        if runtime.data.is_failed() {
            render_pending(ui, "No data available", false, font_13);
            return;
        }

        let ChartRuntime { data: chart_data, hidden } = runtime;
        let Some(table) = chart_data.table() else {
            return;
        };

        // Y extent over the visible series only, padded so peaks don't touch
        // the frame.
        let y_max = visible_max(table, &series, hidden).unwrap_or(1.0) * 1.05;

        let plot = Plot::new(format!("plot_{id}"))
            .height(HISTOGRAM_HEIGHT)
            .x_axis_label(AxisKey::Hue.label())
            .y_axis_label("Pixels")
            .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [0.2, 0.1, 0.05]))
            .allow_zoom([false, false])
            .allow_drag([false, false])
            .allow_scroll([false, false]);

        let response = plot.show(ui, |plot_ui| {
            // Hue is always the unit interval
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, 0.0], [1.0, y_max]));

            for (i, line) in series.iter().enumerate() {
                if hidden.is_hidden(&line.key) {
                    continue;
                }
                for segment in table.series_segments(AxisKey::Hue, &line.key) {
                    let points: PlotPoints = segment.iter().copied().collect();
                    plot_ui.line(
                        Line::new(line.name.clone(), points)
                            .color(colors[i])
                            .width(line.width),
                    );
                }
            }

            let hover = plot_ui
                .pointer_coordinate()
                .and_then(|pos| table.nearest_record(AxisKey::Hue, pos.x));
            if let Some(record) = hover {
                if let Some(x) = table.record(record).and_then(|r| r.axis(AxisKey::Hue)) {
                    plot_ui.vline(VLine::new("cursor", x).color(CURSOR_COLOR).width(1.0));
                }
            }
            hover
        });

        if let Some(record) = response.inner {
            hue_readout(ui, table, record, &series, &colors, hidden, font_13);
        }

        ui.add_space(6.0);
        if let Some(key) = legend_rows(ui, &series, &colors, hidden, font_13) {
            hidden.toggle(&key);
        }

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

/// Largest finite value across the visible series, for the fixed Y bounds.
fn visible_max(table: &DataTable, series: &[LineSpec], hidden: &VisibilitySet) -> Option<f64> {
    let mut max = f64::NEG_INFINITY;
    for line in series {
        if hidden.is_hidden(&line.key) {
            continue;
        }
        for segment in table.series_segments(AxisKey::Hue, &line.key) {
            for point in segment {
                max = max.max(point[1]);
            }
        }
    }
    if max.is_finite() {
        Some(max)
    } else {
        None
    }
}

/// Hover readout: hue bucket plus pixel counts of the visible series.
fn hue_readout(
    ui: &mut egui::Ui,
    table: &DataTable,
    record: usize,
    series: &[LineSpec],
    colors: &[egui::Color32],
    hidden: &VisibilitySet,
    font: f32,
) {
    let Some(row) = table.record(record) else {
        return;
    };

    style::inset_frame().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            if let Some(hue) = row.axis(AxisKey::Hue) {
                ui.label(
                    egui::RichText::new(format!("Hue: {}", fmt::hue_label(hue)))
                        .strong()
                        .size(font)
                        .color(style::TEXT),
                );
            }
            for (i, line) in series.iter().enumerate() {
                if hidden.is_hidden(&line.key) {
                    continue;
                }
                if let Some(value) = row.get(&line.key) {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {}",
                            line.name,
                            fmt::pixel_count(value)
                        ))
                        .size(font)
                        .color(colors[i]),
                    );
                }
            }
        });
    });
}
