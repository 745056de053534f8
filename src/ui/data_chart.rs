//! Multi-series line chart rendering and legend visibility toggles.
//!
//! Every chart of this kind owns a [`crate::state::ChartRuntime`]: the parsed
//! data file plus the set of series hidden by legend clicks. A hidden series
//! is excluded from drawing and from the hover readout, not merely painted
//! invisibly.

use eframe::egui;
use egui_plot::{Line, LineStyle, Plot, PlotPoints, VLine};

use crate::app::FolioApp;
use crate::content::{LineSpec, SubChart};
use crate::fmt;
use crate::state::{ChartRuntime, CHART_HEIGHT};
use crate::table::{AxisKey, DataTable};
use crate::ui::style;
use crate::visibility::VisibilitySet;

/// Cursor line color (cyan, high contrast on the dark theme).
const CURSOR_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 255);

impl FolioApp {
    /// Render one training-curve chart: title, plot, hover readout, legend.
    ///
    /// `id` must be unique per chart on the page; it keys the runtime and
    /// the plot's egui id.
    pub fn render_data_chart(&mut self, ui: &mut egui::Ui, id: &str, spec: &SubChart) {
        self.ensure_chart(id, &spec.data_path);

        let font_15 = self.scaled_font(15.0);
        let font_13 = self.scaled_font(13.0);
        let colors: Vec<egui::Color32> = spec
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| self.series_color(line.color, i))
            .collect();

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&spec.title)
                    .strong()
                    .size(font_15)
                    .color(style::TEXT),
            );
        });
        ui.add_space(4.0);

        let Some(runtime) = self.charts.get_mut(id) else {
            return;
        };

        if runtime.data.is_loading() {
            render_pending(ui, "Loading chart data...", true, font_13);
            return;
        }
        if runtime.data.is_failed() {
            render_pending(ui, "No data available", false, font_13);
            return;
        }

        let ChartRuntime { data, hidden } = runtime;
        let Some(table) = data.table() else {
            return;
        };

        let plot = Plot::new(format!("plot_{id}"))
            .height(CHART_HEIGHT)
            .x_axis_label(AxisKey::Epoch.label())
            .allow_zoom([true, false])
            .allow_drag([true, false])
            .allow_scroll([true, false]);

        let response = plot.show(ui, |plot_ui| {
            for (i, line) in spec.lines.iter().enumerate() {
                if hidden.is_hidden(&line.key) {
                    continue;
                }
                for segment in table.series_segments(AxisKey::Epoch, &line.key) {
                    let points: PlotPoints = segment.iter().copied().collect();
                    let mut drawn = Line::new(line.name.clone(), points)
                        .color(colors[i])
                        .width(line.width);
                    if line.dashed {
                        drawn = drawn.style(LineStyle::Dashed { length: 8.0 });
                    }
                    plot_ui.line(drawn);
                }
            }

            // Snap the hover cursor to the nearest record
            let hover = plot_ui
                .pointer_coordinate()
                .and_then(|pos| table.nearest_record(AxisKey::Epoch, pos.x));
            if let Some(record) = hover {
                if let Some(x) = table.record(record).and_then(|r| r.axis(AxisKey::Epoch)) {
                    plot_ui.vline(VLine::new("cursor", x).color(CURSOR_COLOR).width(1.0));
                }
            }
            hover
        });

        if let Some(record) = response.inner {
            epoch_readout(ui, table, record, &spec.lines, &colors, hidden, font_13);
        }

        ui.add_space(6.0);
        if let Some(key) = legend_rows(ui, &spec.lines, &colors, hidden, font_13) {
            hidden.toggle(&key);
        }
    }
}

/// Loading / terminal no-data placeholder in the chart's footprint.
pub(crate) fn render_pending(ui: &mut egui::Ui, message: &str, spinner: bool, font: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), CHART_HEIGHT),
        egui::Sense::hover(),
    );
    let mut child = ui.new_child(egui::UiBuilder::new().max_rect(rect));
    child.centered_and_justified(|ui| {
        ui.horizontal(|ui| {
            if spinner {
                ui.spinner();
            }
            ui.label(
                egui::RichText::new(message)
                    .size(font)
                    .color(style::TEXT_DIM),
            );
        });
    });
}

/// Value readout for the hovered record: axis value plus every visible
/// series, colored to match its line.
fn epoch_readout(
    ui: &mut egui::Ui,
    table: &DataTable,
    record: usize,
    lines: &[LineSpec],
    colors: &[egui::Color32],
    hidden: &VisibilitySet,
    font: f32,
) {
    let Some(row) = table.record(record) else {
        return;
    };

    style::inset_frame().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            if let Some(epoch) = row.axis(AxisKey::Epoch) {
                ui.label(
                    egui::RichText::new(format!("Epoch {}", fmt::epoch_label(epoch)))
                        .strong()
                        .size(font)
                        .color(style::TEXT),
                );
            }
            for (i, line) in lines.iter().enumerate() {
                if hidden.is_hidden(&line.key) {
                    continue;
                }
                if let Some(value) = row.get(&line.key) {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {}",
                            line.name,
                            fmt::series_value(value)
                        ))
                        .size(font)
                        .color(colors[i]),
                    );
                }
            }
        });
    });
}

/// Draw the clickable legend entries. Returns the key of a clicked entry;
/// the caller owns the toggle.
pub(crate) fn legend_rows(
    ui: &mut egui::Ui,
    lines: &[LineSpec],
    colors: &[egui::Color32],
    hidden: &VisibilitySet,
    font: f32,
) -> Option<String> {
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        for (i, line) in lines.iter().enumerate() {
            let is_hidden = hidden.is_hidden(&line.key);
            let swatch_color = if is_hidden {
                style::dimmed(colors[i])
            } else {
                colors[i]
            };
            let text_color = if is_hidden {
                style::dimmed(style::TEXT)
            } else {
                style::TEXT
            };

            let entry = ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(20.0, 3.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 1.0, swatch_color);
                ui.label(
                    egui::RichText::new(&line.name)
                        .size(font)
                        .color(text_color),
                );
            });

            let response = entry.response.interact(egui::Sense::click());
            if response.clicked() {
                clicked = Some(line.key.clone());
            }
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }

            ui.add_space(10.0);
        }
    });

    clicked
}
