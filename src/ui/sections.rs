//! Project section rendering and visualization dispatch.
//!
//! A section is a titled card of mixed content: body text, equations,
//! figures, code listings, metric cards, custom visualizations and
//! subsections, rendered in that order. The visualization dispatch is strict
//! on kind; entries with no renderer in this build are skipped silently so
//! partially-authored content still renders.

use eframe::egui;

use crate::app::FolioApp;
use crate::content::{
    renderable_visualizations, CodeBlock, MathEquation, Metric, Section, TrainingChartData,
    Visualization,
};
use crate::ui::figure;
use crate::ui::style;

/// Max height for figures embedded in sections.
const FIGURE_MAX_HEIGHT: f32 = 360.0;

impl FolioApp {
    /// Render one titled section card.
    pub fn render_section(&mut self, ui: &mut egui::Ui, section: &Section) {
        let font_20 = self.scaled_font(20.0);

        let heading = ui.label(
            egui::RichText::new(&section.title)
                .strong()
                .size(font_20)
                .color(style::TEXT),
        );
        if self.scroll_to_section.as_deref() == Some(section.id.as_str()) {
            heading.scroll_to_me(Some(egui::Align::TOP));
            self.scroll_to_section = None;
        }

        // Accent underline below the heading
        let underline = egui::Rect::from_min_size(
            heading.rect.left_bottom() + egui::vec2(0.0, 2.0),
            egui::vec2(heading.rect.width().max(60.0), 2.0),
        );
        ui.painter()
            .rect_filled(underline, 1.0, style::ACCENT.gamma_multiply(0.5));

        ui.add_space(8.0);

        style::card_frame().show(ui, |ui| {
            let content = &section.content;

            if let Some(text) = &content.text {
                self.render_body_text(ui, text);
            }

            for equation in &content.equations {
                self.render_equation(ui, equation);
            }

            for fig in &content.figures {
                ui.add_space(8.0);
                figure::show_captioned_image(
                    ui,
                    &fig.src,
                    &fig.alt,
                    fig.caption.as_deref(),
                    FIGURE_MAX_HEIGHT,
                    self.scaled_font(13.0),
                );
            }

            for code in &content.code {
                self.render_code_block(ui, code);
            }

            if !content.metrics.is_empty() {
                ui.add_space(8.0);
                self.render_metrics(ui, &content.metrics);
            }

            for (index, viz) in renderable_visualizations(&content.visualizations)
                .into_iter()
                .enumerate()
            {
                ui.add_space(16.0);
                self.render_visualization(ui, &section.id, index, viz);
            }

            for sub in &content.subsections {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(&sub.title)
                        .strong()
                        .size(self.scaled_font(16.0))
                        .color(style::TEXT),
                );
                ui.add_space(4.0);
                self.render_body_text(ui, &sub.body);
                for equation in &sub.math {
                    self.render_equation(ui, equation);
                }
                for fig in &sub.figures {
                    ui.add_space(8.0);
                    figure::show_captioned_image(
                        ui,
                        &fig.src,
                        &fig.alt,
                        fig.caption.as_deref(),
                        FIGURE_MAX_HEIGHT,
                        self.scaled_font(13.0),
                    );
                }
            }
        });

        ui.add_space(20.0);
    }

    /// Dispatch one visualization to its component. `section_id` and `index`
    /// form the chart id, so two charts of the same kind in one section stay
    /// independent.
    fn render_visualization(
        &mut self,
        ui: &mut egui::Ui,
        section_id: &str,
        index: usize,
        viz: &Visualization,
    ) {
        match viz {
            Visualization::ComparisonTable(data) => self.render_comparison_table(ui, data),
            Visualization::TrainingChart(data) => {
                self.render_training_chart(ui, section_id, index, data)
            }
            Visualization::Histogram(data) => {
                let id = format!("{section_id}/viz{index}");
                self.render_histogram(ui, &id, data);
            }
            Visualization::BenchmarkTable(data) => self.render_benchmark_table(ui, data),
            Visualization::PerformanceChart(data) => {
                if let Some(title) = &data.title {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(title)
                                .strong()
                                .size(self.scaled_font(16.0))
                                .color(style::TEXT),
                        );
                    });
                    ui.add_space(8.0);
                }
                figure::show_captioned_image(
                    ui,
                    &data.image,
                    data.title.as_deref().unwrap_or("Performance chart"),
                    data.caption.as_deref(),
                    FIGURE_MAX_HEIGHT,
                    self.scaled_font(13.0),
                );
            }
            Visualization::Unsupported { kind } => {
                // Filtered out before dispatch; kept for exhaustiveness.
                tracing::debug!("skipping visualization kind {kind}");
            }
        }
    }

    /// Paired training-curve charts, side by side when the page is wide
    /// enough.
    fn render_training_chart(
        &mut self,
        ui: &mut egui::Ui,
        section_id: &str,
        index: usize,
        data: &TrainingChartData,
    ) {
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

        let columns = data.charts.len().min(2).max(1);
        for pair in data.charts.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, chart) in pair.iter().enumerate() {
                    let id = format!("{section_id}/viz{index}/{}", chart.data_path);
                    self.render_data_chart(&mut cols[col], &id, chart);
                }
            });
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

    fn render_body_text(&self, ui: &mut egui::Ui, text: &str) {
        ui.label(
            egui::RichText::new(text)
                .size(self.scaled_font(14.0))
                .color(style::TEXT),
        );
        ui.add_space(4.0);
    }

    /// LaTeX equations are shown as framed monospace source with their
    /// description and label; there is no TeX layout engine in this build.
    fn render_equation(&self, ui: &mut egui::Ui, equation: &MathEquation) {
        let font_13 = self.scaled_font(13.0);

        ui.add_space(4.0);
        if let Some(description) = &equation.description {
            ui.label(
                egui::RichText::new(description)
                    .size(font_13)
                    .color(style::TEXT_DIM),
            );
        }

        let render = |ui: &mut egui::Ui| {
            style::inset_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&equation.latex)
                        .monospace()
                        .size(self.scaled_font(if equation.display { 14.0 } else { 13.0 }))
                        .color(style::TEXT),
                );
            });
        };

        if equation.display {
            ui.vertical_centered(render);
        } else {
            render(ui);
        }

        if let Some(label) = &equation.label {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("({label})"))
                        .size(self.scaled_font(12.0))
                        .color(style::TEXT_DIM),
                );
            });
        }
        ui.add_space(4.0);
    }

    fn render_code_block(&self, ui: &mut egui::Ui, code: &CodeBlock) {
        let font_13 = self.scaled_font(13.0);

        ui.add_space(6.0);
        if let Some(description) = &code.description {
            ui.label(
                egui::RichText::new(description)
                    .size(font_13)
                    .color(style::TEXT_DIM),
            );
        }
        style::inset_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&code.language)
                        .small()
                        .color(style::ACCENT),
                );
            });
            ui.separator();
            ui.label(
                egui::RichText::new(&code.code)
                    .monospace()
                    .size(font_13)
                    .color(style::TEXT),
            );
        });
        ui.add_space(4.0);
    }

    /// Headline metric cards in a row.
    fn render_metrics(&self, ui: &mut egui::Ui, metrics: &[Metric]) {
        let font_18 = self.scaled_font(18.0);
        let font_13 = self.scaled_font(13.0);
        let font_12 = self.scaled_font(12.0);

        let columns = metrics.len().min(3).max(1);
        for group in metrics.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, metric) in group.iter().enumerate() {
                    style::inset_frame().show(&mut cols[col], |ui| {
                        ui.label(
                            egui::RichText::new(&metric.value)
                                .strong()
                                .size(font_18)
                                .color(style::ACCENT),
                        );
                        ui.label(
                            egui::RichText::new(&metric.name)
                                .size(font_13)
                                .color(style::TEXT),
                        );
                        if let Some(description) = &metric.description {
                            ui.label(
                                egui::RichText::new(description)
                                    .size(font_12)
                                    .color(style::TEXT_DIM),
                            );
                        }
                        if let Some(comparison) = &metric.comparison {
                            ui.add_space(4.0);
                            style::chip(
                                ui,
                                &format!(
                                    "+{} vs {}",
                                    comparison.improvement, comparison.baseline
                                ),
                                egui::Color32::from_rgb(34, 197, 94),
                                font_12,
                            );
                        }
                    });
                }
            });
        }
    }
}
