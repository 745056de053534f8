//! Framed image widget with a missing-file placeholder.

use std::path::Path;

use eframe::egui;

use crate::ui::style;

/// Show an image from an asset path, framed and capped to `max_height`.
///
/// A path that does not exist on disk renders as a framed placeholder with
/// the alt text. Content can therefore reference figures before the files
/// land without breaking the page.
pub fn show_image(ui: &mut egui::Ui, src: &str, alt: &str, max_height: f32) {
    let path = Path::new(src);
    if path.exists() {
        let uri = match path.canonicalize() {
            Ok(abs) => format!("file://{}", abs.display()),
            Err(_) => format!("file://{src}"),
        };
        ui.add(
            egui::Image::from_uri(uri)
                .max_height(max_height)
                .corner_radius(4)
                .maintain_aspect_ratio(true),
        );
    } else {
        placeholder(ui, alt, max_height.min(140.0));
    }
}

fn placeholder(ui: &mut egui::Ui, alt: &str, height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width().min(420.0), height),
        egui::Sense::hover(),
    );
    ui.painter().rect_stroke(
        rect,
        egui::CornerRadius::same(4),
        egui::Stroke::new(1.0, style::CARD_STROKE),
        egui::StrokeKind::Inside,
    );
    ui.put(
        rect,
        egui::Label::new(
            egui::RichText::new(alt)
                .italics()
                .color(style::TEXT_DIM),
        ),
    );
}

/// Image with an optional italic caption underneath, both centered.
pub fn show_captioned_image(
    ui: &mut egui::Ui,
    src: &str,
    alt: &str,
    caption: Option<&str>,
    max_height: f32,
    caption_font: f32,
) {
    ui.vertical_centered(|ui| {
        show_image(ui, src, alt, max_height);
        if let Some(caption) = caption {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(caption)
                    .italics()
                    .size(caption_font)
                    .color(style::TEXT_DIM),
            );
        }
    });
}
