//! Main application state and `eframe::App` implementation.

use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::anim::{RevealSequence, POINT_INTERVAL};
use crate::content::Catalog;
use crate::loader::ChartData;
use crate::settings::UserSettings;
use crate::state::{ChartRuntime, Route, ToastType, CHART_COLORS, COLORBLIND_COLORS};
use crate::ui::hero;

/// Main application state
pub struct FolioApp {
    /// Bundled portfolio content
    pub(crate) catalog: Catalog,
    /// Page currently shown
    pub(crate) route: Route,
    /// Persisted user preferences
    pub(crate) settings: UserSettings,
    /// Hero reveal animation, advanced from the frame loop
    pub(crate) reveal: RevealSequence,
    /// Runtime state for charts on the current page, keyed by chart id.
    /// Cleared on navigation so every chart remounts fresh.
    pub(crate) charts: HashMap<String, ChartRuntime>,
    /// Toast messages for user feedback
    pub(crate) toast_message: Option<(String, Instant, ToastType)>,
    /// Whether the contact dialog is open
    pub(crate) contact_open: bool,
    /// Section id the table of contents asked to scroll to
    pub(crate) scroll_to_section: Option<String>,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Image loaders for project figures
        egui_extras::install_image_loaders(&cc.egui_ctx);
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let settings = UserSettings::load();

        let mut reveal = RevealSequence::new(hero::point_count());
        let now = Instant::now();
        if settings.skip_intro {
            reveal.skip_to_end(now);
        } else {
            reveal.start(now);
        }

        Self {
            catalog: Catalog::bundled(),
            route: Route::Home,
            settings,
            reveal,
            charts: HashMap::new(),
            toast_message: None,
            contact_open: false,
            scroll_to_section: None,
        }
    }

    /// Switch pages. Chart runtimes belong to the page that created them, so
    /// navigation drops them all: data loads restart and every series comes
    /// back visible. Returning home restarts the reveal.
    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }

        self.charts.clear();
        self.contact_open = false;
        self.scroll_to_section = None;

        if route == Route::Home {
            let now = Instant::now();
            self.reveal.reset();
            if self.settings.skip_intro {
                self.reveal.skip_to_end(now);
            } else {
                self.reveal.start(now);
            }
        }

        self.route = route;
    }

    /// Get (or create) the runtime for a chart. First access starts the
    /// background load of its data file.
    pub(crate) fn ensure_chart(&mut self, id: &str, data_path: &str) {
        self.charts
            .entry(id.to_string())
            .or_insert_with(|| ChartRuntime::new(ChartData::spawn(PathBuf::from(data_path))));
    }

    /// The active chart color palette.
    pub(crate) fn palette(&self) -> &'static [[u8; 3]] {
        if self.settings.color_blind_mode {
            COLORBLIND_COLORS
        } else {
            CHART_COLORS
        }
    }

    /// Color for a series: its configured color normally, or a palette slot
    /// by position in colorblind mode (configured colors are not guaranteed
    /// distinguishable).
    pub(crate) fn series_color(&self, configured: [u8; 3], index: usize) -> egui::Color32 {
        let rgb = if self.settings.color_blind_mode {
            let palette = self.palette();
            palette[index % palette.len()]
        } else {
            configured
        };
        egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Scale a font size by the user's font scale preference.
    pub(crate) fn scaled_font(&self, size: f32) -> f32 {
        size * self.settings.font_scale.multiplier()
    }

    /// Show an informational toast message
    pub(crate) fn show_toast(&mut self, message: &str) {
        self.show_toast_type(message, ToastType::Info);
    }

    /// Show a toast message with a specific type
    pub(crate) fn show_toast_type(&mut self, message: &str, toast_type: ToastType) {
        self.toast_message = Some((message.to_string(), Instant::now(), toast_type));
    }

    /// Persist settings, surfacing failures as a toast instead of an error.
    pub(crate) fn save_settings(&mut self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("failed to save settings: {e}");
            self.show_toast_type("Could not save settings", ToastType::Warning);
        }
    }

    /// Open a URL in the default browser.
    pub(crate) fn open_link(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!("failed to open {url}: {e}");
            self.show_toast_type("Could not open link", ToastType::Error);
        }
    }

    /// Drain loader channels for every chart on the page.
    fn poll_charts(&mut self) {
        for runtime in self.charts.values_mut() {
            runtime.data.poll();
        }
    }

    fn any_chart_loading(&self) -> bool {
        self.charts.values().any(|r| r.data.is_loading())
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.route == Route::Home {
            self.reveal.advance(now);
        }
        self.poll_charts();

        self.render_nav(ctx);

        let route = self.route.clone();
        egui::CentralPanel::default().show(ctx, |ui| match route {
            Route::Home => self.render_home(ui, now),
            Route::Projects => self.render_projects(ui),
            Route::ProjectDetail(id) => self.render_project_detail(ui, &id),
            Route::Experience => self.render_experience(ui),
        });

        self.render_contact_dialog(ctx);
        self.render_toast(ctx);

        // Keep frames coming while something is animating or loading;
        // otherwise egui only repaints on input.
        if self.reveal.is_running() {
            ctx.request_repaint_after(POINT_INTERVAL);
        } else if self.route == Route::Home
            && self.reveal.is_complete()
            && !self.reveal.description_visible(now)
        {
            // Intro text is still staging in after the reveal finished.
            ctx.request_repaint_after(Duration::from_millis(50));
        } else if self.any_chart_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
