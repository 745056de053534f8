//! Core application state types and constants.

use crate::loader::ChartData;
use crate::visibility::VisibilitySet;

// ============================================================================
// Constants
// ============================================================================

/// Fixed height of an embedded data chart in pixels.
pub const CHART_HEIGHT: f32 = 320.0;

/// Fixed height of a histogram chart in pixels.
pub const HISTOGRAM_HEIGHT: f32 = 380.0;

/// Fallback color cycle for series whose spec carries no color.
pub const CHART_COLORS: &[[u8; 3]] = &[
    [99, 102, 241],  // Indigo (primary)
    [139, 92, 246],  // Violet (accent)
    [239, 68, 68],   // Red
    [34, 197, 94],   // Green
    [59, 130, 246],  // Blue
    [6, 182, 212],   // Cyan
    [249, 115, 22],  // Orange
    [20, 184, 166],  // Teal
];

/// Colorblind-friendly palette (based on Wong's optimized palette)
/// Designed to be distinguishable for deuteranopia, protanopia, and tritanopia
pub const COLORBLIND_COLORS: &[[u8; 3]] = &[
    [0, 114, 178],   // Blue
    [230, 159, 0],   // Orange
    [0, 158, 115],   // Bluish green
    [204, 121, 167], // Reddish purple
    [86, 180, 233],  // Sky blue
    [213, 94, 0],    // Vermillion
    [240, 228, 66],  // Yellow
    [136, 204, 238], // Light blue
];

// ============================================================================
// Core Types
// ============================================================================

/// The page currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Hero landing page with the reveal illustration.
    #[default]
    Home,
    /// Project card listing.
    Projects,
    /// One project's write-up, by id. An unknown id renders the
    /// "project not found" page.
    ProjectDetail(String),
    /// Resume page.
    Experience,
}

/// Runtime owned by one on-screen chart: its data load and which series the
/// user has hidden. Created when a page first renders the chart, dropped on
/// navigation, so visibility always resets with the page.
pub struct ChartRuntime {
    pub data: ChartData,
    pub hidden: VisibilitySet,
}

impl ChartRuntime {
    pub fn new(data: ChartData) -> Self {
        Self {
            data,
            hidden: VisibilitySet::default(),
        }
    }
}

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Default)]
pub enum ToastType {
    /// Informational message (indigo)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Warning message (amber)
    Warning,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [99, 102, 241],
            ToastType::Success => [34, 197, 94],
            ToastType::Warning => [253, 193, 73],
            ToastType::Error => [185, 28, 28],
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            ToastType::Warning => [30, 30, 30], // Dark text for amber background
            _ => [255, 255, 255],               // White text for other backgrounds
        }
    }
}

/// Font scale preference for UI elements
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, serde::Serialize, serde::Deserialize)]
pub enum FontScale {
    /// Smaller fonts (0.85x)
    Small,
    /// Default size (1.0x)
    #[default]
    Medium,
    /// Larger fonts (1.2x)
    Large,
}

impl FontScale {
    /// Get the multiplier for this font scale
    pub fn multiplier(&self) -> f32 {
        match self {
            FontScale::Small => 0.85,
            FontScale::Medium => 1.0,
            FontScale::Large => 1.2,
        }
    }

    /// Display name for the settings menu
    pub fn name(&self) -> &'static str {
        match self {
            FontScale::Small => "Small",
            FontScale::Medium => "Medium",
            FontScale::Large => "Large",
        }
    }

    /// All selectable scales
    pub fn all() -> &'static [FontScale] {
        &[FontScale::Small, FontScale::Medium, FontScale::Large]
    }
}
