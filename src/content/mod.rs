//! Portfolio content model.
//!
//! Everything shown by the app is static data bundled at build time: the
//! project write-ups, the experience entries, and the visualization
//! descriptors that tell a detail page which chart or table components to
//! mount. The bundled data itself lives in [`catalog`].

pub mod catalog;

use strum::{AsRefStr, EnumString};

// ============================================================================
// Projects
// ============================================================================

/// Publication state of a project.
#[derive(AsRefStr, Clone, Copy, Debug, Default, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Completed,
    Ongoing,
    Planned,
}

impl ProjectStatus {
    /// Chip label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Planned => "Planned",
        }
    }

    /// Chip color.
    pub fn color(&self) -> [u8; 3] {
        match self {
            ProjectStatus::Completed => [34, 197, 94],
            ProjectStatus::Ongoing => [249, 115, 22],
            ProjectStatus::Planned => [99, 102, 241],
        }
    }
}

/// Broad subject area of a project.
#[derive(AsRefStr, Clone, Copy, Debug, Default, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    #[default]
    MachineLearning,
    WebDevelopment,
    ComputerVision,
    Bioinformatics,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::MachineLearning => "Machine Learning",
            Category::WebDevelopment => "Web Development",
            Category::ComputerVision => "Computer Vision",
            Category::Bioinformatics => "Bioinformatics",
        }
    }
}

/// A project write-up.
#[derive(Clone, Debug, Default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    /// Abstract paragraph shown under the detail-page header.
    pub abstract_text: Option<String>,
    pub github_url: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: ProjectStatus,
    pub category: Category,
    pub tags: Vec<String>,
    pub key_features: Vec<String>,
    pub sections: Vec<Section>,
    /// Show the table of contents on the detail page.
    pub show_toc: bool,
}

impl Project {
    /// Sections in display order.
    pub fn sections_ordered(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }
}

/// One titled block of a project write-up.
#[derive(Clone, Debug, Default)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub order: u32,
    pub content: SectionContent,
}

/// The mixed content of a section, rendered top to bottom in field order.
#[derive(Clone, Debug, Default)]
pub struct SectionContent {
    pub text: Option<String>,
    pub equations: Vec<MathEquation>,
    pub figures: Vec<Figure>,
    pub code: Vec<CodeBlock>,
    pub metrics: Vec<Metric>,
    pub visualizations: Vec<Visualization>,
    pub subsections: Vec<SubSection>,
}

/// A LaTeX equation with optional label and lead-in description.
#[derive(Clone, Debug, Default)]
pub struct MathEquation {
    pub id: String,
    pub latex: String,
    pub label: Option<String>,
    pub description: Option<String>,
    /// Block display (centered) vs inline-sized.
    pub display: bool,
}

/// A captioned raster image. The file may be absent from disk; the renderer
/// degrades to a framed placeholder showing the alt text.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
}

/// A syntax-labeled code listing.
#[derive(Clone, Debug, Default)]
pub struct CodeBlock {
    pub id: String,
    pub language: String,
    pub code: String,
    pub description: Option<String>,
}

/// A headline result card.
#[derive(Clone, Debug, Default)]
pub struct Metric {
    pub name: String,
    pub value: String,
    pub description: Option<String>,
    pub comparison: Option<MetricComparison>,
}

/// Improvement chip on a metric card.
#[derive(Clone, Debug, Default)]
pub struct MetricComparison {
    pub baseline: String,
    pub improvement: String,
}

/// A nested sub-heading with its own body, equations and figures.
#[derive(Clone, Debug, Default)]
pub struct SubSection {
    pub id: String,
    pub title: String,
    pub body: String,
    pub math: Vec<MathEquation>,
    pub figures: Vec<Figure>,
}

// ============================================================================
// Visualizations
// ============================================================================

/// A series drawn on a data chart: which column to read, how to label it,
/// and how to stroke it.
#[derive(Clone, Debug)]
pub struct LineSpec {
    pub key: String,
    pub name: String,
    pub color: [u8; 3],
    pub width: f32,
    pub dashed: bool,
}

impl LineSpec {
    pub fn new(key: &str, name: &str, color: [u8; 3]) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            color,
            width: 2.0,
            dashed: false,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// One chart of a training-chart pair: its own data file and series set.
#[derive(Clone, Debug)]
pub struct SubChart {
    pub title: String,
    pub data_path: String,
    pub lines: Vec<LineSpec>,
}

/// Paired training-curve charts rendered side by side.
#[derive(Clone, Debug)]
pub struct TrainingChartData {
    pub title: String,
    pub charts: Vec<SubChart>,
    pub caption: Option<String>,
}

/// A hue-distribution chart over a fixed sample series set.
#[derive(Clone, Debug)]
pub struct HistogramData {
    pub title: String,
    pub data_path: String,
    pub caption: Option<String>,
}

/// One row of a real-vs-generated comparison: the image pair plus the share
/// of study participants fooled by the generated one.
#[derive(Clone, Debug)]
pub struct ComparisonItem {
    pub id: String,
    pub original_image: String,
    pub generated_image: String,
    pub percentage: String,
}

/// Side-by-side image comparison rows.
#[derive(Clone, Debug)]
pub struct ComparisonTableData {
    pub title: String,
    pub items: Vec<ComparisonItem>,
    pub caption: Option<String>,
}

/// One benchmark sequence: reference optimum and the two solver scores.
#[derive(Clone, Debug)]
pub struct BenchmarkRow {
    pub id: String,
    pub length: u32,
    pub optimal: f64,
    pub aco: f64,
    pub hart: f64,
}

/// Solver-vs-optimal score table.
#[derive(Clone, Debug)]
pub struct BenchmarkTableData {
    pub title: Option<String>,
    pub rows: Vec<BenchmarkRow>,
    pub caption: Option<String>,
}

/// A pre-rendered chart image.
#[derive(Clone, Debug)]
pub struct PerformanceChartData {
    pub title: Option<String>,
    pub image: String,
    pub caption: Option<String>,
}

/// A visualization request inside a section: which component to mount, with
/// its component-specific payload.
///
/// The set of kinds is closed, but content may still name kinds this build
/// does not render via [`Visualization::Unsupported`]; those entries are
/// skipped silently so partially-authored content degrades instead of
/// breaking the page.
#[derive(Clone, Debug)]
pub enum Visualization {
    ComparisonTable(ComparisonTableData),
    TrainingChart(TrainingChartData),
    Histogram(HistogramData),
    BenchmarkTable(BenchmarkTableData),
    PerformanceChart(PerformanceChartData),
    /// A kind with no renderer in this build; `kind` keeps the authored tag
    /// for logging.
    Unsupported { kind: String },
}

impl Visualization {
    /// The authored tag for this kind.
    pub fn kind(&self) -> &str {
        match self {
            Visualization::ComparisonTable(_) => "comparison-table",
            Visualization::TrainingChart(_) => "training-chart",
            Visualization::Histogram(_) => "histogram",
            Visualization::BenchmarkTable(_) => "benchmark-table",
            Visualization::PerformanceChart(_) => "performance-chart",
            Visualization::Unsupported { kind } => kind,
        }
    }

    /// Whether this build has a renderer for the kind.
    pub fn is_renderable(&self) -> bool {
        !matches!(self, Visualization::Unsupported { .. })
    }
}

/// The dispatch plan for a section's visualization list: the renderable
/// entries, in input order. Entries with no renderer are dropped here, which
/// is the only place that policy lives.
pub fn renderable_visualizations(visualizations: &[Visualization]) -> Vec<&Visualization> {
    visualizations.iter().filter(|v| v.is_renderable()).collect()
}

// ============================================================================
// Experience
// ============================================================================

/// One entry of the resume page.
#[derive(Clone, Debug, Default)]
pub struct ExperienceItem {
    pub id: String,
    pub position: String,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
}

// ============================================================================
// Catalog
// ============================================================================

/// The full bundled content set.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceItem>,
}

impl Catalog {
    /// The content shipped with this build.
    pub fn bundled() -> Self {
        Self {
            projects: catalog::projects(),
            experience: catalog::experience(),
        }
    }

    /// Look up a project by id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn histogram() -> Visualization {
        Visualization::Histogram(HistogramData {
            title: "h".to_string(),
            data_path: "assets/data/h.dat".to_string(),
            caption: None,
        })
    }

    fn benchmark() -> Visualization {
        Visualization::BenchmarkTable(BenchmarkTableData {
            title: None,
            rows: Vec::new(),
            caption: None,
        })
    }

    #[test]
    fn test_dispatch_skips_unsupported_and_keeps_order() {
        let list = vec![
            histogram(),
            Visualization::Unsupported {
                kind: "unknown-future-type".to_string(),
            },
            benchmark(),
        ];

        let plan = renderable_visualizations(&list);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].kind(), "histogram");
        assert_eq!(plan[1].kind(), "benchmark-table");
    }

    #[test]
    fn test_dispatch_of_empty_list() {
        assert!(renderable_visualizations(&[]).is_empty());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(ProjectStatus::Completed.as_ref(), "completed");
        assert_eq!(
            ProjectStatus::from_str("ongoing").unwrap(),
            ProjectStatus::Ongoing
        );
        assert!(ProjectStatus::from_str("abandoned").is_err());
    }

    #[test]
    fn test_category_round_trip() {
        assert_eq!(Category::MachineLearning.as_ref(), "machine-learning");
        assert_eq!(
            Category::from_str("computer-vision").unwrap(),
            Category::ComputerVision
        );
    }

    #[test]
    fn test_line_spec_builder() {
        let spec = LineSpec::new("AVG_IS", "Inception Score", [239, 68, 68])
            .width(3.0)
            .dashed();
        assert_eq!(spec.width, 3.0);
        assert!(spec.dashed);
    }

    #[test]
    fn test_sections_ordered() {
        let mut project = Project::default();
        project.sections = vec![
            Section {
                id: "b".to_string(),
                order: 2,
                ..Default::default()
            },
            Section {
                id: "a".to_string(),
                order: 1,
                ..Default::default()
            },
        ];
        let ordered = project.sections_ordered();
        assert_eq!(ordered[0].id, "a");
        assert_eq!(ordered[1].id, "b");
    }
}
