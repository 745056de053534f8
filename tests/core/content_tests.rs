//! Content catalog and visualization dispatch tests

use folio::content::{renderable_visualizations, Catalog, Visualization};
use folio::table::parse_table;

use crate::common::read_asset_file;

#[test]
fn test_project_lookup() {
    let catalog = Catalog::bundled();

    let project = catalog.project("vae-gan").expect("vae-gan exists");
    assert!(project.title.contains("Colorization"));

    assert!(catalog.project("nope").is_none());
}

#[test]
fn test_sections_render_in_order() {
    let catalog = Catalog::bundled();
    for project in &catalog.projects {
        let ordered = project.sections_ordered();
        for pair in ordered.windows(2) {
            assert!(
                pair[0].order <= pair[1].order,
                "sections out of order in {}",
                project.id
            );
        }
    }
}

#[test]
fn test_dispatcher_skips_unknown_kinds_in_bundled_content() {
    let catalog = Catalog::bundled();
    let project = catalog.project("mrna-expression").expect("exists");

    // The evaluation section is authored with kinds this build does not
    // render; the plan for it must be empty.
    let section = project
        .sections
        .iter()
        .find(|section| section.id == "evaluation")
        .expect("evaluation section exists");
    assert_eq!(section.content.visualizations.len(), 3);
    assert!(renderable_visualizations(&section.content.visualizations).is_empty());
}

#[test]
fn test_dispatcher_keeps_known_kinds_in_input_order() {
    let catalog = Catalog::bundled();
    let project = catalog.project("vae-gan").expect("exists");
    let section = project
        .sections
        .iter()
        .find(|section| section.id == "results")
        .expect("results section exists");

    let plan = renderable_visualizations(&section.content.visualizations);
    let kinds: Vec<&str> = plan.iter().map(|v| v.kind()).collect();
    assert_eq!(kinds, vec!["comparison-table", "training-chart", "histogram"]);
}

#[test]
fn test_training_chart_keys_exist_in_their_data_files() {
    // Every configured series key must appear in its data file's header;
    // otherwise the chart silently renders an absent series.
    let catalog = Catalog::bundled();

    for project in &catalog.projects {
        for section in &project.sections {
            for viz in &section.content.visualizations {
                if let Visualization::TrainingChart(data) = viz {
                    for chart in &data.charts {
                        let text = read_asset_file(&chart.data_path);
                        let table = parse_table(&text).expect("bundled file parses");
                        for line in &chart.lines {
                            assert!(
                                table.column_index(&line.key).is_some(),
                                "{} missing key {}",
                                chart.data_path,
                                line.key
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_experience_entries_are_complete() {
    let catalog = Catalog::bundled();
    assert!(!catalog.experience.is_empty());
    for item in &catalog.experience {
        assert!(!item.position.is_empty());
        assert!(!item.company.is_empty());
        assert!(!item.start_date.is_empty());
    }
}
