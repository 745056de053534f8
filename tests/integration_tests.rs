//! Integration tests over the bundled asset files
//!
//! These tests verify end-to-end parsing of the data files the content
//! catalog references, and the full parse-hide-render-plan flow a chart
//! component performs.

#[path = "common/mod.rs"]
mod common;

use folio::table::{parse_table, AxisKey};
use folio::ui::histogram::histogram_series;
use folio::visibility::VisibilitySet;

use common::{asset_files, read_asset_file};

// ============================================
// Bundled data file integrity
// ============================================

#[test]
fn test_all_bundled_files_parse() {
    for path in asset_files::ALL {
        let text = read_asset_file(path);
        let table = parse_table(&text)
            .unwrap_or_else(|e| panic!("Should parse bundled file '{}': {}", path, e));

        assert!(!table.is_empty(), "{} has no records", path);

        // Every record carries every header key
        for i in 0..table.len() {
            let record = table.record(i).expect("record in range");
            for column in table.columns() {
                assert!(record.get(column).is_some(), "{} row {}", path, i);
            }
        }
    }
}

#[test]
fn test_training_files_have_epoch_axis_and_monotonic_epochs() {
    for path in [asset_files::TRAINING_ENHANCED, asset_files::TRAINING_BASIC] {
        let table = parse_table(&read_asset_file(path)).expect("Should parse");
        let epochs = table
            .axis_values(AxisKey::Epoch)
            .expect("epoch column present");

        for pair in epochs.windows(2) {
            assert!(pair[0] < pair[1], "{} epochs not increasing", path);
        }
    }
}

#[test]
fn test_training_files_have_finite_loss_values() {
    let table = parse_table(&read_asset_file(asset_files::TRAINING_ENHANCED))
        .expect("Should parse");

    for key in ["AVG_IS", "Val_L1_loss", "D_loss", "G_loss"] {
        let segments = table.series_segments(AxisKey::Epoch, key);
        let points: usize = segments.iter().map(|s| s.len()).sum();
        assert_eq!(points, table.len(), "series {} has gaps", key);
    }
}

#[test]
fn test_histogram_file_matches_the_fixed_series_set() {
    let table = parse_table(&read_asset_file(asset_files::HISTOGRAM)).expect("Should parse");

    assert!(table.axis_index(AxisKey::Hue).is_some());
    for line in histogram_series() {
        assert!(
            table.column_index(&line.key).is_some(),
            "histogram file missing series {}",
            line.key
        );
    }

    // Hue buckets span the unit interval
    let hues = table.axis_values(AxisKey::Hue).expect("hue column");
    assert_eq!(hues.first().copied(), Some(0.0));
    assert_eq!(hues.last().copied(), Some(1.0));
}

// ============================================
// End-to-end chart flow
// ============================================

#[test]
fn test_parse_hide_and_plan_flow() {
    // The flow a chart performs: parse the file, hide a series via its
    // legend, and collect what remains drawable and readout-eligible.
    let table = parse_table(&read_asset_file(asset_files::TRAINING_ENHANCED))
        .expect("Should parse");
    let keys = ["AVG_IS", "Val_L1_loss", "D_loss", "G_loss"];

    let mut hidden = VisibilitySet::default();
    hidden.toggle("AVG_IS");

    let drawable: Vec<&str> = keys
        .into_iter()
        .filter(|key| !hidden.is_hidden(key))
        .collect();
    assert_eq!(drawable, vec!["Val_L1_loss", "D_loss", "G_loss"]);

    for key in &drawable {
        assert!(!table.series_segments(AxisKey::Epoch, key).is_empty());
    }

    // Readout for the hovered record excludes the hidden series
    let record = table
        .nearest_record(AxisKey::Epoch, 10.2)
        .expect("hover snaps to a record");
    let readout: Vec<String> = keys
        .into_iter()
        .filter(|key| !hidden.is_hidden(key))
        .filter_map(|key| {
            table
                .record(record)
                .and_then(|r| r.get(key))
                .map(|v| format!("{}: {}", key, folio::fmt::series_value(v)))
        })
        .collect();
    assert_eq!(readout.len(), 3);
    assert!(readout.iter().all(|line| !line.starts_with("AVG_IS")));

    // Toggling back restores the full set
    hidden.toggle("AVG_IS");
    assert_eq!(hidden.hidden_count(), 0);
}
