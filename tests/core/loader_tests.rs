//! Chart data loader tests

use std::path::PathBuf;
use std::time::{Duration, Instant};

use folio::loader::{load_table, ChartData, LoadError};

use crate::common::asset_files;

fn poll_until_settled(data: &mut ChartData) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while data.is_loading() && Instant::now() < deadline {
        data.poll();
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_bundled_file_loads() {
    let mut data = ChartData::spawn(PathBuf::from(asset_files::TRAINING_ENHANCED));
    poll_until_settled(&mut data);

    let table = data.table().expect("bundled file should load");
    assert!(!table.is_empty());
}

#[test]
fn test_missing_path_settles_into_terminal_failed_state() {
    // A 404-equivalent path must never panic; the chart ends in a stable
    // non-loading state.
    let mut data = ChartData::spawn(PathBuf::from("assets/data/does_not_exist.dat"));
    poll_until_settled(&mut data);

    assert!(data.is_failed());
    assert!(!data.is_loading());
    assert!(data.table().is_none());

    // No retry: polling again stays failed.
    for _ in 0..3 {
        data.poll();
        assert!(data.is_failed());
    }
}

#[test]
fn test_io_error_kind() {
    let err = load_table(std::path::Path::new("assets/data/does_not_exist.dat")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_empty_file_is_parse_error() {
    let path = std::env::temp_dir().join("folio_core_empty.dat");
    std::fs::write(&path, "   \n \n").expect("write temp file");

    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));

    std::fs::remove_file(&path).ok();
}
