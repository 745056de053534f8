//! Series visibility controller tests

use folio::table::{parse_table, AxisKey};
use folio::visibility::VisibilitySet;

#[test]
fn test_new_set_shows_everything() {
    let set = VisibilitySet::default();
    for key in ["AVG_IS", "Val_L1_loss", "D_loss", "G_loss"] {
        assert!(!set.is_hidden(key));
    }
}

#[test]
fn test_double_toggle_restores_state() {
    let mut set = VisibilitySet::default();
    set.toggle("s3");

    set.toggle("real");
    set.toggle("real");

    assert!(set.is_hidden("s3"));
    assert!(!set.is_hidden("real"));
    assert_eq!(set.hidden_count(), 1);
}

#[test]
fn test_toggle_sequence() {
    let mut set = VisibilitySet::default();

    set.toggle("a");
    set.toggle("b");
    set.toggle("a");
    set.toggle("c");

    assert!(!set.is_hidden("a"));
    assert!(set.is_hidden("b"));
    assert!(set.is_hidden("c"));
    assert_eq!(set.hidden_count(), 2);
}

#[test]
fn test_hiding_filters_rendering_not_data() {
    // Hiding series "a" leaves only "b" eligible; the parsed table is not
    // touched by visibility changes.
    let table = parse_table("epoch a b\n0 1 2\n1 3 4\n").expect("Should parse");
    let mut hidden = VisibilitySet::default();
    hidden.toggle("a");

    let drawable: Vec<&str> = ["a", "b"]
        .into_iter()
        .filter(|key| !hidden.is_hidden(key))
        .collect();
    assert_eq!(drawable, vec!["b"]);

    // Data still holds both series
    assert_eq!(table.record(0).unwrap().get("a"), Some(1.0));
    assert!(!table.series_segments(AxisKey::Epoch, "a").is_empty());
    assert!(!table.series_segments(AxisKey::Epoch, "b").is_empty());
}
