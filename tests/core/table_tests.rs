//! Data table parser tests

use folio::table::{parse_table, AxisKey, TableError};

#[test]
fn test_record_count_matches_data_lines() {
    let text = "epoch a b\n0 1 2\n1 3 4\n2 5 6\n";
    let table = parse_table(text).expect("Should parse");
    assert_eq!(table.len(), 3);
}

#[test]
fn test_every_record_has_all_header_keys() {
    let text = "epoch AVG_IS D_loss\n0 12.3 1.02\n1 13.1 0.99\n";
    let table = parse_table(text).expect("Should parse");

    for i in 0..table.len() {
        let record = table.record(i).expect("record in range");
        for column in table.columns() {
            assert!(
                record.get(column).is_some(),
                "record {} missing key {}",
                i,
                column
            );
        }
    }
}

#[test]
fn test_order_is_preserved() {
    let text = "epoch v\n0 10\n1 20\n2 30\n3 40\n";
    let table = parse_table(text).expect("Should parse");

    for i in 0..table.len() {
        let record = table.record(i).expect("record in range");
        assert_eq!(record.axis(AxisKey::Epoch), Some(i as f64));
        assert_eq!(record.get("v"), Some((i as f64 + 1.0) * 10.0));
    }
}

#[test]
fn test_parsing_is_idempotent() {
    let text = "epoch a b\n0 1 2\n1 3 4\n";
    let first = parse_table(text).expect("Should parse");
    let second = parse_table(text).expect("Should parse");

    assert_eq!(first.columns(), second.columns());
    assert_eq!(first.len(), second.len());
    for i in 0..first.len() {
        for column in first.columns() {
            let a = first.record(i).unwrap().get(column).unwrap();
            let b = second.record(i).unwrap().get(column).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

#[test]
fn test_spec_example_scenario() {
    // "epoch a b\n0 1 2\n1 3 4\n" yields [{epoch:0,a:1,b:2},{epoch:1,a:3,b:4}]
    let table = parse_table("epoch a b\n0 1 2\n1 3 4\n").expect("Should parse");

    assert_eq!(table.len(), 2);
    let r0 = table.record(0).unwrap();
    assert_eq!(r0.axis(AxisKey::Epoch), Some(0.0));
    assert_eq!(r0.get("a"), Some(1.0));
    assert_eq!(r0.get("b"), Some(2.0));
    let r1 = table.record(1).unwrap();
    assert_eq!(r1.axis(AxisKey::Epoch), Some(1.0));
    assert_eq!(r1.get("a"), Some(3.0));
    assert_eq!(r1.get("b"), Some(4.0));
}

#[test]
fn test_blank_edges_are_ignored() {
    let text = "\n\n  \nepoch a\n0 1\n1 2\n\n\n";
    let table = parse_table(text).expect("Should parse");
    assert_eq!(table.columns(), &["epoch", "a"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_multiple_spaces_and_tabs_delimit() {
    let text = "epoch\t a   b\n0 \t 1.5    2.5\n";
    let table = parse_table(text).expect("Should parse");
    assert_eq!(table.columns(), &["epoch", "a", "b"]);
    assert_eq!(table.record(0).unwrap().get("b"), Some(2.5));
}

#[test]
fn test_non_axis_columns_are_case_sensitive() {
    let table = parse_table("epoch Loss\n0 1\n").expect("Should parse");
    assert_eq!(table.column_index("Loss"), Some(1));
    assert_eq!(table.column_index("loss"), None);
}

#[test]
fn test_empty_text_is_error_not_panic() {
    assert!(matches!(parse_table(""), Err(TableError::Empty)));
}

#[test]
fn test_header_only_file_yields_zero_records() {
    let table = parse_table("epoch a b\n").expect("Should parse");
    assert!(table.is_empty());
    assert_eq!(table.columns().len(), 3);
}
