//! Formatting tests

use folio::fmt;

#[test]
fn test_series_values_use_four_decimals() {
    assert_eq!(fmt::series_value(0.81), "0.8100");
    assert_eq!(fmt::series_value(13.14159), "13.1416");
    assert_eq!(fmt::series_value(-0.5), "-0.5000");
}

#[test]
fn test_nan_series_value_has_placeholder() {
    assert_eq!(fmt::series_value(f64::NAN), "n/a");
}

#[test]
fn test_hue_labels_use_two_decimals() {
    assert_eq!(fmt::hue_label(0.0), "0.00");
    assert_eq!(fmt::hue_label(0.66), "0.66");
    assert_eq!(fmt::hue_label(1.0), "1.00");
}

#[test]
fn test_pixel_counts_are_whole_numbers() {
    assert_eq!(fmt::pixel_count(5213.0), "5213");
    assert_eq!(fmt::pixel_count(0.0), "0");
    assert_eq!(fmt::pixel_count(f64::NAN), "n/a");
}

#[test]
fn test_month_year_formats() {
    assert_eq!(fmt::month_year("2024-01-15"), "January 2024");
    assert_eq!(fmt::month_year("2023-12-20"), "December 2023");
    assert_eq!(fmt::month_year("2025-06"), "June 2025");
}

#[test]
fn test_month_year_keeps_unparseable_input() {
    assert_eq!(fmt::month_year("ongoing"), "ongoing");
    assert_eq!(fmt::month_year("2024-00"), "2024-00");
    assert_eq!(fmt::month_year("24-01"), "24-01");
}

#[test]
fn test_date_ranges() {
    assert_eq!(
        fmt::date_range("2023-09-01", Some("2023-12-20")),
        "September 2023 - December 2023"
    );
    assert_eq!(fmt::date_range("2024-11", None), "November 2024 - Present");
}
