//! Value and date formatting shared by the chart legends, hover readouts and
//! page headers.

/// Format a series value for the hover readout (four decimals, the precision
/// losses and scores are quoted at). NaN samples read as "n/a" rather than
/// propagating into the display.
pub fn series_value(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.4}", value)
    }
}

/// Format a hue bucket label (two decimals).
pub fn hue_label(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a pixel count from a histogram file. Counts are whole numbers;
/// NaN samples read as "n/a".
pub fn pixel_count(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.0}", value)
    }
}

/// Format an epoch axis value. Epochs are whole numbers in every bundled
/// file, so drop the fraction.
pub fn epoch_label(value: f64) -> String {
    format!("{}", value.round() as i64)
}

const MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format an ISO-ish date (`YYYY-MM` or `YYYY-MM-DD`) as "Month Year".
/// Returns the input unchanged when it doesn't look like a date, so content
/// typos degrade to visible text instead of an error.
pub fn month_year(date: &str) -> String {
    let mut parts = date.split('-');
    let year = parts.next().unwrap_or_default();
    let month = parts
        .next()
        .and_then(|m| m.parse::<usize>().ok())
        .filter(|m| (1..=12).contains(m));

    match month {
        Some(m) if year.len() == 4 => format!("{} {}", MONTH_NAMES[m - 1], year),
        _ => date.to_string(),
    }
}

/// Format a start/end date pair as shown on project and experience headers.
/// An open end date reads as "Present".
pub fn date_range(start: &str, end: Option<&str>) -> String {
    match end {
        Some(end) => format!("{} - {}", month_year(start), month_year(end)),
        None => format!("{} - Present", month_year(start)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_value_four_decimals() {
        assert_eq!(series_value(0.8123456), "0.8123");
        assert_eq!(series_value(20.0), "20.0000");
    }

    #[test]
    fn test_series_value_nan() {
        assert_eq!(series_value(f64::NAN), "n/a");
    }

    #[test]
    fn test_hue_label() {
        assert_eq!(hue_label(0.2), "0.20");
        assert_eq!(hue_label(0.975), "0.97");
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(pixel_count(1523.0), "1523");
        assert_eq!(pixel_count(f64::NAN), "n/a");
    }

    #[test]
    fn test_epoch_label() {
        assert_eq!(epoch_label(17.0), "17");
        assert_eq!(epoch_label(16.6), "17");
    }

    #[test]
    fn test_month_year() {
        assert_eq!(month_year("2024-01-15"), "January 2024");
        assert_eq!(month_year("2025-10"), "October 2025");
    }

    #[test]
    fn test_month_year_passthrough_on_junk() {
        assert_eq!(month_year("soon"), "soon");
        assert_eq!(month_year("2024-13"), "2024-13");
    }

    #[test]
    fn test_date_range() {
        assert_eq!(
            date_range("2024-01-15", Some("2024-06-30")),
            "January 2024 - June 2024"
        );
        assert_eq!(date_range("2024-11", None), "November 2024 - Present");
    }
}
