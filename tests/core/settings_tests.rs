//! User settings tests

use folio::settings::UserSettings;
use folio::state::FontScale;

#[test]
fn test_defaults() {
    let settings = UserSettings::default();
    assert_eq!(settings.version, 1);
    assert!(!settings.color_blind_mode);
    assert_eq!(settings.font_scale, FontScale::Medium);
    assert!(!settings.skip_intro);
}

#[test]
fn test_round_trip() {
    let settings = UserSettings {
        version: 1,
        color_blind_mode: true,
        font_scale: FontScale::Small,
        skip_intro: true,
    };

    let json = settings.to_json().expect("serializes");
    let restored = UserSettings::from_json(&json);

    assert!(restored.color_blind_mode);
    assert_eq!(restored.font_scale, FontScale::Small);
    assert!(restored.skip_intro);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let restored = UserSettings::from_json(
        r#"{"version": 1, "color_blind_mode": true, "some_future_field": 42}"#,
    );
    assert!(restored.color_blind_mode);
}

#[test]
fn test_corrupt_file_contents_fall_back_to_defaults() {
    for junk in ["", "null", "[1,2,3]", "{\"font_scale\": \"Enormous\"}", "oops"] {
        let restored = UserSettings::from_json(junk);
        assert_eq!(restored.font_scale, FontScale::Medium, "input: {junk}");
    }
}
