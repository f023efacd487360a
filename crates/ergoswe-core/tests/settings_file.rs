// Loading settings from disk

#![cfg(feature = "settings")]

use std::io::Write;
use std::time::Duration;

use ergoswe_core::keycode::{KC_B, KC_GRV, KC_N};
use ergoswe_core::{
    default_settings_content, Layout, Modifier, RecordingSink, Settings, SettingsError,
    TapHoldKey, UnmappedPolicy,
};

fn write_settings(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_from_file_drives_the_sender() {
    let file = write_settings(
        r#"
[layout]
variant = "swedish-mac-iso"

[send]
on_unmapped = "abort"
"#,
    );

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.source_path(), Some(file.path()));
    assert_eq!(settings.unmapped_policy(), UnmappedPolicy::Abort);

    let sender = settings.send_string();
    let mut sink = RecordingSink::new();
    sender.send("<", &mut sink).unwrap();
    assert_eq!(sink.pressed(), vec![KC_GRV]);
    assert!(sender.send("å", &mut sink).is_err());
}

#[test]
fn test_reload_picks_up_changes() {
    let file = write_settings("[tapping]\nterm_ms = 150\n");
    let mut settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.tapping_terms().base(), Duration::from_millis(150));

    std::fs::write(
        file.path(),
        "[tapping.per_key]\n\"LCTL_T(KC_B)\" = 2450\n\"LCTL_T(KC_N)\" = 2450\n",
    )
    .unwrap();
    settings.reload().unwrap();

    let terms = settings.tapping_terms();
    assert_eq!(terms.overrides().len(), 2);
    for key in [KC_B, KC_N] {
        let tap_hold = TapHoldKey::ModTap {
            modifier: Modifier::LeftCtrl,
            key,
        };
        assert_eq!(terms.term_for(&tap_hold), Duration::from_millis(2450));
    }
    assert_eq!(terms.base(), Duration::from_millis(200));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Settings::from_file(dir.path().join("settings.toml"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_default_content_round_trips_through_file() {
    let file = write_settings(default_settings_content());
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.layout(), Layout::SwedishIso);
    assert!(settings.tapping_terms().overrides().is_empty());
}
