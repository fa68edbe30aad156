//! Tests for the config module

use crate::config::Config;
use crate::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn defaults_match_export_conventions() {
    let config = Config::default();
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert_eq!(config.index_width, 3);
    assert_eq!(config.extension, ".txt");
    assert!(config.validate().is_ok());
}

#[test]
fn loads_json_config_with_defaults_for_missing_fields() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("sheetplate.json"),
        r#"{"source": "https://sheetdb.io/api/v1/abc", "name_column": "title"}"#,
    )
    .unwrap();

    let config = Config::load_config(tmp.path()).unwrap();
    assert_eq!(config.source.as_deref(), Some("https://sheetdb.io/api/v1/abc"));
    assert_eq!(config.name_column.as_deref(), Some("title"));
    assert_eq!(config.timeout_secs, 10);
}

#[test]
fn loads_yaml_config() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("sheetplate.yml"),
        "template: song.txt\noutput_dir: out\ntimeout_secs: 30\nindex_width: 4\nextension: .wiki\n",
    )
    .unwrap();

    let config = Config::load_config(tmp.path()).unwrap();
    assert_eq!(config.template, Some(PathBuf::from("song.txt")));
    assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.naming().file_name(2, "a"), "0002_a.wiki");
}

#[test]
fn json_takes_precedence_over_yaml() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("sheetplate.json"), r#"{"timeout_secs": 5}"#).unwrap();
    fs::write(tmp.path().join("sheetplate.yaml"), "timeout_secs: 7\n").unwrap();

    assert_eq!(Config::load_config(tmp.path()).unwrap().timeout_secs, 5);
}

#[test]
fn missing_config_is_reported_and_discover_falls_back() {
    let tmp = tempfile::tempdir().unwrap();
    let err = Config::load_config(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { .. }));
    assert!(err.to_string().contains("sheetplate.json"));

    assert_eq!(Config::discover(tmp.path()).unwrap(), Config::default());
}

#[test]
fn malformed_config_is_a_parse_error() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("sheetplate.json"), "{").unwrap();
    assert!(matches!(Config::discover(tmp.path()), Err(Error::JsonParse(_))));
}

#[test]
fn validation_rejects_bad_values() {
    let cases = [
        Config { timeout_secs: 0, ..Config::default() },
        Config { index_width: 0, ..Config::default() },
        Config { extension: "txt".into(), ..Config::default() },
        Config { extension: ".".into(), ..Config::default() },
        Config { extension: ".t/x".into(), ..Config::default() },
    ];
    for config in cases {
        assert!(
            matches!(config.validate(), Err(Error::ConfigValidation(_))),
            "{config:?} should be rejected"
        );
    }
}

#[test]
fn missing_explicit_config_names_the_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("custom.yaml");
    let err = Config::load_file(&path).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(err.to_string().contains("custom.yaml"));
}
