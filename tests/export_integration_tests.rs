use sheetplate::{
    data::{Dataset, Row, Value},
    error::Error,
    export::{sanitize_file_name, Exporter, FileNaming},
    template::parse,
};
use std::fs;
use std::ops::ControlFlow;
use test_log::test;
mod utils;
use utils::{file_names, run_and_assert, run_cli, CONFIG, SONGS_JSON, SONG_TEMPLATE};

#[test]
fn export_song_sheets_from_json_file() {
    run_and_assert(SONGS_JSON, SONG_TEMPLATE, "tests/expected/songs");
}

#[test]
fn exports_titles_with_reserved_characters() {
    let tmp = tempfile::tempdir().unwrap();
    let rows: Vec<Row> = ["A/B", "C", "D"]
        .iter()
        .map(|t| [("title", *t)].into_iter().collect())
        .collect();
    let dataset = Dataset::new(rows).unwrap();
    let template = parse("<<title>>");

    let written = Exporter::new(&template).export_dataset(&dataset, tmp.path(), None).unwrap();

    assert_eq!(written, 3);
    assert_eq!(file_names(tmp.path()), vec!["001_A_B.txt", "002_C.txt", "003_D.txt"]);
}

#[test]
fn every_row_gets_a_distinct_clean_file() {
    let tmp = tempfile::tempdir().unwrap();
    let names = [r"a\b", "c/d", "e:f", "g*h", "i?j", "k\"l", "m<n", "o>p", "q|r", "同じ", "同じ"];
    let rows: Vec<Row> =
        names.iter().map(|n| [("name", *n)].into_iter().collect()).collect();
    let template = parse("<<name>>");

    let written = Exporter::new(&template).export_all(&rows, tmp.path(), Some("name")).unwrap();

    let files = file_names(tmp.path());
    assert_eq!(written, names.len());
    assert_eq!(files.len(), names.len());
    for (index, file) in files.iter().enumerate() {
        assert!(file.starts_with(&format!("{:03}_", index + 1)), "{file}");
        assert!(!file.contains(['\\', '/', ':', '*', '?', '"', '<', '>', '|']), "{file}");
    }
    assert_eq!(fs::read_to_string(tmp.path().join("002_c_d.txt")).unwrap(), "c/d");
    assert_eq!(sanitize_file_name("同じ"), "同じ");
}

#[test]
fn custom_naming_from_config_values() {
    let tmp = tempfile::tempdir().unwrap();
    let rows: Vec<Row> = vec![[("title", Value::from(7i64))].into_iter().collect()];
    let template = parse("<<title>>");

    Exporter::new(&template)
        .with_naming(FileNaming::new(5, ".wiki"))
        .export_all(&rows, tmp.path(), Some("title"))
        .unwrap();

    assert_eq!(file_names(tmp.path()), vec!["00001_7.wiki"]);
}

#[test]
fn progress_reports_each_row_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let rows: Vec<Row> =
        ["x", "y", "z"].iter().map(|t| [("t", *t)].into_iter().collect()).collect();
    let template = parse("<<t>>");
    let mut targets = Vec::new();

    Exporter::new(&template)
        .export_all_with(&rows, tmp.path(), Some("t"), |progress| {
            assert!(progress.written);
            targets.push(progress.target.file_name().unwrap().to_string_lossy().to_string());
            ControlFlow::Continue(())
        })
        .unwrap();

    assert_eq!(targets, vec!["001_x.txt", "002_y.txt", "003_z.txt"]);
}

#[test]
fn cli_dry_run_leaves_directory_absent() {
    let tmp = tempfile::tempdir().unwrap();
    let output = tmp.path().join("out");
    run_cli(&[
        "export",
        output.to_str().unwrap(),
        "-s",
        SONGS_JSON,
        "-t",
        SONG_TEMPLATE,
        "-c",
        CONFIG,
        "--dry-run",
    ])
    .unwrap();
    assert!(!output.exists());
}

#[test]
fn cli_render_saves_single_row_into_directory() {
    let tmp = tempfile::tempdir().unwrap();
    run_cli(&[
        "render",
        "-s",
        SONGS_JSON,
        "-t",
        SONG_TEMPLATE,
        "-c",
        CONFIG,
        "--row",
        "3",
        "--output",
        tmp.path().to_str().unwrap(),
    ])
    .unwrap();

    let saved = fs::read_to_string(tmp.path().join("result_3.txt")).unwrap();
    assert_eq!(saved, fs::read_to_string("tests/expected/songs/003_D.txt").unwrap());
}

#[test]
fn cli_render_rejects_row_past_the_end() {
    let err = run_cli(&["render", "-s", SONGS_JSON, "-t", SONG_TEMPLATE, "-c", CONFIG, "-r", "9"])
        .unwrap_err();
    assert!(matches!(err, Error::RowOutOfRange { row: 9, total: 3 }));
}

#[test]
fn cli_check_strict_reports_unknown_columns() {
    let tmp = tempfile::tempdir().unwrap();
    let template = tmp.path().join("t.txt");
    fs::write(&template, "<<title>> <<tempo>> <<key|C>> <<tempo>>").unwrap();

    let err = run_cli(&[
        "check",
        "-s",
        SONGS_JSON,
        "-t",
        template.to_str().unwrap(),
        "-c",
        CONFIG,
        "--strict",
    ])
    .unwrap_err();

    match err {
        Error::UnknownPlaceholders(keys) => assert_eq!(keys, "tempo, key"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn cli_check_passes_when_all_columns_exist() {
    run_cli(&["check", "-s", SONGS_JSON, "-t", SONG_TEMPLATE, "-c", CONFIG, "--strict"])
        .unwrap();
}

#[test]
fn cli_export_without_output_dir_is_a_config_error() {
    let err = run_cli(&["export", "-s", SONGS_JSON, "-t", SONG_TEMPLATE, "-c", CONFIG])
        .unwrap_err();
    assert!(matches!(err, Error::ConfigValidation(_)));
}

#[test]
fn cli_init_writes_a_parseable_template() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("template.txt");
    run_cli(&["init", path.to_str().unwrap()]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let template = parse(&text);
    assert!(template.keys().contains(&"title"));
}
