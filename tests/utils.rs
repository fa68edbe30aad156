#![allow(dead_code)]

use clap::Parser;
use log::debug;
use sheetplate::cli::{run, Cli};
use std::fs;
use std::path::Path;

pub const SONGS_JSON: &str = "tests/fixtures/songs.json";
pub const SONG_TEMPLATE: &str = "tests/fixtures/song.txt";
pub const CONFIG: &str = "tests/fixtures/sheetplate.yaml";

/// Sorted file names of a directory.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// Prints a diff of files and their contents between two flat directories.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = file_names(dir1);
    let files2 = file_names(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.iter().filter(|f| !files2.contains(f)) {
        println!("  + {file}");
    }
    for file in files2.iter().filter(|f| !files1.contains(f)) {
        println!("  - {file}");
    }
    for file in files1.iter().filter(|f| files2.contains(f)) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap();
        let expected = fs::read_to_string(dir2.join(file)).unwrap();
        if actual != expected {
            println!("\n  File: {file}");
            println!("  --- Actual content:\n{actual}");
            println!("  --- Expected content:\n{expected}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Runs the CLI with `args` (program name excluded).
pub fn run_cli(args: &[&str]) -> sheetplate::Result<()> {
    let cli = Cli::parse_from(std::iter::once("sheetplate").chain(args.iter().copied()));
    run(cli)
}

/// Exports `source` through `template` with the CLI and asserts the output
/// directory matches `expected_dir` file for file.
pub fn run_and_assert(source: &str, template: &str, expected_dir: &str) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let output = tmp_dir.path().to_str().unwrap();
    run_cli(&[
        "export", output, "--source", source, "--template", template, "--config", CONFIG,
        "--force", "-vv",
    ])
    .unwrap();

    let result = dir_diff::is_different(tmp_dir.path(), expected_dir);
    match result {
        Ok(different) => {
            if different {
                print_dir_diff(tmp_dir.path(), expected_dir.as_ref());
                panic!("Directories differ. See above for details.");
            }
        }
        Err(e) => {
            debug!("Error comparing directories: {e}");
        }
    }
    assert!(!dir_diff::is_different(tmp_dir.path(), expected_dir).unwrap());
}
