//! Test utilities and common setup.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use wordforge::GenerateOptions;

/// Options for the `aswin` scenario: caps, leet, two years, one number,
/// no shuffle, both policies enforced.
pub fn aswin_options(max: usize) -> GenerateOptions {
    GenerateOptions {
        words: vec!["aswin".to_string()],
        caps: true,
        leet: true,
        years: Some((2020, 2021)),
        numbers: vec![1],
        seps: vec![String::new()],
        shuffle: false,
        max,
        ..GenerateOptions::default()
    }
}

/// The wordforge binary with config discovery pointed at an empty home so
/// a developer's own config cannot leak into tests.
pub fn wordforge(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wordforge").expect("Failed to find wordforge binary");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("WORDFORGE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Read an output file into its lines.
pub fn read_lines(path: &PathBuf) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("output file should exist")
        .lines()
        .map(str::to_string)
        .collect()
}
