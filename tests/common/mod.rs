//! Common test utilities for integration tests

#![allow(dead_code)]

use rivet_convert::ConvertConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a legacy source file into the scratch directory
pub fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Config that writes converted files into the scratch directory
pub fn config_in(dir: &TempDir) -> ConvertConfig {
    ConvertConfig {
        output_dir: Some(dir.path().to_path_buf()),
        ..ConvertConfig::default()
    }
}

/// Blank and comment lines, in order
pub fn skipped_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let content = line.trim();
            content.is_empty() || content.starts_with('#')
        })
        .map(|line| line.to_string())
        .collect()
}

/// Names of the files in a directory, sorted
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
