#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the wisent-plots binary.
#[macro_export]
macro_rules! wisent_plots {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("wisent-plots"))
    };
}

/// Temporary project directory holding a manifest and its output.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `charts.toml` and returns its path.
    pub fn create_manifest(&self, content: &str) -> PathBuf {
        self.create_file("charts.toml", content)
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads a file relative to the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One chart of every kind, written to `out/`.
pub const EVERY_KIND_MANIFEST: &str = r#"
[settings]
output_dir = "out"

[[chart]]
kind = "area"
name = "area"
title = "Revenue"
style = "2patterns"
x = [1, 2, 3]
series = [[1, 2, 3], [2, 1, 2]]
labels = ["Cloud", "Edge"]

[[chart]]
kind = "bar"
name = "bar"
style = 3
categories = ["Q1", "Q2"]
series = [[1, 2], [3, 4]]
labels = ["2024", "2025"]

[[chart]]
kind = "column"
name = "column"
theme = "white"
categories = [2024, 2025]
series = [[5, 7]]

[[chart]]
kind = "line"
name = "line"
style = "markers"
theme = "white"
x = [1, 2, 3]
series = [[1, 4, 2]]
labels = ["Latency"]

[[chart]]
kind = "bubble"
name = "bubble"
x = [1, 2]
y = [3, 4]
sizes = [5, 6]
categories = [0, 1]
category_labels = ["Small", "Large"]

[[chart]]
kind = "radar_bubble"
name = "radial"
angles = [0, 90]
distances = [20, 80]
sizes = [1, 2]

[[chart]]
kind = "pie"
name = "pie"
theme = "black"
values = [25, 75]
labels = ["A", "B"]

[[chart]]
kind = "radar"
name = "radar"
series = [[10, 20, 30, 40, 50, 60, 70, 80]]
labels = ["Team"]
"#;

/// A valid pie next to a radar chart with the wrong number of values.
pub const PARTLY_BROKEN_MANIFEST: &str = r#"
[[chart]]
kind = "pie"
name = "good"
values = [1, 2]

[[chart]]
kind = "radar"
name = "broken"
series = [[1, 2, 3]]
"#;
