//! Shared fixtures for infrastructure tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a file below the temp dir, creating parent directories
pub fn write_file(temp: &TempDir, relative_path: &str, content: &str) {
    let full_path = temp.path().join(relative_path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full_path, content).unwrap();
}

/// A small notebook: three listed chapters and one unlisted one
pub fn create_fundamentals_book(temp: &TempDir) {
    write_file(
        temp,
        "SUMMARY.md",
        "# Summary\n\n# Fundamentals\n\n- [Variables](ch01.md)\n- [Functions](ch02.md)\n- [Objects](ch03.md)\n",
    );
    for (name, title) in [
        ("ch01.md", "Variables"),
        ("ch02.md", "Functions"),
        ("ch03.md", "Objects"),
        ("ch04.md", "Leftovers"),
    ] {
        write_file(temp, name, &format!("# {title}\n\n```js\nlet x = 1;\n```\n"));
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
