//! Hygiene: scans `src/` for patterns that crash the page or hide failures.
//!
//! Budgets are zero. Storage and DOM errors must be matched and logged, not
//! discarded.

use std::fs;
use std::path::Path;

/// Pattern, budget, and what it means when found.
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics in the browser"),
    (".expect(", 0, "panics in the browser"),
    ("panic!(", 0, "panics in the browser"),
    ("unreachable!(", 0, "panics in the browser"),
    ("todo!(", 0, "unfinished code"),
    ("unimplemented!(", 0, "unfinished code"),
    ("let _ =", 0, "discards an error without inspecting it"),
    (".ok()", 0, "discards an error without inspecting it"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// rustfmt's default `max_width`.
const MAX_LINE_WIDTH: usize = 100;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`; `*_test.rs` files are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

/// Every `.rs` file under `src/` and `tests/`, test files included.
fn all_rs_files() -> Vec<String> {
    let mut paths = Vec::new();
    for root in ["src", "tests"] {
        collect_paths(Path::new(root), &mut paths);
    }
    paths
}

fn collect_paths(dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_paths(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path.to_string_lossy().to_string());
        }
    }
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (file.path.clone(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")), "run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, budget, meaning) in RULES {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} ({meaning}): found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn lines_fit_rustfmt_width() {
    let mut long = Vec::new();
    for path in all_rs_files() {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in content.lines().enumerate() {
            let width = line.chars().count();
            if width > MAX_LINE_WIDTH {
                long.push(format!("    {path}:{}: {width}", idx + 1));
            }
        }
    }
    assert!(long.is_empty(), "lines wider than {MAX_LINE_WIDTH}:\n{}", long.join("\n"));
}
