//! Hygiene — keeps panic paths and silent error drops out of the form code.
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that would crash the
//! page or swallow an error. Budgets are zero; raising one needs a reason in
//! the same change.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

const SILENT_LOSS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
];

const STRUCTURE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0 }];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files under `src/`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
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

/// Per-file line counts for `pattern`, skipping files without a hit.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budgets(budgets: &[Budget]) {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "  `{}` budget exceeded: found {count}, max {}\n{detail}",
                budget.pattern, budget.max
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene failures:\n{}", failures.join("\n"));
}

#[test]
fn source_tree_is_scanned() {
    assert!(!source_files().is_empty(), "no sources found under src/");
}

#[test]
fn panic_budgets() {
    assert_budgets(PANICS);
}

#[test]
fn silent_loss_budgets() {
    assert_budgets(SILENT_LOSS);
}

#[test]
fn structure_budgets() {
    assert_budgets(STRUCTURE);
}
