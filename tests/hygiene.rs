//! Hygiene — enforces coding standards at test time.
//!
//! Scans the library source tree for antipatterns. Each pattern has a budget
//! (ideally zero). If you must add an occurrence, fix an existing one first;
//! a budget never grows.
//!
//! `main.rs` is exempt: the driver binary is allowed to crash on startup
//! misconfiguration. Sibling `*_test.rs` files are exempt as test code.

use std::fs;
use std::path::Path;

/// (pattern, budget, rationale)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "crashes the process"),
    (".expect(", 0, "crashes the process"),
    ("panic!(", 0, "crashes the process"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("unreachable!(", 0, "crashes the process"),
    ("let _ =", 0, "discards a result without inspecting it"),
    ("#[allow(dead_code)]", 0, "dead code should be removed, not silenced"),
    // .ok()? in hex parsing and .ok() on env lookups convert to Option on
    // purpose; budget covers exactly those.
    (".ok()", 8, "deliberate Result-to-Option conversions only"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect library `.rs` files from `src/`, excluding the binary and tests.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no source files found; is the test running from the crate root?");
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") || path_str.ends_with("main.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 { Some((file.path.clone(), count)) } else { None }
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();

    for (pattern, budget, rationale) in BUDGETS {
        let hits = count_hits(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!(
                "{pattern} budget exceeded ({rationale}): found {count}, max {budget}\n{}",
                format_hits(&hits)
            ));
        }
    }

    assert!(failures.is_empty(), "hygiene violations:\n{}", failures.join("\n"));
}
