//! Hygiene — enforces coding standards at test time.
//!
//! Scans the production source tree for antipatterns. Each pattern has a
//! budget of zero: panics have no place in code that runs inside the page
//! load sequence, and silently discarded errors hide a missing canvas.

use std::fs;
use std::path::Path;

/// (pattern, budget) pairs checked against every production source line.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `_test.rs` files.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if count > 0 {
                Some((file.path.clone(), count))
            } else {
                None
            }
        })
        .collect()
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (pattern, budget) in BUDGETS {
        let hits = hits_for(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = hits
                .iter()
                .map(|(path, c)| format!("  {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            violations.push(format!(
                "`{pattern}` budget exceeded: found {count}, max {budget}\n{detail}"
            ));
        }
    }

    assert!(violations.is_empty(), "{}", violations.join("\n"));
}
