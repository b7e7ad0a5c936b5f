//! Hygiene: source-level rules checked at test time.
//!
//! Scans the editor crate's production sources (everything under `src/`
//! except `*_test.rs`) for constructs the project keeps out of library code.
//! Every budget is zero. Raising one needs a reason in review.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics crash the host page or CLI.
const PANICS: &[Rule] = &[
    Rule { pattern: ".unwrap()", max: 0, why: "propagate or handle the None/Err case" },
    Rule { pattern: ".expect(", max: 0, why: "propagate or handle the None/Err case" },
    Rule { pattern: "panic!(", max: 0, why: "return an error or no-op" },
    Rule { pattern: "unreachable!(", max: 0, why: "encode the invariant in the types" },
    Rule { pattern: "todo!(", max: 0, why: "unfinished code" },
    Rule { pattern: "unimplemented!(", max: 0, why: "unfinished code" },
];

// Errors discarded without a look.
const DISCARDS: &[Rule] = &[
    Rule { pattern: "let _ =", max: 0, why: "inspect the value or log it" },
    Rule { pattern: ".ok()", max: 0, why: "match the error instead of dropping it" },
];

// Output that bypasses tracing.
const OUTPUT: &[Rule] = &[
    Rule { pattern: "println!(", max: 0, why: "log with tracing" },
    Rule { pattern: "eprintln!(", max: 0, why: "log with tracing" },
    Rule { pattern: "dbg!(", max: 0, why: "debugging leftover" },
];

const STRUCTURE: &[Rule] = &[Rule { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" }];

struct SourceFile {
    path: PathBuf,
    content: String,
}

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
            if path.to_string_lossy().ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn check(rules: &[Rule]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let mut failures = Vec::new();
    for rule in rules {
        let hits: Vec<String> = files
            .iter()
            .flat_map(|f| {
                f.content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(rule.pattern))
                    .map(|(n, _)| format!("    {}:{}", f.path.display(), n + 1))
            })
            .collect();
        if hits.len() > rule.max {
            failures.push(format!(
                "`{}`: found {}, max {} ({})\n{}",
                rule.pattern,
                hits.len(),
                rule.max,
                rule.why,
                hits.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_discard_budget() {
    check(DISCARDS);
}

#[test]
fn stray_output_budget() {
    check(OUTPUT);
}

#[test]
fn structure_budget() {
    check(STRUCTURE);
}

/// Every `#[path = "…_test.rs"]` attribute must point at a file that exists.
#[test]
fn test_modules_exist() {
    let mut missing = Vec::new();
    for file in source_files() {
        let dir = file.path.parent().map(Path::to_path_buf).unwrap_or_default();
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.strip_suffix("\"]") else {
                continue;
            };
            if !dir.join(name).is_file() {
                missing.push(format!("{} -> {name}", file.path.display()));
            }
        }
    }
    assert!(missing.is_empty(), "missing test files:\n{}", missing.join("\n"));
}
