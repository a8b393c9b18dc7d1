//! A minimal reader for the plain-text Robot Framework suite format.
//!
//! Only the subset the report needs is understood: the test-case section,
//! test names, `[Documentation]` and `[Tags]` settings, and `...`
//! continuation rows. Suite-level settings, variables, templates, and
//! keywords are ignored. Cells are separated by a tab or two-plus spaces,
//! as in the format itself.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ExportError;
use crate::suite::{Suite, SuiteParser, TestCase};

static CELL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t| {2,}").unwrap());

/// Parses `.robot` files from disk.
#[derive(Debug, Default)]
pub struct RobotParser;

impl SuiteParser for RobotParser {
    fn parse(&self, path: &Path) -> Result<Suite, ExportError> {
        let source = fs::read_to_string(path).map_err(|source| ExportError::FileRead {
            file: path.to_path_buf(),
            source,
        })?;
        parse_source(&source).map_err(|reason| ExportError::MalformedSuite {
            file: path.to_path_buf(),
            reason,
        })
    }
}

/// Which setting a `...` continuation row extends.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Continuation {
    None,
    Documentation,
    Tags,
}

/// Parses suite source text into its test cases.
///
/// Errors carry only a reason string; the caller attaches the file path.
fn parse_source(source: &str) -> Result<Suite, String> {
    let mut tests: Vec<TestCase> = Vec::new();
    let mut current: Option<TestBuilder> = None;
    let mut in_test_section = false;
    let mut continuation = Continuation::None;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with("***") {
            if let Some(done) = current.take() {
                tests.push(done.finish());
            }
            in_test_section = is_test_section_header(trimmed);
            continuation = Continuation::None;
            continue;
        }

        if !in_test_section {
            continue;
        }

        let indented = line.starts_with(' ') || line.starts_with('\t');
        let cells = split_cells(line);
        let Some((&head, rest)) = cells.split_first() else {
            continue;
        };

        if !indented {
            // A non-indented row opens a new test; its first cell is the name.
            if let Some(done) = current.take() {
                tests.push(done.finish());
            }
            current = Some(TestBuilder::new(head));
            continuation = Continuation::None;
            continue;
        }

        match head.to_lowercase().as_str() {
            "[tags]" => {
                let test = current
                    .as_mut()
                    .ok_or("'[Tags]' setting before any test case")?;
                test.add_tags(rest);
                continuation = Continuation::Tags;
            }
            "[documentation]" => {
                let test = current
                    .as_mut()
                    .ok_or("'[Documentation]' setting before any test case")?;
                test.add_doc(rest);
                continuation = Continuation::Documentation;
            }
            "..." => {
                if let Some(test) = current.as_mut() {
                    match continuation {
                        Continuation::Documentation => test.add_doc(rest),
                        Continuation::Tags => test.add_tags(rest),
                        Continuation::None => {}
                    }
                }
            }
            // Any other row is a step or an unhandled setting.
            _ => continuation = Continuation::None,
        }
    }

    if let Some(done) = current.take() {
        tests.push(done.finish());
    }

    Ok(Suite { tests })
}

/// Accumulates one test case while its rows are being read.
#[derive(Debug)]
struct TestBuilder {
    name: String,
    doc_parts: Vec<String>,
    tags: Vec<String>,
    seen_tags: Vec<String>,
}

impl TestBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            doc_parts: Vec::new(),
            tags: Vec::new(),
            seen_tags: Vec::new(),
        }
    }

    fn add_doc(&mut self, cells: &[&str]) {
        self.doc_parts
            .extend(cells.iter().map(|c| c.to_string()));
    }

    /// Appends tags in declaration order, dropping case-insensitive
    /// duplicates the way Robot normalizes a tag list.
    fn add_tags(&mut self, cells: &[&str]) {
        for cell in cells {
            let normalized = cell.to_lowercase();
            if self.seen_tags.contains(&normalized) {
                continue;
            }
            self.seen_tags.push(normalized);
            self.tags.push(cell.to_string());
        }
    }

    fn finish(self) -> TestCase {
        TestCase {
            name: self.name,
            doc: self.doc_parts.join(" "),
            tags: self.tags,
        }
    }
}

/// Returns true for `*** Test Cases ***` and `*** Tasks ***` headers,
/// singular or plural, any case.
fn is_test_section_header(trimmed: &str) -> bool {
    let name = trimmed.trim_matches(|c: char| c == '*' || c.is_whitespace());
    matches!(
        name.to_lowercase().as_str(),
        "test cases" | "test case" | "tasks" | "task"
    )
}

/// Splits a row into cells on a tab or a run of two-plus spaces.
fn split_cells(line: &str) -> Vec<&str> {
    CELL_SEPARATOR
        .split(line.trim())
        .filter(|cell| !cell.is_empty())
        .collect()
}
