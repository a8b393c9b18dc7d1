//! The cenario command-line interface.
//!
//! This module is the main entry point for the CLI and orchestrates the
//! export pipeline: discover suite files, parse them, classify tags,
//! aggregate, and write the workbook.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use crate::classify::{classify_tags, TagTables};
use crate::cli::args::CenarioArgs;
use crate::discovery;
use crate::errors::ExportError;
use crate::report::Aggregator;
use crate::sheet::XlsxWorkbook;
use crate::suite::{RobotParser, SuiteParser};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = CenarioArgs::parse();

    match export(&args) {
        Ok(ExportOutcome::NoScenarios) => {
            output::status("No test scenarios found in the .robot files; nothing to export.");
        }
        Ok(ExportOutcome::Written {
            path,
            files,
            tests,
            unique_tags,
        }) => {
            output::status("");
            output::status(&format!("Suite files processed: {}", files));
            output::status(&format!("Scenarios found: {}", tests));
            output::status(&format!("Unique tags: {}", unique_tags));
            output::success(&format!("Report saved to '{}'", path.display()));
        }
        Err(e) => {
            output::error(&e.to_string());
            process::exit(1);
        }
    }
}

/// How an export run ended.
#[derive(Debug)]
pub enum ExportOutcome {
    /// The walk finished but no file yielded a single test.
    NoScenarios,
    Written {
        path: PathBuf,
        /// Suite files that parsed successfully.
        files: usize,
        tests: usize,
        unique_tags: usize,
    },
}

/// Runs the whole pipeline with the bundled Robot parser and the default
/// classification tables.
pub fn export(args: &CenarioArgs) -> Result<ExportOutcome, ExportError> {
    export_with(args, &RobotParser, &TagTables::default())
}

/// Runs the pipeline with an injected parser and classification tables.
pub fn export_with(
    args: &CenarioArgs,
    parser: &dyn SuiteParser,
    tables: &TagTables,
) -> Result<ExportOutcome, ExportError> {
    output::status(&format!(
        "Scanning for test scenarios under '{}'",
        args.testinput.display()
    ));

    let files = discovery::discover_suite_files(&args.testinput)?;
    let base_name = args.input_base_name();

    let mut aggregator = Aggregator::new();
    let mut parsed_files = 0usize;

    for file in &files {
        let suite = match parser.parse(file) {
            Ok(suite) => suite,
            Err(e) => {
                // A broken suite file contributes nothing; the walk goes on.
                output::warn(&e.to_string());
                continue;
            }
        };
        parsed_files += 1;

        let relative = report_path(file, &args.testinput, &base_name);
        for test in &suite.tests {
            if test.name.is_empty() {
                continue;
            }
            let classification = classify_tags(&test.tags, tables);
            aggregator.record_test(&relative, test, classification);
        }
    }

    if aggregator.is_empty() {
        return Ok(ExportOutcome::NoScenarios);
    }

    let tests = aggregator.total_tests();
    let unique_tags = aggregator.unique_tags();
    let report = aggregator.into_report();

    let mut workbook = XlsxWorkbook::new();
    report.render(&mut workbook)?;

    let path = args.output_path();
    workbook.save(&path)?;

    Ok(ExportOutcome::Written {
        path,
        files: parsed_files,
        tests,
        unique_tags,
    })
}

/// Path shown in report rows: the input root's base name joined with the
/// file's path inside the root, so rows read `<base>/sub/file.robot`.
fn report_path(file: &Path, root: &Path, base_name: &str) -> String {
    match file.strip_prefix(root) {
        Ok(inside) => Path::new(base_name).join(inside).display().to_string(),
        Err(_) => file.display().to_string(),
    }
}
