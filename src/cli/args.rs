//! Defines the command-line arguments for the `cenario` CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "cenario",
    version,
    about = "Exports Robot Framework test scenarios to a structured Excel workbook."
)]
pub struct CenarioArgs {
    /// Root directory containing the .robot suite files.
    #[arg(long = "testinput", value_name = "DIR")]
    pub testinput: PathBuf,

    /// Directory where the Excel report is written.
    #[arg(long = "outputdir", value_name = "DIR", default_value = ".")]
    pub outputdir: PathBuf,
}

impl CenarioArgs {
    /// Name of the input root as shown in report paths and the output file
    /// name. Falls back through canonicalization for roots like `.`.
    pub fn input_base_name(&self) -> String {
        if let Some(name) = self.testinput.file_name() {
            return name.to_string_lossy().into_owned();
        }
        self.testinput
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "testes".to_string())
    }

    /// Full path of the report artifact: `<outputdir>/cenarios_<base>.xlsx`.
    pub fn output_path(&self) -> PathBuf {
        self.outputdir
            .join(format!("cenarios_{}.xlsx", self.input_base_name()))
    }
}
