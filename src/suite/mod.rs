//! The suite model and the parser seam.
//!
//! The exporter never inspects suite files directly; it consumes whatever a
//! [`SuiteParser`] yields. The bundled [`RobotParser`] reads the plain-text
//! Robot Framework format, but any conforming implementation (a different
//! test-file format, a pre-parsed fixture in tests) can be substituted.

use std::path::Path;

use crate::errors::ExportError;

pub mod parser;

pub use parser::RobotParser;

/// One named test scenario extracted from a suite file.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    /// Documentation text, empty when the test carries none.
    pub doc: String,
    /// Tags in declaration order, deduplicated case-insensitively.
    pub tags: Vec<String>,
}

/// All tests found in a single suite file.
#[derive(Debug, Clone, Default)]
pub struct Suite {
    pub tests: Vec<TestCase>,
}

/// Capability interface for turning one suite file into a [`Suite`].
pub trait SuiteParser {
    fn parse(&self, path: &Path) -> Result<Suite, ExportError>;
}
