pub use crate::errors::ExportError;

pub mod classify;
pub mod cli;
pub mod discovery;
pub mod errors;
pub mod report;
pub mod sheet;
pub mod suite;
