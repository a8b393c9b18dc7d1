//! The spreadsheet seam.
//!
//! Report rendering talks to a [`SheetWriter`], never to the xlsx crate
//! directly, so tests can capture rows in memory and another spreadsheet
//! backend could be swapped in. [`XlsxWorkbook`] is the real implementation,
//! backed by `umya-spreadsheet`.

use std::fs;
use std::path::Path;

use umya_spreadsheet::{self, Spreadsheet};

use crate::errors::ExportError;

/// One cell of a report row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Count(usize),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Count(value)
    }
}

/// Capability interface for the report artifact: open a named sheet, then
/// append rows to it. Rows always go to the most recently opened sheet.
pub trait SheetWriter {
    fn new_sheet(&mut self, name: &str) -> Result<(), ExportError>;
    fn append_row(&mut self, cells: Vec<CellValue>) -> Result<(), ExportError>;
}

/// An in-memory xlsx workbook, saved to disk in one shot after rendering.
pub struct XlsxWorkbook {
    book: Spreadsheet,
    active: Option<String>,
    next_row: u32,
}

impl XlsxWorkbook {
    pub fn new() -> Self {
        Self {
            book: umya_spreadsheet::new_file_empty_worksheet(),
            active: None,
            next_row: 1,
        }
    }

    /// Writes the workbook to `path`, creating the parent directory first if
    /// it does not exist.
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| ExportError::CreateOutputDir {
                dir: dir.to_path_buf(),
                source,
            })?;
        }
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|e| {
            ExportError::WorkbookSave {
                file: path.to_path_buf(),
                reason: e.to_string(),
            }
        })
    }
}

impl Default for XlsxWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetWriter for XlsxWorkbook {
    fn new_sheet(&mut self, name: &str) -> Result<(), ExportError> {
        self.book
            .new_sheet(name)
            .map_err(|e| ExportError::Workbook(e.to_string()))?;
        self.active = Some(name.to_string());
        self.next_row = 1;
        Ok(())
    }

    fn append_row(&mut self, cells: Vec<CellValue>) -> Result<(), ExportError> {
        let name = self.active.as_deref().ok_or(ExportError::NoActiveSheet)?;
        let sheet = self
            .book
            .get_sheet_by_name_mut(name)
            .ok_or(ExportError::NoActiveSheet)?;

        let row = self.next_row;
        for (index, cell) in cells.into_iter().enumerate() {
            let coordinate = (index as u32 + 1, row);
            match cell {
                CellValue::Text(text) => {
                    sheet.get_cell_mut(coordinate).set_value(text);
                }
                CellValue::Count(count) => {
                    sheet.get_cell_mut(coordinate).set_value_number(count as f64);
                }
            }
        }
        self.next_row += 1;
        Ok(())
    }
}
