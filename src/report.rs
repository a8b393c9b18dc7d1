//! Aggregation of parsed tests and rendering of the three report sheets.

use std::collections::{BTreeMap, HashMap};

use crate::classify::Classification;
use crate::errors::ExportError;
use crate::sheet::{CellValue, SheetWriter};
use crate::suite::TestCase;

pub const SCENARIOS_SHEET: &str = "Cenários de Testes";
pub const SUMMARY_SHEET: &str = "Resumo";
pub const TAGS_SHEET: &str = "Tags";

/// One row of the scenarios sheet, frozen at aggregation time.
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord {
    pub file: String,
    pub name: String,
    pub doc: String,
    pub module: String,
    pub test_type: String,
    pub priority: String,
    pub extra_tags: Vec<String>,
}

/// Accumulates records and counters over the whole walk.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<TestRecord>,
    tag_counts: HashMap<String, usize>,
    file_counts: BTreeMap<String, usize>,
    max_extra_tags: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one classified test into the running totals. `file` is the
    /// path shown in the report, relative to the input root's parent.
    pub fn record_test(&mut self, file: &str, test: &TestCase, classification: Classification) {
        for tag in &test.tags {
            *self.tag_counts.entry(tag.clone()).or_insert(0) += 1;
        }
        *self.file_counts.entry(file.to_string()).or_insert(0) += 1;
        self.max_extra_tags = self.max_extra_tags.max(classification.extra_tags.len());

        self.records.push(TestRecord {
            file: file.to_string(),
            name: test.name.clone(),
            doc: test.doc.clone(),
            module: classification.module,
            test_type: classification.test_type,
            priority: classification.priority,
            extra_tags: classification.extra_tags,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_tests(&self) -> usize {
        self.records.len()
    }

    pub fn unique_tags(&self) -> usize {
        self.tag_counts.len()
    }

    /// Freezes the aggregation into a renderable report, sorting records by
    /// (module, test name).
    pub fn into_report(self) -> Report {
        let Aggregator {
            mut records,
            tag_counts,
            file_counts,
            max_extra_tags,
        } = self;

        records.sort_by(|a, b| (&a.module, &a.name).cmp(&(&b.module, &b.name)));

        // Count descending; ties broken by tag so repeated runs render
        // identical rows.
        let mut tag_counts: Vec<(String, usize)> = tag_counts.into_iter().collect();
        tag_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Report {
            records,
            tag_counts,
            file_counts,
            max_extra_tags,
        }
    }
}

/// The sorted, render-ready form of an aggregation.
#[derive(Debug)]
pub struct Report {
    pub records: Vec<TestRecord>,
    pub tag_counts: Vec<(String, usize)>,
    pub file_counts: BTreeMap<String, usize>,
    pub max_extra_tags: usize,
}

impl Report {
    /// Renders the three sheets into `sheets` in their fixed order.
    pub fn render(&self, sheets: &mut dyn SheetWriter) -> Result<(), ExportError> {
        self.render_scenarios(sheets)?;
        self.render_summary(sheets)?;
        self.render_tags(sheets)
    }

    fn render_scenarios(&self, sheets: &mut dyn SheetWriter) -> Result<(), ExportError> {
        sheets.new_sheet(SCENARIOS_SHEET)?;

        let mut header: Vec<CellValue> = [
            "Arquivo",
            "Nome do Teste",
            "Documentação",
            "Módulo",
            "Tipo de Teste",
            "Prioridade",
        ]
        .into_iter()
        .map(CellValue::from)
        .collect();
        for n in 1..=self.max_extra_tags {
            header.push(format!("Tag Extra {}", n).into());
        }
        sheets.append_row(header)?;

        for record in &self.records {
            let mut row: Vec<CellValue> = vec![
                record.file.as_str().into(),
                record.name.as_str().into(),
                record.doc.as_str().into(),
                record.module.as_str().into(),
                record.test_type.as_str().into(),
                record.priority.as_str().into(),
            ];
            row.extend(record.extra_tags.iter().map(|t| t.as_str().into()));
            sheets.append_row(row)?;
        }
        Ok(())
    }

    fn render_summary(&self, sheets: &mut dyn SheetWriter) -> Result<(), ExportError> {
        sheets.new_sheet(SUMMARY_SHEET)?;
        sheets.append_row(vec!["Arquivo".into(), "Quantidade de Testes".into()])?;
        for (file, count) in &self.file_counts {
            sheets.append_row(vec![file.as_str().into(), (*count).into()])?;
        }
        sheets.append_row(vec!["TOTAL".into(), self.records.len().into()])
    }

    fn render_tags(&self, sheets: &mut dyn SheetWriter) -> Result<(), ExportError> {
        sheets.new_sheet(TAGS_SHEET)?;
        sheets.append_row(vec!["Tag".into(), "Quantidade".into()])?;
        for (tag, count) in &self.tag_counts {
            sheets.append_row(vec![tag.as_str().into(), (*count).into()])?;
        }
        Ok(())
    }
}
