use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;

use crate::excel::Workbook;
use crate::report::{summarize_workbook, SheetSummary};

pub type WorkbookSummaryJson = IndexMap<String, SheetSummary>;

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")
}

/// Summaries keyed by sheet name, in workbook order.
pub fn generate_all_sheets_json(workbook: &Workbook) -> WorkbookSummaryJson {
    let summaries = summarize_workbook(workbook);

    let mut all_sheets = IndexMap::with_capacity(summaries.len());
    for summary in summaries {
        all_sheets.insert(summary.name.clone(), summary);
    }

    all_sheets
}
