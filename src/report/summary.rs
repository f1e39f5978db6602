use serde::Serialize;

use crate::excel::{Sheet, Workbook};

/// Number of leading rows sampled from every sheet.
pub const ROW_LIMIT: usize = 30;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellEntry {
    pub col: usize,
    pub value: String,
}

/// The present cells of one sampled row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowSample {
    pub row: usize,
    pub cells: Vec<CellEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SheetSummary {
    #[serde(skip)]
    pub name: String,
    pub max_row: usize,
    pub max_col: usize,
    pub rows: Vec<RowSample>,
}

/// Samples rows `1..=min(ROW_LIMIT, max_rows)` of a sheet, keeping only rows
/// that hold at least one present cell.
pub fn summarize_sheet(sheet: &Sheet) -> SheetSummary {
    let last_row = sheet.max_rows.min(ROW_LIMIT);
    let mut rows = Vec::new();

    for row_idx in 1..=last_row {
        let cells: Vec<CellEntry> = (1..=sheet.max_cols)
            .filter_map(|col_idx| {
                let cell = sheet.cell(row_idx, col_idx);
                cell.is_present().then(|| CellEntry {
                    col: col_idx,
                    value: cell.to_string(),
                })
            })
            .collect();

        if !cells.is_empty() {
            rows.push(RowSample {
                row: row_idx,
                cells,
            });
        }
    }

    SheetSummary {
        name: sheet.name.clone(),
        max_row: sheet.max_rows,
        max_col: sheet.max_cols,
        rows,
    }
}

pub fn summarize_workbook(workbook: &Workbook) -> Vec<SheetSummary> {
    workbook.sheets().iter().map(summarize_sheet).collect()
}
