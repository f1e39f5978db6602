mod render;
mod summary;
mod writer;

pub use render::{render_lines, Report};
pub use summary::{
    summarize_sheet, summarize_workbook, CellEntry, RowSample, SheetSummary, ROW_LIMIT,
};
pub use writer::{run, write_report, RunSummary};

use crate::excel::Workbook;

/// Summarizes every sheet and renders the text report.
pub fn summarize(workbook: &Workbook) -> Report {
    Report::new(render_lines(&summarize_workbook(workbook)))
}
