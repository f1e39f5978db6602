use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{ReportError, Result};
use crate::excel::open_workbook;
use crate::report::summarize;

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub line_count: usize,
}

/// Writes `text` as UTF-8, replacing whatever is at `path`.
pub fn write_report(text: &str, path: &Path) -> Result<()> {
    let write_error = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;

    info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Loads `input`, renders its report and writes it to `output`.
///
/// Nothing is written unless the workbook loads completely.
pub fn run(input: &Path, output: &Path) -> Result<RunSummary> {
    let workbook = open_workbook(input)?;
    let report = summarize(&workbook);
    info!(
        "Summarized {} sheet(s) from {} into {} line(s)",
        workbook.sheets().len(),
        workbook.get_file_path().display(),
        report.line_count()
    );

    write_report(&report.to_document(), output)?;

    Ok(RunSummary {
        output_path: output.to_path_buf(),
        line_count: report.line_count(),
    })
}
