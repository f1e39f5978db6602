use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Reader};
use log::{debug, info};

use crate::error::{ReportError, Result};
use crate::excel::sheet::create_sheet_from_range;
use crate::excel::Sheet;
use crate::report::ROW_LIMIT;

#[derive(Clone, Debug)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    file_path: PathBuf,
}

/// Opens a workbook and eagerly reads the cached values of every sheet.
///
/// Each sheet keeps its full extents but only the first [`ROW_LIMIT`] rows of
/// cells.
///
/// The format is detected from the file extension, so `.xlsx`, `.xlsm`,
/// `.xlsb`, `.xls` and `.ods` are all accepted. The file handle is released
/// before this returns.
pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path_ref = path.as_ref();

    // calamine reports a missing file as a generic I/O error, so check first
    if !path_ref.exists() {
        return Err(ReportError::InputNotFound {
            path: path_ref.to_path_buf(),
        });
    }

    let workbook_error = |source| ReportError::Workbook {
        path: path_ref.to_path_buf(),
        source,
    };

    // Open workbook directly from path
    let mut workbook = open_workbook_auto(path_ref).map_err(workbook_error)?;

    let sheet_names = workbook.sheet_names().to_vec();
    info!(
        "Opened {} with {} sheet(s)",
        path_ref.display(),
        sheet_names.len()
    );

    // Pre-allocate with the right capacity
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in &sheet_names {
        let range = workbook.worksheet_range(name).map_err(workbook_error)?;

        // Only the sampled rows are copied out of the range
        let sheet = create_sheet_from_range(name, &range, ROW_LIMIT);

        debug!(
            "Loaded sheet '{}' ({} x {})",
            sheet.name, sheet.max_rows, sheet.max_cols
        );
        sheets.push(sheet);
    }

    Ok(Workbook {
        sheets,
        file_path: path_ref.to_path_buf(),
    })
}

impl Workbook {
    /// Builds a workbook from sheets already in memory.
    pub fn from_sheets<P: Into<PathBuf>>(file_path: P, sheets: Vec<Sheet>) -> Self {
        Self {
            sheets,
            file_path: file_path.into(),
        }
    }

    /// Sheets in the order the workbook declares them.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn get_file_path(&self) -> &Path {
        &self.file_path
    }
}
