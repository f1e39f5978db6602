use calamine::{Data, Range};

use crate::excel::CellValue;

static EMPTY: CellValue = CellValue::Empty;

#[derive(Clone, Debug)]
pub struct Sheet {
    pub name: String,
    /// Cell grid padded by one row and one column so that `data[row][col]`
    /// uses 1-based coordinates. Sheets read from a file hold only the
    /// sampled leading rows here.
    pub data: Vec<Vec<CellValue>>,
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Sheet {
    /// Builds a sheet from rows of values, row 1 first.
    ///
    /// Short rows are padded with empty cells; `max_cols` is the longest row.
    pub fn from_rows(name: &str, rows: Vec<Vec<CellValue>>) -> Self {
        let max_rows = rows.len();
        let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut data = Vec::with_capacity(max_rows + 1);
        data.push(vec![CellValue::Empty; max_cols + 1]);

        for row in rows {
            let mut padded = Vec::with_capacity(max_cols + 1);
            padded.push(CellValue::Empty);
            padded.extend(row);
            padded.resize(max_cols + 1, CellValue::Empty);
            data.push(padded);
        }

        Self {
            name: name.to_string(),
            data,
            max_rows,
            max_cols,
        }
    }

    /// Returns the cell at 1-based `(row, col)`, or an empty cell outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.data
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }
}

/// Converts a calamine range into a sheet anchored at A1.
///
/// calamine ranges start at the first used cell, so the extents are taken from
/// the range's absolute end position rather than its size. Only rows
/// `1..=row_limit` are copied into the grid; `max_rows` still reports the full
/// extent.
pub(crate) fn create_sheet_from_range(
    name: &str,
    range: &Range<Data>,
    row_limit: usize,
) -> Sheet {
    let (height, width) = match (range.start(), range.end()) {
        (Some(_), Some((end_row, end_col))) if !range.is_empty() => {
            (end_row as usize + 1, end_col as usize + 1)
        }
        _ => (0, 0),
    };

    let (start_row, start_col) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let loaded_rows = height.min(row_limit);
    let mut data = vec![vec![CellValue::Empty; width + 1]; loaded_rows + 1];

    // Range rows are relative to its first used row
    let rows_to_copy = loaded_rows.saturating_sub(start_row);
    for (row_idx, row) in range.rows().take(rows_to_copy).enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if matches!(cell, Data::Empty) {
                continue;
            }
            data[start_row + row_idx + 1][start_col + col_idx + 1] = CellValue::from(cell);
        }
    }

    Sheet {
        name: name.to_string(),
        data,
        max_rows: height,
        max_cols: width,
    }
}
