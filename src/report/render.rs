use crate::report::summary::{RowSample, SheetSummary};

const BANNER_WIDTH: usize = 100;
const BANNER_CHAR: &str = "=";
const CELL_SEPARATOR: &str = " | ";

/// The rendered text report, one entry per output line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of entries in the line list, not the number of newlines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Joins the lines with `\n`; there is no trailing newline.
    pub fn to_document(&self) -> String {
        self.lines.join("\n")
    }
}

fn banner() -> String {
    BANNER_CHAR.repeat(BANNER_WIDTH)
}

fn render_row(sample: &RowSample) -> String {
    let cells: Vec<String> = sample
        .cells
        .iter()
        .map(|entry| format!("Col{}: {}", entry.col, entry.value))
        .collect();

    format!("Fila {}: {}", sample.row, cells.join(CELL_SEPARATOR))
}

fn render_sheet(summary: &SheetSummary, lines: &mut Vec<String>) {
    lines.push(banner());
    lines.push(format!("HOJA: {}", summary.name));
    lines.push(banner());
    lines.push(String::new());

    lines.push(format!(
        "Dimensiones: {} filas x {} columnas",
        summary.max_row, summary.max_col
    ));
    lines.push(String::new());

    lines.extend(summary.rows.iter().map(render_row));

    lines.push(String::new());
    lines.push(String::new());
}

pub fn render_lines(summaries: &[SheetSummary]) -> Vec<String> {
    let mut lines = Vec::new();
    for summary in summaries {
        render_sheet(summary, &mut lines);
    }
    lines
}
