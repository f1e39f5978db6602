use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sheet_report::excel;
use sheet_report::json_export;
use sheet_report::report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Excel file path
    #[arg(default_value = "Riesgos.xlsx")]
    file_path: PathBuf,

    /// Text report destination, overwritten if it exists
    #[arg(long, short = 'o', default_value = "analisis_riesgos.txt")]
    output: PathBuf,

    /// Print the sheet summaries as JSON to stdout instead of writing the text report
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // If JSON export flag is set, export to stdout and exit
    if cli.json {
        // Open Excel file
        let workbook = excel::open_workbook(&cli.file_path)
            .with_context(|| format!("Unable to load workbook: {}", cli.file_path.display()))?;

        // Serialize to JSON and print to stdout
        let all_sheets = json_export::generate_all_sheets_json(&workbook);
        let json_string = json_export::serialize_to_json(&all_sheets)?;
        println!("{}", json_string);

        return Ok(());
    }

    // Otherwise, write the text report
    let summary = report::run(&cli.file_path, &cli.output)
        .with_context(|| format!("Unable to build report for {}", cli.file_path.display()))?;

    println!("Análisis guardado en: {}", summary.output_path.display());
    println!("Total de líneas: {}", summary.line_count);

    Ok(())
}
