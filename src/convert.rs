//! One conversion run: load, pick a sheet, emit CSV (or list sheets)

use crate::cli::Config;
use crate::csv_writer::CsvWriter;
use crate::error::{Result, Xlsx2CsvError};
use crate::resolver::resolve_sheet;
use crate::types::Row;
use crate::workbook::Workbook;
use std::fs::File;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Execute the run described by `config`
///
/// List mode always prints to standard output and ignores `--output` and
/// `--sheet`. Otherwise the sheet's rows are fetched before the output is
/// opened, so a bad sheet name never creates or truncates the CSV file.
pub fn run(config: &Config) -> Result<()> {
    let mut workbook = Workbook::open(config.input())?;

    if config.list_sheets {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return list_sheets(&workbook.sheet_names(), &mut out);
    }

    let rows = fetch_rows(&mut workbook, config.sheet())?;

    match config.output() {
        Some(path) => {
            let file = write_csv(&rows, CsvWriter::create(path)?)?;
            close_output(file);
        }
        None => {
            let stdout = write_csv(&rows, CsvWriter::new(io::stdout().lock()))?;
            drop(stdout);
        }
    }
    Ok(())
}

/// Print sheet names, one per line, in workbook order
pub fn list_sheets<W: Write>(names: &[String], out: &mut W) -> Result<()> {
    for name in names {
        writeln!(out, "{}", name)
            .map_err(|e| Xlsx2CsvError::WriteError(format!("write sheet list: {}", e)))?;
    }
    out.flush()
        .map_err(|e| Xlsx2CsvError::WriteError(format!("write sheet list: {}", e)))
}

/// Resolve the sheet to convert and read its rows
pub fn fetch_rows(workbook: &mut Workbook, requested: Option<&str>) -> Result<Vec<Row>> {
    let sheet = resolve_sheet(&workbook.sheet_names(), requested)?;
    let rows = workbook.rows(&sheet)?;

    debug!(sheet = %sheet, rows = rows.len(), origin = workbook.origin(), "read worksheet");
    Ok(rows)
}

/// Encode `rows` through `writer`, flush once, and return the sink
pub fn write_csv<W: Write>(rows: &[Row], mut writer: CsvWriter<W>) -> Result<W> {
    writer.write_rows(rows)?;
    debug!(records = writer.row_count(), "wrote csv");
    writer.save()
}

// Closing is best effort: the data is already flushed, so failures are only logged.
fn close_output(file: File) {
    let is_regular = file.metadata().map(|m| m.is_file()).unwrap_or(false);
    if !is_regular {
        return;
    }
    if let Err(e) = file.sync_all() {
        let err = Xlsx2CsvError::CloseError(format!("close output: {}", e));
        warn!("{}", err);
    }
}
