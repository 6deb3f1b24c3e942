//! Workbook loading on top of calamine
//!
//! XLSX parsing (ZIP container, shared strings, styles, sheet XML) is done by
//! calamine. This module only picks the byte source, keeps the parsed
//! workbook alive for the duration of a run, and turns a worksheet into
//! [`Row`]s anchored at cell A1.
//!
//! The source is either a file opened by path or standard input. Standard
//! input is not seekable, so it is read fully into memory first.

use crate::error::{Result, Xlsx2CsvError};
use crate::types::{CellValue, Row};
use calamine::{Data, Range, Reader, Xlsx, XlsxError};
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Seekable byte source a workbook is parsed from
pub enum InputSource {
    /// Workbook file opened by path
    File(BufReader<File>),
    /// Fully buffered stream (standard input)
    Memory(Cursor<Vec<u8>>),
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(reader) => reader.read(buf),
            InputSource::Memory(cursor) => cursor.read(buf),
        }
    }
}

impl Seek for InputSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            InputSource::File(reader) => reader.seek(pos),
            InputSource::Memory(cursor) => cursor.seek(pos),
        }
    }
}

/// A parsed XLSX workbook
///
/// Owns its input source; the underlying file handle is released when the
/// workbook is dropped, on every exit path of a run.
pub struct Workbook {
    xlsx: Xlsx<InputSource>,
    origin: String,
}

impl Workbook {
    /// Open a workbook from `path`, or from standard input when `path` is `None`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use xlsx2csv::workbook::Workbook;
    /// use std::path::Path;
    ///
    /// let workbook = Workbook::open(Some(Path::new("report.xlsx")))?;
    /// for name in workbook.sheet_names() {
    ///     println!("{}", name);
    /// }
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::from_reader(io::stdin().lock(), "<stdin>"),
        }
    }

    /// Open a workbook file by path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Xlsx2CsvError::OpenError(format!("open {}: {}", path.display(), e))
        })?;

        Self::from_source(
            InputSource::File(BufReader::new(file)),
            path.display().to_string(),
        )
    }

    /// Read `reader` to its end, then parse the buffered bytes as a workbook
    pub fn from_reader<R: Read>(mut reader: R, origin: &str) -> Result<Self> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| Xlsx2CsvError::OpenError(format!("read {}: {}", origin, e)))?;

        debug!(origin, bytes = data.len(), "buffered workbook input");
        Self::from_source(InputSource::Memory(Cursor::new(data)), origin.to_string())
    }

    fn from_source(source: InputSource, origin: String) -> Result<Self> {
        let xlsx = Xlsx::new(source).map_err(|e| Xlsx2CsvError::OpenError(e.to_string()))?;

        debug!(
            origin = %origin,
            sheets = xlsx.sheet_names().len(),
            "opened workbook"
        );
        Ok(Workbook { xlsx, origin })
    }

    /// Where the workbook was read from (a path, or `<stdin>`)
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Worksheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.xlsx.sheet_names()
    }

    /// Read every row of `sheet_name`
    ///
    /// Sheet names match case-insensitively, as they do in Excel; an exact
    /// match wins. A name that is not in the workbook yields
    /// [`Xlsx2CsvError::SheetNotFound`] carrying the name as requested; other
    /// library failures are passed through as [`Xlsx2CsvError::ReadError`].
    pub fn rows(&mut self, sheet_name: &str) -> Result<Vec<Row>> {
        let stored = self
            .find_sheet(sheet_name)
            .ok_or_else(|| Xlsx2CsvError::SheetNotFound(sheet_name.to_string()))?;

        let range = self.xlsx.worksheet_range(&stored).map_err(|e| match e {
            XlsxError::WorksheetNotFound(_) => {
                Xlsx2CsvError::SheetNotFound(sheet_name.to_string())
            }
            other => Xlsx2CsvError::ReadError(other.to_string()),
        })?;

        Ok(rows_from_range(&range))
    }

    /// Workbook spelling of `sheet_name`
    fn find_sheet(&self, sheet_name: &str) -> Option<String> {
        let names = self.sheet_names();
        if names.iter().any(|name| name == sheet_name) {
            return Some(sheet_name.to_string());
        }
        let wanted = sheet_name.to_lowercase();
        names.into_iter().find(|name| name.to_lowercase() == wanted)
    }
}

/// Lay out a used range as rows starting at A1
///
/// calamine trims the range to its first used cell, so the rows and columns
/// in front of that origin are filled back in as empty.
fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows = Vec::with_capacity(first_row as usize + range.height());
    rows.extend((0..first_row).map(|index| Row::new(index, Vec::new())));

    for (offset, cells) in range.rows().enumerate() {
        let values: Vec<CellValue> = std::iter::repeat(CellValue::Empty)
            .take(first_col as usize)
            .chain(cells.iter().map(CellValue::from))
            .collect();
        rows.push(Row::new(first_row + offset as u32, values));
    }

    rows
}
