//! Buffered CSV output to a file or standard output

use crate::csv::{CsvEncoder, LINE_ENDING};
use crate::error::{Result, Xlsx2CsvError};
use crate::types::Row;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV writer over any byte sink
///
/// Output goes through a `BufWriter`. [`CsvWriter::save`] flushes it once at
/// the end; if a run bails out early, dropping the writer flushes whatever was
/// already encoded, so bytes written before a failure stay in the destination.
///
/// # Examples
///
/// ```no_run
/// use xlsx2csv::csv_writer::CsvWriter;
///
/// let mut writer = CsvWriter::create("output.csv")?;
/// writer.write_row(["Name", "Age", "City"])?;
/// writer.write_row(["Alice", "30", "NYC"])?;
/// writer.save()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct CsvWriter<W: Write> {
    writer: BufWriter<W>,
    encoder: CsvEncoder,
    row_count: u64,
    buffer: Vec<u8>,
}

impl CsvWriter<File> {
    /// Create (or truncate) a CSV file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            Xlsx2CsvError::WriteError(format!("create {}: {}", path.display(), e))
        })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap a byte sink
    pub fn new(inner: W) -> Self {
        CsvWriter {
            writer: BufWriter::new(inner),
            encoder: CsvEncoder::default(),
            row_count: 0,
            buffer: Vec::with_capacity(4096),
        }
    }

    /// Write one record
    pub fn write_row<I, S>(&mut self, data: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<S> = data.into_iter().collect();

        self.buffer.clear();
        self.encoder.encode_row(&fields, &mut self.buffer);
        self.buffer.extend_from_slice(LINE_ENDING);

        self.writer
            .write_all(&self.buffer)
            .map_err(|e| Xlsx2CsvError::WriteError(format!("write csv: {}", e)))?;

        self.row_count += 1;
        Ok(())
    }

    /// Write worksheet rows in order, one record each
    pub fn write_rows(&mut self, rows: &[Row]) -> Result<()> {
        for row in rows {
            self.write_row(row.to_strings())?;
        }
        Ok(())
    }

    /// Get the number of records written
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Flush buffered output and hand back the sink
    pub fn save(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Xlsx2CsvError::WriteError(format!("flush csv: {}", e.error())))
    }
}
