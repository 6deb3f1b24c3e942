//! # xlsx2csv
//!
//! Convert one worksheet of an XLSX workbook to CSV, or list the workbook's
//! sheets. Parsing of the XLSX container is done by [calamine]; this crate
//! adds sheet selection, cell-to-text rendering and RFC 4180 CSV output.
//!
//! ## Quick Start
//!
//! ```no_run
//! use xlsx2csv::csv_writer::CsvWriter;
//! use xlsx2csv::workbook::Workbook;
//! use xlsx2csv::convert::{fetch_rows, write_csv};
//!
//! let mut workbook = Workbook::from_path("report.xlsx")?;
//! let rows = fetch_rows(&mut workbook, Some("Q1"))?;
//! write_csv(&rows, CsvWriter::create("q1.csv")?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [calamine]: https://docs.rs/calamine

pub mod cli;
pub mod convert;
pub mod csv;
pub mod csv_writer;
pub mod error;
pub mod resolver;
pub mod types;
pub mod workbook;

pub use cli::Config;
pub use error::{Result, Xlsx2CsvError};
pub use workbook::Workbook;
