//! CSV utilities for encoding and parsing

mod encoder;
mod parser;

pub use encoder::CsvEncoder;
pub use parser::CsvParser;

/// Field delimiter of the emitted CSV
pub const DELIMITER: u8 = b',';
/// Quote character of the emitted CSV
pub const QUOTE: u8 = b'"';
/// Record terminator of the emitted CSV
pub const LINE_ENDING: &[u8] = b"\n";
