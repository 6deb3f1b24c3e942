//! CSV encoding with RFC 4180 quoting

use super::{DELIMITER, QUOTE};

/// CSV encoder for writing properly formatted CSV records
pub struct CsvEncoder {
    delimiter: u8,
    quote_char: u8,
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new(DELIMITER, QUOTE)
    }
}

impl CsvEncoder {
    /// Create a new CSV encoder with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Encode a record (without its terminator) into buffer
    pub fn encode_row<S: AsRef<str>>(&self, fields: &[S], buffer: &mut Vec<u8>) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                buffer.push(self.delimiter);
            }
            self.encode_field(field.as_ref(), buffer);
        }
    }

    /// Encode single field with proper quoting/escaping
    fn encode_field(&self, field: &str, buffer: &mut Vec<u8>) {
        if !self.needs_quoting(field) {
            buffer.extend_from_slice(field.as_bytes());
            return;
        }

        buffer.push(self.quote_char);
        for byte in field.bytes() {
            if byte == self.quote_char {
                // " -> ""
                buffer.push(self.quote_char);
            }
            buffer.push(byte);
        }
        buffer.push(self.quote_char);
    }

    /// Check if field requires quoting
    ///
    /// Leading whitespace is quoted too, so readers that trim unquoted
    /// fields keep it.
    fn needs_quoting(&self, field: &str) -> bool {
        if field.starts_with(char::is_whitespace) {
            return true;
        }
        field
            .bytes()
            .any(|b| b == self.delimiter || b == self.quote_char || b == b'\n' || b == b'\r')
    }
}
