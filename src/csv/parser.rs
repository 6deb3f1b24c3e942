//! CSV parsing with RFC 4180 behavior

use super::{DELIMITER, QUOTE};

/// CSV parser for reading back emitted CSV text
pub struct CsvParser {
    delimiter: char,
    quote_char: char,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(DELIMITER, QUOTE)
    }
}

impl CsvParser {
    /// Create a new CSV parser with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter: delimiter as char,
            quote_char: quote_char as char,
        }
    }

    /// Parse CSV text into records
    ///
    /// Quoted fields may span lines. Both `\n` and `\r\n` end a record; an
    /// empty line is a record with no fields.
    pub fn parse_records(&self, text: &str) -> Vec<Vec<String>> {
        let mut records = Vec::new();
        let mut record = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut touched = false;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if in_quotes {
                if ch == self.quote_char {
                    if chars.peek() == Some(&self.quote_char) {
                        field.push(self.quote_char);
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(ch);
                }
                continue;
            }

            match ch {
                c if c == self.quote_char => {
                    in_quotes = true;
                    touched = true;
                }
                c if c == self.delimiter => {
                    record.push(std::mem::take(&mut field));
                    touched = true;
                }
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' => {
                    if touched || !field.is_empty() {
                        record.push(std::mem::take(&mut field));
                    }
                    records.push(std::mem::take(&mut record));
                    touched = false;
                }
                c => field.push(c),
            }
        }

        if touched || !field.is_empty() {
            record.push(field);
            records.push(record);
        }
        records
    }
}
