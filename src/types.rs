//! Type definitions for worksheet data

use calamine::Data;
use chrono::{NaiveDateTime, NaiveTime};
use std::fmt;

/// A single worksheet cell as read from the workbook
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Date or date-time value
    DateTime(NaiveDateTime),
    /// Duration, or a date serial that has no calendar equivalent
    Duration(f64),
    /// Error value (e.g. `#DIV/0!`)
    Error(String),
}

impl CellValue {
    /// Render the cell as CSV field text
    pub fn as_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::String(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => general_number(*f),
            CellValue::Bool(true) => "TRUE".to_string(),
            CellValue::Bool(false) => "FALSE".to_string(),
            CellValue::DateTime(dt) if dt.time() == NaiveTime::MIN => {
                dt.format("%Y-%m-%d").to_string()
            }
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            CellValue::Duration(d) => general_number(*d),
            CellValue::Error(e) => e.clone(),
        }
    }

    /// Check if the cell renders as nothing
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// Render a number the way Excel's General format does
///
/// Values keep 15 significant digits. Exponents of 15 and above, or below -9,
/// switch to scientific notation (`1E+20`, `1.5E-10`).
fn general_number(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return value.to_string();
    }

    let scientific = format!("{:.14e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if !(-9..15).contains(&exponent) {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}E{}{:02}", mantissa, sign, exponent.abs());
    }

    scientific
        .parse::<f64>()
        .map(|rounded| rounded.to_string())
        .unwrap_or_else(|_| value.to_string())
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
                CellValue::String(s.clone())
            }
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => {
                if dt.is_duration() {
                    return CellValue::Duration(dt.as_f64());
                }
                match dt.as_datetime() {
                    Some(value) => CellValue::DateTime(value),
                    None => CellValue::Duration(dt.as_f64()),
                }
            }
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

/// Represents a row of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Row index (0-based, row 1 of the sheet is 0)
    pub index: u32,
    /// Cells in this row
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Create a new row, dropping trailing empty cells
    pub fn new(index: u32, mut cells: Vec<CellValue>) -> Self {
        while cells.last().is_some_and(CellValue::is_empty) {
            cells.pop();
        }
        Row { index, cells }
    }

    /// Get cell at column index
    pub fn get(&self, col: usize) -> Option<&CellValue> {
        self.cells.get(col)
    }

    /// Get number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert row to vector of strings
    pub fn to_strings(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.as_string()).collect()
    }
}
