//! Selection of the worksheet to convert

use crate::error::{Result, Xlsx2CsvError};
use tracing::warn;

/// Decide which sheet a conversion run reads
///
/// An explicit, non-empty `requested` name is returned as is. Whether it
/// exists is only found out when its rows are fetched, which then reports
/// [`Xlsx2CsvError::SheetNotFound`].
///
/// Without a request the first sheet is used and a warning names it.
pub fn resolve_sheet(sheet_names: &[String], requested: Option<&str>) -> Result<String> {
    if let Some(name) = requested.filter(|name| !name.is_empty()) {
        return Ok(name.to_string());
    }

    let first = sheet_names.first().ok_or(Xlsx2CsvError::NoSheets)?;
    warn!("no sheet specified, using '{}'", first);
    Ok(first.clone())
}
