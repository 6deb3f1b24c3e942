//! Command-line arguments

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

/// Convert an XLSX worksheet to CSV
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "xlsx2csv", version, about, long_about = None)]
pub struct Config {
    /// List sheets
    #[arg(short = 'l', long = "list-sheets")]
    pub list_sheets: bool,

    /// Sheet to convert (default: first sheet)
    #[arg(short = 's', long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Input XLSX file (default: stdin)
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<String>,

    /// Output CSV file (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,
}

impl Config {
    /// Requested sheet, if one was given
    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref().filter(|s| !s.is_empty())
    }

    /// Input path; `None` means standard input
    pub fn input(&self) -> Option<&Path> {
        non_empty(self.input.as_deref())
    }

    /// Output path; `None` means standard output
    pub fn output(&self) -> Option<&Path> {
        non_empty(self.output.as_deref())
    }
}

fn non_empty(path: Option<&str>) -> Option<&Path> {
    path.filter(|p| !p.is_empty()).map(Path::new)
}

/// Process exit status for an argument parsing failure
///
/// Help and version requests are successes; every other parse error is 1.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

/// Parse a full argument list (program name first)
pub fn parse_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Config::try_parse_from(args)
}
