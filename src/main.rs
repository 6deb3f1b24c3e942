use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xlsx2csv::{cli, convert};

/// Environment variable holding the log filter (EnvFilter syntax)
const LOG_ENV: &str = "XLSX2CSV_LOG";

fn main() -> ExitCode {
    init_logging();

    let config = match cli::parse_from(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => {
            // clap prints help/version to stdout and errors to stderr
            let _ = err.print();
            return ExitCode::from(cli::usage_exit_code(&err) as u8);
        }
    };

    match convert::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
