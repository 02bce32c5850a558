//! Patcov CLI entry point.
//!
//! Parses arguments, initializes logging, dispatches to the command handler,
//! and maps errors to exit codes.

use patcov::cli::{Cli, LogFormatArg};
use patcov::commands;
use patcov::exit_codes;
use patcov::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_logging(
        &LogConfig::from_verbosity(cli.verbose)
            .with_format(format)
            .with_ansi(io::stderr().is_terminal()),
    );

    match commands::dispatch(cli.command, cli.config.as_deref()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Reports end with a newline already.
            eprintln!("Error: {}", err.to_string().trim_end());
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
