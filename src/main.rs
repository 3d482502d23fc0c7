use anyhow::Result;
use clap::{crate_name, CommandFactory, Parser};
use std::{env, process::ExitCode};

/// Drives validation or sanitization over the input names.
mod check;
use check::Summary;

/// Defines the commandline-interface and the context of the application.
mod cli;
use cli::Cli;

/// Owns the handles to standard output and standard error. Also concerned
/// with output colorization and buffering.
mod console;
use console::Console;

/// Contains iterator types that read candidate names from various sources.
mod input;

/// The EDS name-sanitization rules and path-length limit.
mod sanitize;

/// The validator abstraction mirroring the admin UI's validation registry,
/// along with the built-in field validators.
mod validator;

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_ok() {
        env_logger::init();
    }
    let mut console = Console::new();

    match run(&mut console) {
        Err(e) => {
            log::error!("{e:?}");
            let _ = console.write_err(&format!("{e:?}"));
            ExitCode::FAILURE
        }
        Ok(summary) if summary.violations > 0 => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
    }
}

fn run(console: &mut Console) -> Result<Summary> {
    if let Some(shell) = Cli::compute_shell_used_for_completions()? {
        clap_complete::generate(shell, &mut Cli::command(), crate_name!(), &mut console.stdout);
        return Ok(Summary::default());
    }
    let args = Cli::parse();

    if args.line_buffered {
        console.force_line_buffered();
    }
    check::run_checks(console, &args)
}
