//! gather-code - concatenate matching files of a directory tree into one bundle
//!
//! Every selected file is written as a `File: <path>` header followed by its
//! fenced contents and a separator line, to stdout or to `--output-file`.

use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

mod backends;
mod cli;
mod core;

use crate::cli::{Cli, Outcome};
use crate::core::build_info::BuildInfo;

fn report_error(message: impl Display) {
    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
    eprintln!("{} {}", "Error:".red().bold(), message);
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.resolve(&BuildInfo::current()) {
        Outcome::Version(block) => {
            print!("{}", block);
            ExitCode::SUCCESS
        }
        Outcome::Usage(message) => {
            report_error(message);
            eprintln!("{}", Cli::command().render_help());
            ExitCode::FAILURE
        }
        Outcome::Run(config) => {
            crate::core::logging::init(config.debug);
            match cli::run(&config) {
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    report_error(format!("{:#}", err));
                    ExitCode::FAILURE
                }
            }
        }
    }
}
