//! CLI module - Command-line interface definitions and the run driver

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

use crate::backends::output::Output;
use crate::backends::scan::{gather, WalkSummary};
use crate::core::build_info::BuildInfo;
use crate::core::config::{Config, ExtensionSet};

/// gather-code - bundle source files of a directory tree into one fenced document.
#[derive(Parser, Debug)]
#[command(name = "gather-code")]
#[command(
    author,
    about,
    disable_version_flag = true,
    long_about = r#"gather-code walks INPUT_PATH in sorted order and writes every file whose
extension is selected as a block:

    File: <path>
    ```
    <file contents, unmodified>
    ```
    -------------

Examples:
    gather-code -i src
    gather-code -i . -e rs,toml -o bundle.txt
    gather-code -i docs -e "" --debug
"#
)]
pub struct Cli {
    /// Path to traverse for code files (required).
    #[arg(
        short = 'i',
        long = "input-path",
        value_name = "PATH",
        long_help = "Root directory (or single file) to traverse. Required.\n\n\
Paths in the output are shown exactly as traversed from this value."
    )]
    pub input_path: Option<OsString>,

    /// Output file path (default is standard output).
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        long_help = "Write the bundle to FILE instead of standard output.\n\n\
The file is created, or truncated if it already exists."
    )]
    pub output_file: Option<OsString>,

    /// Comma-separated list of file extensions to include.
    #[arg(
        short = 'e',
        long,
        default_value = "go",
        value_name = "EXTS",
        long_help = "Comma-separated list of file extensions to include, without dots.\n\n\
Matching is exact and case-insensitive. An empty value (-e \"\") includes every file."
    )]
    pub extensions: String,

    /// Print version information and exit.
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Print per-file filter decisions to stderr.
    #[arg(
        long,
        long_help = "Trace every visited file on stderr: its computed extension, its path and\n\
the Include/Skip decision. Selection is not affected."
    )]
    pub debug: bool,
}

/// What `main` should do after argument parsing
#[derive(Debug)]
pub enum Outcome {
    /// Walk with this configuration
    Run(Config),
    /// Print the rendered version block and exit successfully
    Version(String),
    /// Report this message plus usage and exit with failure
    Usage(String),
}

impl Cli {
    /// Turn parsed flags into an [`Outcome`]. `--version` wins over everything.
    pub fn resolve(self, build: &BuildInfo) -> Outcome {
        if self.version {
            return Outcome::Version(build.render());
        }

        let input_path = match self.input_path {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => return Outcome::Usage("input-path is required".to_string()),
        };

        Outcome::Run(Config {
            input_path,
            output: self
                .output_file
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            extensions: ExtensionSet::parse(&self.extensions),
            debug: self.debug,
        })
    }
}

/// Open the destination, walk, and close the destination
pub fn run(config: &Config) -> Result<WalkSummary> {
    debug!("Extensions: {}", config.extensions);

    let mut output = Output::open(config.output.as_deref())?;
    let summary = gather(config, &mut output).context("failed to traverse input path")?;
    output.finish().context("failed to close output")?;

    Ok(summary)
}
