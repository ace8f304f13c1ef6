//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::backends::convert::run_convert;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::logging::init_logging;

/// Exit code when `--strict` is set and at least one conversion failed
pub const EXIT_CONVERSION_FAILED: i32 = 1;

/// scripts2md - creates .md files from Python scripts and notebooks.
#[derive(Parser, Debug)]
#[command(name = "scripts2md")]
#[command(
    author,
    version,
    about,
    long_about = r#"scripts2md walks SOURCE, finds every .py and .ipynb file (skipping folders
whose path contains "_docs"), and writes one Markdown file per input into
DESTINATION.

Rendering is line by line:
- comment lines become bullets ("*  # ...")
- lines starting with """ become bold
- blank lines are kept
- everything else is indented as code

Output names flatten the relative path with '+': SOURCE/a/b/c.py -> a+b+c.md.

Multi-line docstrings are not tracked: only the lines holding the triple
quotes are bolded, the lines between them render as code.

Examples:
    scripts2md -s ./project -d ./docs
    scripts2md --source-path src --destination-path out --config ci.yaml --strict
"#
)]
pub struct Cli {
    /// Path to the source folder.
    #[arg(
        short = 's',
        long = "source-path",
        visible_alias = "source_path",
        value_name = "SOURCE",
        required = true
    )]
    pub source_path: PathBuf,

    /// Path to the destination folder.
    #[arg(
        short = 'd',
        long = "destination-path",
        visible_alias = "destination_path",
        value_name = "DESTINATION",
        required = true
    )]
    pub destination_path: PathBuf,

    /// Path to the YAML config file.
    #[arg(
        short,
        long,
        env = "SCRIPTS2MD_CONFIG",
        default_value = DEFAULT_CONFIG_FILE,
        value_name = "FILE",
        long_help = "Path to the YAML config file (defaults to config.yaml in the working directory).\n\n\
The file must define `log_dir`, the folder that receives one log file per run."
    )]
    pub config: PathBuf,

    /// Exit with a non-zero status if any file failed to convert.
    #[arg(
        long,
        long_help = "Exit with status 1 when at least one input failed to convert.\n\n\
Without this flag failures are only recorded in the log file and the exit status is 0."
    )]
    pub strict: bool,
}

/// Run the CLI with parsed arguments, returning the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config: {:?}", cli.config))?;

    let log_file = init_logging(&config.log_dir)?;
    tracing::info!("Config file and logger setup completed.");
    tracing::debug!("Logging to {:?}", log_file);

    let report = run_convert(&cli.source_path, &cli.destination_path)?;

    if cli.strict && report.has_failures() {
        return Ok(EXIT_CONVERSION_FAILED);
    }
    Ok(0)
}
