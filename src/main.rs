//! scripts2md - Render Python scripts and Jupyter notebooks as Markdown
//!
//! scripts2md provides:
//! - Recursive discovery of `.py` and `.ipynb` files
//! - Line-by-line Markdown rendering (comments, docstrings, code, blank lines)
//! - One flat `.md` file per input, named after its relative path
//! - A timestamped log file per run

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod config;
mod core;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let code = cli::run(cli)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
