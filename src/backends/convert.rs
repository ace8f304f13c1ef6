//! Script to Markdown conversion
//!
//! `convert_script` turns one input into one `.md` file; `convert_all` drives
//! it over everything the finder returns.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::scan::scan_scripts;
use crate::core::model::{ConvertError, ConvertReport, ScriptKind};
use crate::core::notebook::Notebook;
use crate::core::paths::{make_relative, output_path};
use crate::core::render::render_lines;

/// Marker printed once the run has finished
pub const DONE_MARKER: &str = "\nDone.";

/// Read `script` and render it as Markdown
pub fn render_script(script: &Path, kind: ScriptKind) -> Result<String, ConvertError> {
    let text = fs::read_to_string(script).map_err(|source| ConvertError::Read {
        path: script.to_path_buf(),
        source,
    })?;

    match kind {
        ScriptKind::Script => Ok(render_lines(text.lines(), kind)),
        ScriptKind::Notebook => {
            let notebook = Notebook::from_json(&text).map_err(|source| ConvertError::Notebook {
                path: script.to_path_buf(),
                source,
            })?;
            Ok(render_lines(notebook.lines(), kind))
        }
    }
}

/// Convert one script or notebook into `<destination_root>/<derived>.md`.
///
/// A failure to create the destination directory is logged and the write is
/// still attempted. Read and write failures are logged and returned; nothing
/// is written when the input cannot be read.
pub fn convert_script(
    script: &Path,
    source_root: &Path,
    destination_root: &Path,
) -> Result<PathBuf, ConvertError> {
    let result = try_convert(script, source_root, destination_root);
    match &result {
        Ok(_) => {
            let name = make_relative(script, source_root)
                .unwrap_or_else(|| script.display().to_string());
            tracing::info!("{} successfully converted.", name);
        }
        Err(err) if err.is_not_found() => {
            tracing::error!("File not found at {}", script.display());
        }
        Err(err) => tracing::error!("{}", err),
    }
    result
}

fn try_convert(
    script: &Path,
    source_root: &Path,
    destination_root: &Path,
) -> Result<PathBuf, ConvertError> {
    if let Err(source) = ensure_destination(destination_root) {
        let err = ConvertError::CreateDir {
            path: destination_root.to_path_buf(),
            source,
        };
        tracing::error!("{}", err);
    }

    let kind = ScriptKind::from_path(script).ok_or_else(|| ConvertError::UnsupportedKind {
        path: script.to_path_buf(),
    })?;

    let content = render_script(script, kind)?;

    let output = output_path(script, source_root, destination_root);
    fs::write(&output, content).map_err(|source| ConvertError::Write {
        path: output.clone(),
        source,
    })?;

    Ok(output)
}

fn ensure_destination(destination_root: &Path) -> std::io::Result<()> {
    if !destination_root.exists() {
        fs::create_dir_all(destination_root)?;
    }
    Ok(())
}

/// Convert every script found under `source_root`, sequentially.
///
/// A traversal failure is logged and treated as an empty tree.
pub fn convert_all(source_root: &Path, destination_root: &Path) -> ConvertReport {
    let scripts = scan_scripts(source_root).unwrap_or_else(|err| {
        tracing::error!("An error occurred while searching scripts: {}", err);
        Vec::new()
    });

    let mut report = ConvertReport::new();
    for script in scripts {
        let outcome = convert_script(&script, source_root, destination_root);
        report.record(script, outcome);
    }
    report
}

/// Run the conversion and print the completion marker
pub fn run_convert(source_root: &Path, destination_root: &Path) -> Result<ConvertReport> {
    tracing::info!(
        "Converting scripts from {:?} into {:?}",
        source_root,
        destination_root
    );

    let report = convert_all(source_root, destination_root);

    if report.has_failures() {
        tracing::warn!(
            "{} of {} scripts failed to convert",
            report.failures.len(),
            report.attempted()
        );
    }
    tracing::info!(
        "Run finished: {} converted, {} failed",
        report.converted.len(),
        report.failures.len()
    );

    println!("{}", DONE_MARKER);
    Ok(report)
}
