//! Shared data model
//!
//! Script kinds, the per-run conversion report and the error types produced by
//! the finder and the converter.

use std::path::{Path, PathBuf};

/// Extension of plain Python scripts
pub const SCRIPT_EXTENSION: &str = "py";

/// Extension of Jupyter notebooks
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// The kind of input file being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// A plain `.py` source file, read as UTF-8 text
    Script,
    /// A `.ipynb` notebook, read as a JSON document of cells
    Notebook,
}

impl ScriptKind {
    /// Resolve the kind from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(SCRIPT_EXTENSION) => Some(ScriptKind::Script),
            Some(NOTEBOOK_EXTENSION) => Some(ScriptKind::Notebook),
            _ => None,
        }
    }
}

/// Errors raised while walking the source tree
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to traverse {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Errors raised while converting a single input file
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{path} is not a .py or .ipynb file")]
    UnsupportedKind { path: PathBuf },

    #[error("failed to create folder {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed notebook {path}: {source}")]
    Notebook {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error writing to file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// True when the input file itself does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConvertError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Outcome of a full conversion run
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Output files written, in processing order
    pub converted: Vec<PathBuf>,

    /// Inputs that failed, with the reason
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl ConvertReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of converting `input`
    pub fn record(&mut self, input: PathBuf, outcome: Result<PathBuf, ConvertError>) {
        match outcome {
            Ok(output) => self.converted.push(output),
            Err(err) => self.failures.push((input, err)),
        }
    }

    /// Total number of inputs attempted
    pub fn attempted(&self) -> usize {
        self.converted.len() + self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
