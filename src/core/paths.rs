//! Path utilities
//!
//! Derives the flat output file name of a converted script from its location
//! under the source root.

use std::path::{Component, Path, PathBuf};

use crate::core::model::ScriptKind;

/// Joiner that replaces directory separators in derived names
pub const JOINER: char = '+';

/// Stem used when a path has no usable name at all
pub const FALLBACK_STEM: &str = "untitled";

/// Extension of rendered output files
pub const OUTPUT_EXTENSION: &str = "md";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Derive the output stem for `script` under `source_root`.
///
/// The source-root prefix and the `.py`/`.ipynb` extension are stripped, the
/// remaining components are joined with `+` and any leading joiner trimmed:
/// `/src/a/b/c.py` under `/src` becomes `a+b+c`. A script outside the root
/// keeps its full path as the basis for the name. When nothing is left after
/// stripping, the script's own file stem is used, so the stem is never empty.
pub fn derived_stem(script: &Path, source_root: &Path) -> String {
    let relative = script.strip_prefix(source_root).unwrap_or(script);
    let relative = match ScriptKind::from_path(relative) {
        Some(_) => relative.with_extension(""),
        None => relative.to_path_buf(),
    };

    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let joined = parts.join(&JOINER.to_string());
    let stem = joined.trim_start_matches(JOINER);
    if !stem.is_empty() {
        return stem.to_string();
    }

    script
        .file_stem()
        .map(|name| name.to_string_lossy().trim_start_matches(JOINER).to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_STEM.to_string())
}

/// Full output path `<destination_root>/<derived>.md`
pub fn output_path(script: &Path, source_root: &Path, destination_root: &Path) -> PathBuf {
    let stem = derived_stem(script, source_root);
    destination_root.join(format!("{}.{}", stem, OUTPUT_EXTENSION))
}
