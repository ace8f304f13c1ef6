//! Line classifier
//!
//! Maps one source line to a Markdown fragment. Classification is line-local:
//! there is no "inside docstring" state, so only the lines that start with the
//! triple quotes are bolded and the lines between them render as code.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::ScriptKind;

/// Marker of an inline base64 payload in a notebook cell
pub const BASE64_MARKER: &str = ";base64,";

/// Matches the `(data:image...)` target of a Markdown image
pub static DATA_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(data:image([^)]+)\)").expect("Invalid DATA_IMAGE_RE regex"));

/// Render a single line into its Markdown fragment.
///
/// The line is trimmed before classification. Embedded images are only
/// recognized for [`ScriptKind::Notebook`] lines; their data payload is
/// replaced by a newline and nothing else is appended.
pub fn render_line(line: &str, kind: ScriptKind) -> String {
    let line = line.trim();

    if kind == ScriptKind::Notebook && line.contains(BASE64_MARKER) {
        return DATA_IMAGE_RE.replace_all(line, "\n").into_owned();
    }

    if line.starts_with('#') {
        format!("*  {}\n", line)
    } else if line.starts_with(r#"""""#) {
        format!("**  {}**\n", line)
    } else if line.is_empty() {
        "\n".to_string()
    } else {
        format!("  {}\n", line)
    }
}

/// Render a sequence of lines and concatenate the fragments
pub fn render_lines<'a, I>(lines: I, kind: ScriptKind) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(&render_line(line, kind));
    }
    out
}
