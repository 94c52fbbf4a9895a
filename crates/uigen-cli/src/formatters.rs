//! Output formatters for CLI commands.
//!
//! Every command result is a serializable value rendered in one of three
//! modes: JSON for machines, indented plain text for scripts and logs, and
//! the same layout with colors for terminals.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use uigen_core::cli::OutputFormat;

/// Formats `data` according to `format`.
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use uigen_cli::formatters::format_output;
/// use uigen_core::cli::OutputFormat;
///
/// #[derive(Serialize)]
/// struct Summary {
///     files: usize,
/// }
///
/// let output = format_output(&Summary { files: 12 }, OutputFormat::Json)?;
/// assert!(output.contains("\"files\": 12"));
///
/// let output = format_output(&Summary { files: 12 }, OutputFormat::Text)?;
/// assert_eq!(output, "files: 12");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, outline};

    /// Formats data as indented `key: value` lines without colors.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(outline(&value, false))
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Result, Serialize, outline};

    /// Formats data as colorized, indented `key: value` lines.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(outline(&value, true))
    }
}

fn outline(value: &Value, color: bool) -> String {
    let mut lines = Vec::new();
    outline_into(&mut lines, value, 0, color);
    lines.join("\n")
}

fn outline_into(lines: &mut Vec<String>, value: &Value, depth: usize, color: bool) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, item) in map {
                let key = if color {
                    key.blue().bold().to_string()
                } else {
                    key.clone()
                };
                if is_scalar(item) {
                    lines.push(format!("{indent}{key}: {}", scalar(item, color)));
                } else if is_empty(item) {
                    lines.push(format!("{indent}{key}: {}", empty(item, color)));
                } else {
                    lines.push(format!("{indent}{key}:"));
                    outline_into(lines, item, depth + 1, color);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if is_scalar(item) || is_empty(item) {
                    let text = if is_scalar(item) {
                        scalar(item, color)
                    } else {
                        empty(item, color)
                    };
                    lines.push(format!("{indent}- {text}"));
                } else {
                    let mut nested = Vec::new();
                    outline_into(&mut nested, item, depth + 1, color);
                    // Hang the first nested line off the list marker
                    if let Some(first) = nested.first_mut() {
                        *first = format!("{indent}- {}", first.trim_start());
                    }
                    lines.extend(nested);
                }
            }
        }
        _ => lines.push(format!("{indent}{}", scalar(value, color))),
    }
}

const fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn empty(value: &Value, color: bool) -> String {
    let text = if value.is_array() { "[]" } else { "{}" };
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

fn scalar(value: &Value, color: bool) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if !color {
        return text;
    }
    match value {
        Value::Null => text.dimmed().to_string(),
        Value::Bool(_) => text.yellow().to_string(),
        Value::Number(_) => text.cyan().to_string(),
        _ => text.green().to_string(),
    }
}
