//! CLI-specific types.
//!
//! # Examples
//!
//! ```
//! use uigen_core::cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format, OutputFormat::Json);
//!
//! assert!(ExitCode::SUCCESS.is_success());
//! assert_eq!(ExitCode::TEMPLATE_MISSING.as_i32(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

/// CLI output format.
///
/// All formats carry the same information with different presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Plain text output for scripts
    Text,
    /// Pretty-printed output with colors for human reading
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            ))),
        }
    }
}

/// CLI exit code with semantic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// General error (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Invalid input: bad schema document, type expression or arguments
    /// (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// A skeleton template or asset is missing (exit code 3).
    pub const TEMPLATE_MISSING: Self = Self(3);

    /// Filesystem failure while writing the project (exit code 4).
    pub const IO_ERROR: Self = Self(4);

    /// Creates an exit code from an integer value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }

    /// Maps a generator error to the exit code reported for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::Error;
    /// use uigen_core::cli::ExitCode;
    ///
    /// let err = Error::TemplateNotFound { name: "index.html".to_string() };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::TEMPLATE_MISSING);
    /// ```
    #[must_use]
    pub const fn for_error(err: &crate::Error) -> Self {
        use crate::Error;
        match err {
            Error::InvalidArgument(_)
            | Error::TypeExpression { .. }
            | Error::DuplicateAttribute { .. }
            | Error::ValidationError { .. }
            | Error::ConfigError { .. } => Self::INVALID_INPUT,
            Error::TemplateNotFound { .. } => Self::TEMPLATE_MISSING,
            Error::Io(_) => Self::IO_ERROR,
            Error::RenderError { .. } | Error::SerializationError { .. } => Self::ERROR,
        }
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
