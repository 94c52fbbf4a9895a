//! Error types for UI scaffold generation.
//!
//! A single error hierarchy is shared by the introspection, transform and
//! generation layers so that failures propagate to the top-level caller
//! without re-wrapping.
//!
//! Note that an unresolvable field type is *not* an error: the transform
//! skips such fields silently. Only the failures listed here abort a run.
//!
//! # Examples
//!
//! ```
//! use uigen_core::{Error, Result};
//!
//! fn require_union(members: usize) -> Result<()> {
//!     if members < 2 {
//!         return Err(Error::InvalidArgument("not a union type".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_union(1).unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```

use thiserror::Error;

/// Main error type for UI scaffold generation.
///
/// All errors in the workspace use this type, providing consistent error
/// handling across all crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument error.
    ///
    /// Raised when a type predicate expecting a union receives a non-union,
    /// or when an optional type cannot be unwrapped to exactly one member.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A type expression in a schema document could not be parsed.
    #[error("Invalid type expression '{expression}': {reason}")]
    TypeExpression {
        /// The offending expression as written
        expression: String,
        /// What went wrong while parsing it
        reason: String,
    },

    /// An attribute name occurs twice within one model.
    #[error("Duplicate attribute '{attr}' in model '{model}'")]
    DuplicateAttribute {
        /// Model being assembled
        model: String,
        /// Attribute name that was already present
        attr: String,
    },

    /// Validation error for domain values.
    ///
    /// Raised when a descriptor, section or document violates a structural
    /// rule (empty names, unknown model references, and so on).
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Configuration error.
    ///
    /// Raised when generator configuration is invalid or cannot be parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// A template or static skeleton asset does not exist in the source set.
    ///
    /// Kept apart from [`Error::Io`] so callers can report a missing
    /// skeleton asset clearly.
    #[error("Template not found: {name}")]
    TemplateNotFound {
        /// Name of the missing resource, relative to the skeleton root
        name: String,
    },

    /// A template exists but failed to compile or render.
    #[error("Failed to render template '{template}': {message}")]
    RenderError {
        /// Template name
        template: String,
        /// Renderer diagnostic
        message: String,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when JSON conversion of a model or render context fails.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Filesystem failure during copy, write or delete.
    ///
    /// The OS error is passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this is an invalid argument error.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::Error;
    ///
    /// let err = Error::InvalidArgument("str is not a union".to_string());
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is a type expression parse error.
    #[must_use]
    pub const fn is_type_expression_error(&self) -> bool {
        matches!(self, Self::TypeExpression { .. })
    }

    /// Returns `true` if this is a duplicate attribute error.
    #[must_use]
    pub const fn is_duplicate_attribute(&self) -> bool {
        matches!(self, Self::DuplicateAttribute { .. })
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "section".to_string(),
    ///     reason: "unknown model".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if a template or skeleton asset was missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigen_core::Error;
    ///
    /// let err = Error::TemplateNotFound {
    ///     name: "src/App.vue".to_string(),
    /// };
    /// assert!(err.is_template_not_found());
    /// assert!(!err.is_io_error());
    /// ```
    #[must_use]
    pub const fn is_template_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. })
    }

    /// Returns `true` if this is a template rendering error.
    #[must_use]
    pub const fn is_render_error(&self) -> bool {
        matches!(self, Self::RenderError { .. })
    }

    /// Returns `true` if this is a filesystem error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for generator operations.
///
/// # Examples
///
/// ```
/// use uigen_core::{Error, Result};
///
/// fn non_empty(name: &str) -> Result<&str> {
///     if name.is_empty() {
///         return Err(Error::ValidationError {
///             field: "name".to_string(),
///             reason: "must not be empty".to_string(),
///         });
///     }
///     Ok(name)
/// }
///
/// assert!(non_empty("Message").is_ok());
/// assert!(non_empty("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_detection() {
        let err = Error::InvalidArgument("not a union".to_string());
        assert!(err.is_invalid_argument());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_template_not_found_is_not_io() {
        let err = Error::TemplateNotFound {
            name: "index.html".to_string(),
        };
        assert!(err.is_template_not_found());
        assert!(!err.is_io_error());
        assert!(err.to_string().contains("index.html"));
    }

    #[test]
    fn test_io_error_passes_through() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io);
        assert!(err.is_io_error());
        assert_eq!(err.to_string(), "denied");

        if let Error::Io(inner) = err {
            assert_eq!(inner.kind(), std::io::ErrorKind::PermissionDenied);
        } else {
            panic!("expected Io variant");
        }
    }

    #[test]
    fn test_duplicate_attribute_display() {
        let err = Error::DuplicateAttribute {
            model: "Message".to_string(),
            attr: "phone".to_string(),
        };
        assert!(err.is_duplicate_attribute());
        let display = format!("{err}");
        assert!(display.contains("phone"));
        assert!(display.contains("Message"));
    }

    #[test]
    fn test_type_expression_display() {
        let err = Error::TypeExpression {
            expression: "Optional[".to_string(),
            reason: "unexpected end of input".to_string(),
        };
        assert!(err.is_type_expression_error());
        assert!(err.to_string().contains("Optional["));
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err = Error::from(parse.unwrap_err());
        assert!(matches!(err, Error::SerializationError { source: Some(_), .. }));
    }

    #[test]
    fn test_result_alias() {
        #[allow(clippy::unnecessary_wraps)]
        fn returns_ok() -> Result<u8> {
            Ok(7)
        }
        assert_eq!(returns_ok().unwrap(), 7);
    }
}
