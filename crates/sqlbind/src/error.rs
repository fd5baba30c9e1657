//! Error types for sqlbind

use thiserror::Error;

/// Result type alias for sqlbind operations
pub type BindResult<T> = Result<T, BindError>;

/// Errors raised while rendering fragments or materializing parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// A value could not be written inline as a SQL literal.
    #[error("Invalid type: {type_name} cannot be inlined as a SQL literal")]
    UnsupportedLiteral { type_name: &'static str },

    /// An integer does not fit the 64-bit parameter range.
    #[error("Integer {value} ({type_name}) does not fit in a 64-bit signed parameter")]
    OutOfRange {
        type_name: &'static str,
        value: String,
    },

    /// Malformed `{}` template.
    #[error("Template error in '{template}': {message}")]
    Template { template: String, message: String },

    /// Number of `{}` holes differs from the number of values.
    #[error("Template '{template}' has {holes} placeholder(s) but {values} value(s) were given")]
    Arity {
        template: String,
        holes: usize,
        values: usize,
    },

    /// A VALUES row does not have the same columns as the first row.
    #[error("Row {row} does not match the column list: {message}")]
    RowShape { row: usize, message: String },

    /// Parameters were materialized in the wrong shape.
    #[error("Expected {expected} parameters, found {actual}")]
    StyleMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),
}

impl BindError {
    /// Create a template error
    pub fn template(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create a row shape error
    pub fn row_shape(row: usize, message: impl Into<String>) -> Self {
        Self::RowShape {
            row,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an unsupported literal error
    pub fn is_unsupported_literal(&self) -> bool {
        matches!(self, Self::UnsupportedLiteral { .. })
    }

    /// Check if this error was caused by a malformed template or arity mismatch
    pub fn is_template(&self) -> bool {
        matches!(self, Self::Template { .. } | Self::Arity { .. })
    }
}
