//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The document violates the API description dialect.
    #[error("schema violation: {0}")]
    Violation(#[from] rpcgen_schema::SchemaViolation),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scalar name with no override and no declaration (strict mode only).
    #[error("unmapped type '{type_name}'")]
    UnmappedType {
        /// Type name.
        type_name: String,
    },

    /// Schema name that cannot be emitted as a Rust identifier.
    #[error("'{name}' in {context} is not a valid identifier")]
    InvalidIdentifier {
        /// Offending name.
        name: String,
        /// Where the name is used.
        context: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
