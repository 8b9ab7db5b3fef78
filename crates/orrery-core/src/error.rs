use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A catalog file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog data is not valid JSON or does not match the record shape.
    #[error("invalid catalog data: {0}")]
    Json(#[from] serde_json::Error),

    /// Two bodies share the same name.
    #[error("body already exists: \"{0}\"")]
    DuplicateName(String),

    /// A body has an empty name.
    #[error("body at position {0} has an empty name")]
    EmptyName(usize),

    /// A body's size is zero, negative, or not a finite number.
    #[error("body \"{name}\" has invalid size {size} (must be a positive number)")]
    InvalidSize {
        /// The offending body.
        name: String,
        /// The size that was rejected.
        size: f64,
    },

    /// A color string could not be parsed as a hex RGB value.
    #[error("invalid color \"{0}\" (expected a hex value such as #EFEFEF)")]
    InvalidTint(String),

    /// A kind or render mode string is not one of the recognised values.
    #[error("unknown {field} \"{value}\" (expected one of: {expected})")]
    UnknownVariant {
        /// Which attribute was being parsed.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted values.
        expected: String,
    },
}
