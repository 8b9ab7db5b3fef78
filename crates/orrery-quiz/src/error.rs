//! Error types for the quiz engine.

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can stop a quiz from running.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Comparison mode needs two bodies to compare.
    #[error("comparison needs at least 2 bodies, the catalog has {len}")]
    EmptyCatalog {
        /// Number of bodies in the catalog.
        len: usize,
    },

    /// Identification mode needs a target and two distractors.
    #[error("identification needs at least 3 bodies, the catalog has {len}")]
    InsufficientCatalog {
        /// Number of bodies in the catalog.
        len: usize,
    },

    /// The catalog could not be loaded.
    #[error("{0}")]
    Catalog(#[from] orrery_core::CoreError),

    /// The progress store could not be read or written.
    #[error("progress store: {0}")]
    Store(String),
}
