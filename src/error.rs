//! Error model shared by every pipeline stage.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::QuestionCategory;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Everything that can abort the pipeline.
///
/// Data errors come from the input record, validation errors from the fixed
/// template tables, and I/O errors from writing documents. None of them are
/// retried.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// The record is not a JSON object.
    #[error("product record must be a JSON object")]
    InvalidRecord,

    /// A required key is absent from the record.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A key is present but holds a value of the wrong shape.
    #[error("field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("expected at least {required} questions, generated {found}")]
    TooFewQuestions { found: usize, required: usize },

    #[error("expected at least {required} {category} questions, generated {found}")]
    CategoryCoverage {
        category: QuestionCategory,
        found: usize,
        required: usize,
    },

    #[error("FAQ requires at least {required} Q&A items, got {found}")]
    TooFewFaqItems { found: usize, required: usize },

    #[error("failed to serialise page: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ForgeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
