//! Signal provider errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while obtaining a raw signal grid.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Signal '{signal}' has {actual} samples, expected {expected} ({rows}x{cols})")]
    ShapeMismatch {
        signal: String,
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Provider grid is {actual_rows}x{actual_cols}, configured shape is {rows}x{cols}")]
    UnexpectedShape {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("Empty grid: {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("Grid {rows}x{cols} has more cells than can be addressed")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("Failed to set up {what}: {message}")]
    Generator { what: String, message: String },

    #[error("Failed to read provider input {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to decode provider input {path}: {message}")]
    Decode { path: String, message: String },
}

impl ErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. }
            | Self::UnexpectedShape { .. }
            | Self::EmptyGrid { .. }
            | Self::GridTooLarge { .. } => error_code::SHAPE_MISMATCH,
            Self::Io { .. } | Self::Decode { .. } | Self::Generator { .. } => {
                error_code::PROVIDER_ERROR
            }
        }
    }
}
