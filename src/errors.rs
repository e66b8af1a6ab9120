/*!
 * Error types for the bisplit application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing or re-segmenting subtitle tracks
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A timestamp field does not match the `HH:MM:SS,mmm` pattern
    #[error("Malformed timestamp '{0}'")]
    MalformedTimestamp(String),

    /// A subtitle block violates the wire grammar
    #[error("Malformed subtitle block at line {line}: {reason}")]
    MalformedBlock {
        /// 1-based line number where the block broke
        line: usize,
        /// What was wrong with the block
        reason: String,
    },

    /// The two tracks carry differing entry counts under the strict pairing policy
    #[error("Track length mismatch: translated track has {translated_len} entries, source track has {source_len}")]
    TrackLengthMismatch {
        /// Entry count of the translated track
        translated_len: usize,
        /// Entry count of the source track
        source_len: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle parsing or re-segmentation
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from configuration loading or validation
    #[error("Config error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
