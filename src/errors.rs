/*!
 * Error types for the subshift application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur during subtitle processing
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubtitleError {
    /// A timecode string does not match `HH:MM:SS,mmm` or has
    /// out-of-range components
    #[error("Malformed timecode: '{timecode}'")]
    MalformedTimecode {
        /// The offending timecode text
        timecode: String,
    },

    /// A chunk is structurally invalid: too few lines, or a time-range
    /// line without exactly one ` --> ` separator
    #[error("Malformed subtitle entry: {reason}")]
    MalformedEntry {
        /// What was wrong with the chunk
        reason: String,
    },

    /// The chunk sequence or parsed-entry sequence was empty where a
    /// stage requires at least one entry
    #[error("No subtitle entries found in input")]
    EmptyInput,

    /// A duration went below zero and cannot be encoded as a timecode.
    /// Policy: reject rather than emit a sign-prefixed or wrapped timecode.
    #[error("Duration of {ms}ms is negative and cannot be encoded as a timecode")]
    NegativeDuration {
        /// The negative value, in milliseconds
        ms: i64,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

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
