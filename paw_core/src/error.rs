//! Error types for the paw_core library.

use chrono::NaiveDate;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for paw_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Exercise score outside the 0..=4 scale
    #[error("Invalid exercise score {value} on {date}: expected 0-4")]
    InvalidExercise { date: NaiveDate, value: u8 },

    /// Stored check-in line is JSON but not a usable record
    #[error("Invalid check-in on line {line}: {reason}")]
    InvalidCheckin { line: usize, reason: String },

    /// Exercise label table lookup out of range
    #[error("No exercise label for score {0}")]
    ExerciseLabel(usize),

    /// Profile lookup came back empty
    #[error("Pet not found: {0}")]
    PetNotFound(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
