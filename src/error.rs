//! Error types for the Faculty Qualification Evaluation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during qualification evaluation.
//!
//! Normal edge cases (missing degree year, zero exemptions, empty record
//! sets) are valid states with deterministic outputs and are never errors.

use thiserror::Error;

/// The main error type for the Faculty Qualification Evaluation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use qualification_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Policy configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A faculty category has no base requirements in the loaded policy.
    #[error("No base requirements configured for category '{category}'")]
    CategoryNotConfigured {
        /// The category that was not found in the requirements config.
        category: String,
    },

    /// An evaluation window was inverted (start year after end year).
    #[error("Invalid evaluation window: {year_from} to {year_to}")]
    InvalidWindow {
        /// The first year of the window (inclusive).
        year_from: i32,
        /// The last year of the window (inclusive).
        year_to: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
