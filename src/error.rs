//! Error types for the Bill Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself is pure and infallible; errors arise only
//! around it, when loading tax configuration or when mutating the roster's
//! pairing table.

use thiserror::Error;

/// The main error type for the Bill Settlement Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use bill_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A roster operation referenced a person id that does not exist.
    #[error("Person not found: {id}")]
    PersonNotFound {
        /// The person id that was not found.
        id: String,
    },

    /// A person with this id is already on the roster.
    #[error("Person already on the roster: {id}")]
    DuplicatePerson {
        /// The duplicated person id.
        id: String,
    },

    /// A pairing operation targeted a person who already has a partner.
    #[error("Person '{id}' is already paired")]
    AlreadyPaired {
        /// The id of the person who already has a partner.
        id: String,
    },

    /// A pairing operation tried to link a person to themselves.
    #[error("Person '{id}' cannot be paired with themselves")]
    SelfPairing {
        /// The id used on both sides of the pairing.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
