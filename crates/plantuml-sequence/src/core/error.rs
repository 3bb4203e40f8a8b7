//! Core error types for diagram construction
//!
//! Every builder operation validates its arguments before writing, so a
//! returned error always means nothing was emitted for that call.

use thiserror::Error;

/// Errors raised while building a sequence diagram
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Participant with alias '{alias}' already exists")]
    DuplicateParticipant { alias: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid {kind} '{value}'")]
    InvalidEnumeration { kind: &'static str, value: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SequenceError {
    /// Create a new duplicate participant error
    pub fn duplicate_participant(alias: impl Into<String>) -> Self {
        Self::DuplicateParticipant {
            alias: alias.into(),
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a new invalid enumeration error
    pub fn invalid_enumeration(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumeration {
            kind,
            value: value.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SequenceError>;
