//! Unified error types for the adapter
//!
//! All errors flow through this module for consistent handling. Collaborator
//! failures keep their original message; the adapter only tags the phase
//! they were raised in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all adapter operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl AdapterError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn verification_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::VerificationFailed, msg)
    }

    pub fn signing_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::SigningFailed, msg)
    }

    pub fn collaborator(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::CollaboratorError, msg)
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for AdapterError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Local validation, raised before any delegation
    InvalidInput,

    // Collaborator phases
    VerificationFailed,
    SigningFailed,
    CollaboratorError,
}

/// Result type alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
