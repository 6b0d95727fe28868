//! Structured error types shared across the hashing crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable code attached to every missing-comparer rejection.
pub const MISSING_COMPARER: &str = "H001";

/// Diagnostic payload carried by [`HashingError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Offending operation, parameter or value, keyed by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
}

impl ErrorInfo {
    /// Creates a payload without context.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Records `key=value` in the context.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

/// Canonical error type for the hashing crates.
///
/// Absent sequences and absent elements are valid input everywhere; the only
/// failure is a caller explicitly handing in no comparer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail", rename_all = "snake_case")]
pub enum HashingError {
    /// A required argument was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut separator = " (";
        for (key, value) in &self.context {
            write!(f, "{separator}{key}={value}")?;
            separator = ", ";
        }
        if !self.context.is_empty() {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl HashingError {
    /// Builds the rejection raised when `operation` receives no comparer.
    pub fn missing_comparer(operation: &str) -> Self {
        HashingError::InvalidArgument(
            ErrorInfo::new(MISSING_COMPARER, "equality comparer must be supplied")
                .with_context("operation", operation)
                .with_context("parameter", "comparer"),
        )
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            HashingError::InvalidArgument(info) => info,
        }
    }
}
