// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the shim runtime
//!
//! The installed stubs never throw into scripts. These errors only describe
//! failures on the host side: evaluating a script, binding a global, reading
//! a script file or rejecting a configuration.

use thiserror::Error;

/// Result type alias for shim operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the shim runtime
#[derive(Error, Debug)]
pub enum Error {
    /// Script evaluation threw
    #[error("JavaScript error: {message}")]
    JavaScript {
        message: String,
        script: Option<String>,
    },

    /// The engine refused to bind a global identifier
    #[error("Failed to install '{binding}': {reason}")]
    Install { binding: String, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new JavaScript error
    pub fn js<S: Into<String>>(msg: S) -> Self {
        Error::JavaScript {
            message: msg.into(),
            script: None,
        }
    }

    /// Create an install error for a global binding
    pub fn install(binding: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::Install {
            binding: binding.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if a script threw
    pub fn is_script_error(&self) -> bool {
        matches!(self, Error::JavaScript { .. })
    }

    /// Check if a global binding failed
    pub fn is_install_error(&self) -> bool {
        matches!(self, Error::Install { .. })
    }

    /// Script name, if the error came from a named script
    pub fn script(&self) -> Option<&str> {
        match self {
            Error::JavaScript {
                script: Some(s), ..
            } => Some(s),
            _ => None,
        }
    }

    /// Attach a script name to a JavaScript error
    pub fn with_script_name(mut self, name: impl Into<String>) -> Self {
        if let Error::JavaScript { ref mut script, .. } = self {
            *script = Some(name.into());
        }
        self
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add the originating script to a JavaScript error
    fn with_script(self, script: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn with_script(self, script: &str) -> Result<T> {
        self.map_err(|e| e.into().with_script_name(script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_name_attached() {
        let result: std::result::Result<(), Error> = Err(Error::js("ReferenceError: x"));
        let err = result.with_script("main.js").unwrap_err();

        assert!(err.is_script_error());
        assert_eq!(err.script(), Some("main.js"));
    }

    #[test]
    fn test_script_name_ignored_for_other_errors() {
        let err = Error::install("document", "not configurable").with_script_name("main.js");

        assert!(err.is_install_error());
        assert_eq!(err.script(), None);
        assert_eq!(
            err.to_string(),
            "Failed to install 'document': not configurable"
        );
    }

    #[test]
    fn test_serialization_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
