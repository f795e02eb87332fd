// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for htmltree
//!
//! Structural and parse errors carry an optional source label (usually a
//! file path) so batch audits can report which document failed.

use std::collections::BTreeSet;

use thiserror::Error;

/// Result type alias for htmltree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for htmltree
#[derive(Error, Debug)]
pub enum Error {
    /// HTML parsing failed
    #[error("HTML parsing error{}: {message}", fmt_label(.label))]
    Parse {
        message: String,
        label: Option<String>,
    },

    /// Wrong number of top-level nodes where exactly one is required
    #[error("expected a single top-level element{}, found {count} top-level node(s)", fmt_label(.label))]
    Structure { count: usize, label: Option<String> },

    /// Zero or several elements where exactly one is required
    #[error("expected exactly one <{tag}> element{}, found {count}", fmt_label(.label))]
    MissingElement {
        tag: String,
        count: usize,
        label: Option<String>,
    },

    /// Attribute validation failed
    #[error("Attribute validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error
    #[error("I/O error{}: {source}", fmt_label(.label))]
    Io {
        #[source]
        source: std::io::Error,
        label: Option<String>,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Attribute validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate attribute '{0}'")]
    DuplicateAttribute(String),

    #[error("missing required attributes: {}", fmt_set(.0))]
    MissingAttributes(BTreeSet<String>),

    #[error("unexpected attributes: {}", fmt_set(.0))]
    UnexpectedAttributes(BTreeSet<String>),
}

fn fmt_label(label: &Option<String>) -> String {
    match label {
        Some(l) => format!(" in {}", l),
        None => String::new(),
    }
}

fn fmt_set(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

impl Error {
    /// Create a new parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse {
            message: msg.into(),
            label: None,
        }
    }

    /// Create a structure error
    pub fn structure(count: usize, label: Option<&str>) -> Self {
        Error::Structure {
            count,
            label: label.map(String::from),
        }
    }

    /// Create a missing element error
    pub fn missing_element(tag: impl Into<String>, count: usize, label: Option<&str>) -> Self {
        Error::MissingElement {
            tag: tag.into(),
            count,
            label: label.map(String::from),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a document structure error
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::Structure { .. } | Error::MissingElement { .. })
    }

    /// Get the source label if available
    pub fn label(&self) -> Option<&str> {
        match self {
            Error::Parse { label, .. }
            | Error::Structure { label, .. }
            | Error::MissingElement { label, .. }
            | Error::Io { label, .. } => label.as_deref(),
            _ => None,
        }
    }

    /// Attach a source label, keeping any label already present
    pub fn with_label(mut self, source: &str) -> Self {
        match self {
            Error::Parse { ref mut label, .. }
            | Error::Structure { ref mut label, .. }
            | Error::MissingElement { ref mut label, .. }
            | Error::Io { ref mut label, .. } => {
                if label.is_none() {
                    *label = Some(source.to_string());
                }
            }
            _ => {}
        }
        self
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            source,
            label: None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add source label context to error
    fn with_label(self, label: &str) -> Result<T>;

    /// Add operation context to error
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn with_label(self, label: &str) -> Result<T> {
        self.map_err(|e| {
            let err: Error = e.into();
            err.with_label(label)
        })
    }

    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err: Error = e.into();
            Error::Other(format!("{}: {}", msg, err))
        })
    }
}
