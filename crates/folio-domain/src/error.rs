//! Error handling types

use crate::value_objects::ChapterId;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Folio
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A chapter or file that was asked for does not exist
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// The index lists chapters that are not in the chapter store
    #[error("Dangling reference: index lists missing chapter(s) {}", join_ids(.chapters))]
    DanglingReference {
        /// Every missing chapter id, in index order
        chapters: Vec<ChapterId>,
    },

    /// A file could not be interpreted
    #[error("Parse error in {}: {message}", .file.display())]
    Parse {
        /// File being parsed
        file: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },
}

fn join_ids(ids: &[ChapterId]) -> String {
    ids.iter()
        .map(ChapterId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a dangling reference error for the given chapter ids
    pub fn dangling(chapters: Vec<ChapterId>) -> Self {
        Self::DanglingReference { chapters }
    }

    /// Create an I/O error with context and source
    pub fn io_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a parse error for a file
    pub fn parse<P: Into<PathBuf>, S: Into<String>>(file: P, message: S) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// True for [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
