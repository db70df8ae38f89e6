//! Error types for SQL Stitcher
//!
//! This module provides unified error handling across the assembler pipeline,
//! covering file IO, patch-pattern failures, and content-map lookups.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for SQL Stitcher
#[derive(Debug, Error)]
pub enum StitchError {
    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error (missing input file, bad encoding, permissions)
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Patch Errors
    // ========================================================================
    /// A mandatory patch pattern could not be located in its source entry
    #[error("Could not find {what} in {path}")]
    PatternNotFound { what: String, path: String },

    /// A patch rule or the assembler referenced a key with no loaded content
    #[error("No content loaded for key '{0}'")]
    ContentMissing(String),

    /// A patch rule's pattern failed to compile
    #[error("Invalid patch pattern: {0}")]
    Pattern(#[from] regex::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl StitchError {
    /// Create a file read error
    pub fn file_read(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        StitchError::FileRead {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        StitchError::FileWrite {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a pattern-not-found error
    pub fn pattern_not_found(what: impl Into<String>, path: impl Into<String>) -> Self {
        StitchError::PatternNotFound {
            what: what.into(),
            path: path.into(),
        }
    }

    /// Create a missing-content error
    pub fn content_missing(key: impl Into<String>) -> Self {
        StitchError::ContentMissing(key.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        StitchError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            StitchError::Io(_)
                | StitchError::FileRead { .. }
                | StitchError::FileWrite { .. }
                | StitchError::DirectoryCreate { .. }
        )
    }

    /// Check if this error is a patch failure
    pub fn is_patch(&self) -> bool {
        matches!(
            self,
            StitchError::PatternNotFound { .. }
                | StitchError::ContentMissing(_)
                | StitchError::Pattern(_)
        )
    }
}

/// Result type alias using StitchError
pub type StitchResult<T> = Result<T, StitchError>;

// ============================================================================
// Tests
// ============================================================================
