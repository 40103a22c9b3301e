//! Error types for the lesson library
//!
//! The rendering and extraction pipeline is total and never fails on malformed
//! markup. Errors only come from configuration, the document source and the
//! catalog built on top of it.

use thiserror::Error;

/// Pattern compilation errors
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum ParseError {
    /// A configured language tag produced an unusable fence pattern
    #[error("Invalid fence pattern: {0}")]
    InvalidPattern(String),
}

impl ParseError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(reason: impl Into<String>) -> Self {
        Self::InvalidPattern(reason.into())
    }
}

/// Result type for parsing setup
pub type ParseResult<T> = Result<T, ParseError>;

/// Catalog and document source errors
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum CatalogError {
    /// A curated file name has no document in the source
    #[error("Missing document for curated file: {0}")]
    MissingDocument(String),

    /// Document bytes are not UTF-8
    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// Two file names derive the same lesson id
    #[error("Duplicate lesson id: {0}")]
    DuplicateId(String),

    /// Requested lesson id does not exist
    #[error("Lesson not found: {0}")]
    NotFound(String),

    /// The document source failed
    #[error("Document source error: {0}")]
    Source(String),
}

impl CatalogError {
    /// Create a missing document error
    pub fn missing_document(file_name: impl Into<String>) -> Self {
        Self::MissingDocument(file_name.into())
    }

    /// Create an invalid UTF-8 error
    pub fn invalid_utf8(file_name: impl Into<String>) -> Self {
        Self::InvalidUtf8(file_name.into())
    }

    /// Create a duplicate id error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a source error
    pub fn source_failed(reason: impl Into<String>) -> Self {
        Self::Source(reason.into())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Serialization-related errors
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum SerializationError {
    /// Serialization failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

impl SerializationError {
    /// Create a serialization failed error
    pub fn serialization_failed(reason: impl Into<String>) -> Self {
        Self::SerializationFailed(reason.into())
    }

    /// Create a deserialization failed error
    pub fn deserialization_failed(reason: impl Into<String>) -> Self {
        Self::DeserializationFailed(reason.into())
    }
}

/// Result type for serialization operations
pub type SerializationResult<T> = Result<T, SerializationError>;

/// Main unified error type that can represent any lesson error
#[derive(Debug, Error, uniffi::Error)]
pub enum LessonError {
    /// Pattern error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

/// Result type for lesson operations
pub type LessonResult<T> = Result<T, LessonError>;
