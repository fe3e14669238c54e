//! # Error Handling
//!
//! Centralized error handling for the `obce` tool, built on `thiserror`.
//! Each variant carries the context needed to diagnose a failed run:
//! which URL a transport error came from, an excerpt of a payload that
//! would not parse, which CSV column was missing, and so on.
//!
//! The `Result<T>` alias is used throughout the library; the binary layer
//! converts into `anyhow` at the CLI edge.

use thiserror::Error;

/// Main error type for obce operations
#[derive(Error, Debug)]
pub enum Error {
    /// A transport-level failure while talking to a remote source.
    ///
    /// Includes the URL that was being contacted. Individual mirror
    /// failures are logged and retried against the next mirror; this
    /// error surfaces directly only for non-mirrored requests.
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// The HTTP client itself could not be constructed.
    #[error("HTTP client setup error: {message}")]
    HttpClient { message: String },

    /// A response body was received but could not be used: empty, not
    /// parseable, or missing the expected structure.
    ///
    /// Carries a bounded excerpt of the body to aid operator review.
    #[error("Malformed payload: {message}{}", if excerpt.is_empty() { String::new() } else { format!("\n  payload starts: {}", excerpt) })]
    Payload { message: String, excerpt: String },

    /// Every configured source (all mirrors plus any fallback) failed.
    #[error("All {attempts} configured sources failed")]
    SourcesExhausted { attempts: usize },

    /// An error occurred while reading a delimited input file.
    #[error("CSV error in {path}: {message}")]
    Csv { path: String, message: String },

    /// A required column was absent from a delimited input header.
    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    /// An error occurred while writing an output file.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
