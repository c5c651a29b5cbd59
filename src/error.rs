//! Error types for Deskboard
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Deskboard operations
///
/// The first four variants map to the board pipeline's recovery paths: a
/// partition fetch failure is skipped with a warning, a load failure aborts
/// the current reload, a transition failure triggers a full
/// resynchronization, and a detail fetch failure leaves the board untouched.
#[derive(Error, Debug)]
pub enum DeskboardError {
    /// One status partition could not be fetched; the aggregator skips it
    /// and continues with the remaining partitions
    #[error("Partition fetch failed for status '{status}': {message}")]
    PartitionFetch {
        /// The status partition whose retrieval failed
        status: String,
        /// Transport or upstream error detail
        message: String,
    },

    /// The response envelope could not be decoded into a conversation list
    #[error("Load error: {0}")]
    Load(String),

    /// A status mutation was rejected or never reached the gateway
    #[error("Transition error: {0}")]
    Transition(String),

    /// Fetching a single conversation's detail failed
    #[error("Detail fetch error: {0}")]
    DetailFetch(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential store errors (missing session, rejected write)
    #[error("Credential error: {0}")]
    Credentials(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Keyring/credential storage errors
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Result type alias for Deskboard operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
