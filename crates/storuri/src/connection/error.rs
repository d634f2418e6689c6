//! # Storuri Connection Parameter Errors
//!
//! Defines error types specific to connection-parameter normalization.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectionError {
    /// One or more leftover parameter names are not recognized
    /// connection-level settings. All offending names are collected
    /// rather than failing on the first.
    #[error("Unrecognized database keyword(s): {}", keywords.join(", "))]
    UnknownDatabaseKeywords { keywords: Vec<String> },
}
