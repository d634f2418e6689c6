//! # Storuri Resolver Errors
//!
//! Defines error types specific to the backend resolvers: malformed URI
//! dialects, demo sub-URIs carrying disallowed parameters, and failed
//! config-entry lookups.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    /// Malformed syntax for a backend's URI dialect.
    #[error("Invalid {scheme} URI '{uri}': {reason}")]
    InvalidUri {
        scheme: &'static str,
        uri: String,
        reason: String,
    },

    /// A demo sub-URI surfaced connection-level parameters of its own,
    /// which would make parameter attribution ambiguous.
    #[error("Invalid demo URI '{uri}': sub-URI carries connection parameters: {}", keywords.join(", "))]
    SubUriParameters { uri: String, keywords: Vec<String> },

    /// No storage or database entry matched the config fragment.
    #[error("No storage or database named '{fragment}' found in {}", path.display())]
    NotFound { fragment: String, path: PathBuf },
}

impl ResolverError {
    pub(crate) fn invalid(
        scheme: &'static str,
        uri: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ResolverError::InvalidUri {
            scheme,
            uri: uri.into(),
            reason: reason.into(),
        }
    }
}
