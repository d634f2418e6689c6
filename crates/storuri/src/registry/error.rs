//! # Storuri Registry Errors
//!
//! Defines error types specific to scheme dispatch.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The URI's scheme prefix has no registered resolver.
    #[error("No resolver found for uri: {uri}")]
    NoResolverForScheme { uri: String },
}
