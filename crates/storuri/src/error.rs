//! # Storuri Errors
//!
//! Defines the crate-wide error type.
//!
//! Each subsystem owns its error enum in its own `error` module; this
//! module aggregates them into [`Error`] via `#[from]` conversions so the
//! resolution pipeline can propagate any of them with `?`.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::connection::error::ConnectionError;
use crate::datatypes::error::DatatypeError;
use crate::registry::error::RegistryError;
use crate::resolver::error::ResolverError;

/// Crate-wide error type for URI resolution.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Type coercion failure or an inconsistent suffix table.
    #[error("Datatype error: {0}")]
    Datatype(#[from] DatatypeError),

    /// Malformed backend URI dialect or config-entry lookup failure.
    #[error("Resolver error: {0}")]
    Resolver(#[from] ResolverError),

    /// Scheme dispatch failure.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Connection-parameter validation failure.
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Declarative-config resource loading failure.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;
