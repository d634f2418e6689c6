//! # Storuri Backend Resolvers
//!
//! One resolver per URI scheme. A resolver parses its scheme's URI
//! dialect, interprets backend keyword arguments against its declarative
//! manifest, and returns a deferred storage factory plus the leftover
//! parameters destined for the connection layer.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`kwargs`]**: The shared keyword interpreter; splits a raw
//!   parameter mapping into manifest-claimed typed arguments and
//!   unclaimed leftovers.
//! - **[`uri`]**: Lexical URI splitting and percent-decoded query
//!   parsing shared by the resolvers.
//! - **[`memory`]**, **[`file`]**, **[`client`]**, **[`zconfig`]**,
//!   **[`demo`]**: The backend resolvers, one per scheme.
//! - **[`error`]**: Resolver-specific error types.

pub mod client;
pub mod demo;
pub mod error;
pub mod file;
pub mod kwargs;
pub mod memory;
pub mod uri;
pub mod zconfig;

#[cfg(test)]
mod tests;

pub use client::ClientStorageResolver;
pub use demo::DemoStorageResolver;
pub use error::ResolverError;
pub use file::FileStorageResolver;
pub use kwargs::{Kwarg, KwargManifest, ParamValue, RawParams};
pub use memory::MemoryStorageResolver;
pub use zconfig::ZConfigResolver;

use crate::error::Result;
use crate::registry::SchemeRegistry;
use crate::storage::StorageFactory;

/// Outcome of resolving one URI: the deferred factory and the raw
/// leftover parameters destined for the connection layer.
pub type Resolution = (Box<dyn StorageFactory>, RawParams);

/// A backend resolver for one URI scheme.
///
/// Resolver instances are created once at registry construction and live
/// for the process lifetime; resolution itself allocates only transient
/// values.
pub trait Resolver: Send + Sync {
    /// The scheme this resolver handles (text before the first colon).
    fn scheme(&self) -> &'static str;

    /// Parse `uri` and produce a storage factory plus leftover
    /// parameters, still in raw form. No connection-level defaulting or
    /// conversion happens at this layer.
    ///
    /// The registry is passed through so composing resolvers can resolve
    /// nested URIs through the full dispatch pipeline.
    fn resolve(&self, uri: &str, registry: &SchemeRegistry) -> Result<Resolution>;
}

/// Deprecation signal for the legacy inline overlay flag; the flag still
/// takes effect.
pub(crate) fn warn_demostorage_deprecated(scheme: &str) {
    log::warn!("{scheme}: the demostorage option is deprecated, use demo: instead");
}
