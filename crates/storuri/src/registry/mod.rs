//! # Storuri Scheme Dispatch Registry
//!
//! Maps a URI's scheme prefix to a registered resolver. A registry is
//! built once through [`SchemeRegistryBuilder`] — seeded with the
//! built-in schemes plus any externally contributed bindings — and is
//! read-only thereafter, so resolution needs no synchronization.

pub mod error;


use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::connection::DatabaseConfig;
use crate::error::Result;
use crate::resolver::{
    ClientStorageResolver, DemoStorageResolver, FileStorageResolver, MemoryStorageResolver,
    Resolution, Resolver, ZConfigResolver,
};
use crate::storage::StorageFactory;

pub use error::RegistryError;

static DEFAULT_REGISTRY: LazyLock<SchemeRegistry> =
    LazyLock::new(|| SchemeRegistry::builder().build());

/// Read-only mapping from URI scheme to resolver.
pub struct SchemeRegistry {
    resolvers: HashMap<String, Arc<dyn Resolver>>,
}

impl SchemeRegistry {
    /// Builder seeded with the built-in scheme resolvers.
    pub fn builder() -> SchemeRegistryBuilder {
        SchemeRegistryBuilder::default().with_defaults()
    }

    /// The process-wide registry holding the built-in schemes.
    pub fn global() -> &'static SchemeRegistry {
        &DEFAULT_REGISTRY
    }

    /// Registered scheme names.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }

    pub fn has_scheme(&self, scheme: &str) -> bool {
        self.resolvers.contains_key(scheme)
    }

    /// Look up the resolver for `uri`'s scheme and run it, returning the
    /// deferred factory and the raw leftover parameters.
    pub fn dispatch(&self, uri: &str) -> Result<Resolution> {
        let scheme = match uri.split_once(':') {
            Some((scheme, _)) => scheme,
            None => {
                return Err(RegistryError::NoResolverForScheme {
                    uri: uri.to_string(),
                }
                .into());
            }
        };
        let resolver =
            self.resolvers
                .get(scheme)
                .ok_or_else(|| RegistryError::NoResolverForScheme {
                    uri: uri.to_string(),
                })?;
        log::debug!("resolving '{uri}' via scheme '{scheme}'");
        resolver.resolve(uri, self)
    }

    /// Resolve `uri` into a storage factory and the validated connection
    /// configuration.
    pub fn resolve(&self, uri: &str) -> Result<(Box<dyn StorageFactory>, DatabaseConfig)> {
        let (factory, leftover) = self.dispatch(uri)?;
        let config = DatabaseConfig::from_params(leftover)?;
        Ok((factory, config))
    }
}

/// Builder for a [`SchemeRegistry`]; the extension point through which
/// additional scheme bindings are contributed before the registry is
/// frozen.
#[derive(Default)]
pub struct SchemeRegistryBuilder {
    resolvers: HashMap<String, Arc<dyn Resolver>>,
}

impl SchemeRegistryBuilder {
    /// Register the built-in scheme resolvers.
    pub fn with_defaults(self) -> Self {
        self.register(Arc::new(MemoryStorageResolver))
            .register(Arc::new(FileStorageResolver))
            .register(Arc::new(ClientStorageResolver))
            .register(Arc::new(ZConfigResolver))
            .register(Arc::new(DemoStorageResolver))
    }

    /// Register `resolver` under its scheme. Later registrations for the
    /// same scheme replace earlier ones.
    pub fn register(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolvers
            .insert(resolver.scheme().to_string(), resolver);
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> SchemeRegistry {
        SchemeRegistry {
            resolvers: self.resolvers,
        }
    }
}

/// Resolve `uri` through the process-wide registry.
///
/// Returns the deferred storage factory and the validated connection
/// configuration. Fails with [`RegistryError::NoResolverForScheme`] for
/// unregistered schemes, with a resolver error for malformed URI
/// dialects, and with
/// [`ConnectionError::UnknownDatabaseKeywords`](crate::connection::ConnectionError)
/// for unrecognized leftover parameters.
pub fn resolve_uri(uri: &str) -> Result<(Box<dyn StorageFactory>, DatabaseConfig)> {
    SchemeRegistry::global().resolve(uri)
}
