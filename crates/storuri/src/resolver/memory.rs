//! In-memory storage resolver (`memory://name?query`).

use crate::error::Result;
use crate::registry::SchemeRegistry;
use crate::resolver::error::ResolverError;
use crate::resolver::kwargs::KwargManifest;
use crate::resolver::uri::parse_query;
use crate::resolver::{Resolution, Resolver};
use crate::storage::{MemoryStorage, Storage, StorageFactory};

const MANIFEST: KwargManifest = KwargManifest::EMPTY;

/// Resolves `memory://` URIs to in-memory storage factories. The locator
/// is a name and may be empty.
#[derive(Debug, Default)]
pub struct MemoryStorageResolver;

impl Resolver for MemoryStorageResolver {
    fn scheme(&self) -> &'static str {
        "memory"
    }

    fn resolve(&self, uri: &str, _registry: &SchemeRegistry) -> Result<Resolution> {
        let rest = uri
            .strip_prefix("memory://")
            .ok_or_else(|| ResolverError::invalid("memory", uri, "expected memory://<name>"))?;
        let (name, query) = match rest.split_once('?') {
            Some((name, query)) => (name, query),
            None => (rest, ""),
        };

        let params = parse_query(query);
        let (_, unused) = MANIFEST.interpret(&params)?;

        let factory = MemoryStorageFactory {
            name: name.to_string(),
        };
        Ok((Box::new(factory), unused))
    }
}

/// Deferred constructor for an in-memory storage handle.
#[derive(Debug, Clone)]
pub struct MemoryStorageFactory {
    name: String,
}

impl StorageFactory for MemoryStorageFactory {
    fn build(&self) -> Result<Box<dyn Storage>> {
        Ok(Box::new(MemoryStorage::new(self.name.as_str())))
    }
}
