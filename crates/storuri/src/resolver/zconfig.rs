//! Declarative-config storage resolver (`zconfig:///path/to/file#name`).
//!
//! The locator is a path to a store-config resource enumerating named
//! database and storage entries. An optional fragment selects an entry by
//! name; without one the first entry in file order wins. This resolver
//! constructs nothing itself: the returned factory delegates to the
//! matched entry's own open capability.

use crate::config::{ConfigEntry, load_store_config};
use crate::error::Result;
use crate::registry::SchemeRegistry;
use crate::resolver::error::ResolverError;
use crate::resolver::uri::{normalize_path, parse_query, split_uri};
use crate::resolver::{Resolution, Resolver};

/// Resolves `zconfig://` URIs by lookup in a declarative config resource.
#[derive(Debug, Default)]
pub struct ZConfigResolver;

impl Resolver for ZConfigResolver {
    fn scheme(&self) -> &'static str {
        "zconfig"
    }

    fn resolve(&self, uri: &str, _registry: &SchemeRegistry) -> Result<Resolution> {
        let parts = split_uri(uri)
            .ok_or_else(|| ResolverError::invalid("zconfig", uri, "missing scheme separator"))?;

        // Tolerate host-less relative forms: a non-empty authority is the
        // first path segment.
        let raw_path = match parts.authority.as_deref() {
            Some(authority) if !authority.is_empty() => {
                format!("{}{}", authority, parts.path)
            }
            _ => parts.path.clone(),
        };
        let path = normalize_path(&raw_path);

        let config = load_store_config(&path)?;
        log::trace!(
            "loaded store config {} ({} databases, {} storages)",
            path.display(),
            config.databases.len(),
            config.storages.len()
        );

        let fragment = parts.fragment.clone().unwrap_or_default();
        let entry = config
            .entries()
            .find(|entry| fragment.is_empty() || entry.name() == fragment)
            .ok_or_else(|| ResolverError::NotFound {
                fragment: fragment.clone(),
                path: path.clone(),
            })?;

        match entry {
            ConfigEntry::Database(database) => {
                // A full database declaration carries its connection
                // settings as typed fields.
                Ok((database.storage.factory(), database.connection_params()))
            }
            ConfigEntry::Storage(named) => {
                let params = parse_query(parts.query.as_deref().unwrap_or(""));
                Ok((named.storage.factory(), params))
            }
        }
    }
}
