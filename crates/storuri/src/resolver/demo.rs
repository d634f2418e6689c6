//! Overlay storage resolver (`demo:(BASE_URI)/(CHANGES_URI)#frag`).
//!
//! Both sub-URIs are resolved recursively through the full dispatch
//! pipeline. Neither may surface connection-level parameters of its own;
//! the optional fragment carries literal key=value pairs that become the
//! composed URI's leftover parameters.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::registry::SchemeRegistry;
use crate::resolver::error::ResolverError;
use crate::resolver::kwargs::RawParams;
use crate::resolver::uri::parse_query;
use crate::resolver::{Resolution, Resolver};
use crate::storage::{DemoStorage, Storage, StorageFactory};

static DEMO_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^demo:\((.+)\)/\((.+)\)(?:#(.*))?$").expect("demo URI pattern is well formed")
});

/// Resolves `demo:` URIs composing a base and a changes storage.
#[derive(Debug, Default)]
pub struct DemoStorageResolver;

impl Resolver for DemoStorageResolver {
    fn scheme(&self) -> &'static str {
        "demo"
    }

    fn resolve(&self, uri: &str, registry: &SchemeRegistry) -> Result<Resolution> {
        let captures = DEMO_URI.captures(uri).ok_or_else(|| {
            ResolverError::invalid("demo", uri, "expected demo:(base_uri)/(changes_uri)")
        })?;

        let base = resolve_sub_uri(&captures[1], uri, registry)?;
        let changes = resolve_sub_uri(&captures[2], uri, registry)?;

        let params: RawParams = captures
            .get(3)
            .map(|fragment| parse_query(fragment.as_str()))
            .unwrap_or_default();

        let factory = DemoStorageFactory { base, changes };
        Ok((Box::new(factory), params))
    }
}

/// Resolve one nested URI, rejecting any leftover connection parameters
/// it surfaces: with two sub-URIs in play their attribution would be
/// ambiguous.
fn resolve_sub_uri(
    sub_uri: &str,
    uri: &str,
    registry: &SchemeRegistry,
) -> Result<Box<dyn StorageFactory>> {
    let (factory, leftover) = registry.dispatch(sub_uri)?;
    if !leftover.is_empty() {
        return Err(ResolverError::SubUriParameters {
            uri: uri.to_string(),
            keywords: leftover.into_keys().collect(),
        }
        .into());
    }
    Ok(factory)
}

/// Composes the base and changes factories into an overlay storage.
#[derive(Debug)]
pub struct DemoStorageFactory {
    base: Box<dyn StorageFactory>,
    changes: Box<dyn StorageFactory>,
}

impl StorageFactory for DemoStorageFactory {
    fn build(&self) -> Result<Box<dyn Storage>> {
        Ok(Box::new(DemoStorage::new(
            self.base.build()?,
            self.changes.build()?,
        )))
    }
}
