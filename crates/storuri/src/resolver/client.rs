//! Networked client storage resolver (`zeo://host:port` or `zeo:///path`).
//!
//! A URI with an authority component is a TCP locator; the port defaults
//! to 9991 when absent and bracketed IPv6 literal hosts are supported.
//! Without an authority the path names a Unix domain socket.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::registry::SchemeRegistry;
use crate::resolver::error::ResolverError;
use crate::resolver::kwargs::{Kwarg, KwargManifest};
use crate::resolver::uri::{normalize_path, parse_query, split_uri};
use crate::resolver::{Resolution, Resolver, warn_demostorage_deprecated};
use crate::storage::{ClientStorage, DemoStorage, ServerLocator, Storage, StorageFactory};

/// Port assumed for TCP locators that name no port of their own.
pub const DEFAULT_PORT: u16 = 9991;

const MANIFEST: KwargManifest = KwargManifest {
    int_args: &[
        "debug",
        "min_disconnect_poll",
        "max_disconnect_poll",
        "wait_for_server_on_startup",
        "wait",
        "wait_timeout",
        "read_only",
        "read_only_fallback",
        "shared_blob_dir",
        "demostorage",
    ],
    string_args: &[
        "storage",
        "name",
        "client",
        "var",
        "username",
        "password",
        "realm",
        "blob_dir",
    ],
    bytesize_args: &["cache_size"],
    float_args: &[],
    tuple_args: &[],
};

/// Resolves `zeo://` URIs to networked client storage factories.
#[derive(Debug, Default)]
pub struct ClientStorageResolver;

impl Resolver for ClientStorageResolver {
    fn scheme(&self) -> &'static str {
        "zeo"
    }

    fn resolve(&self, uri: &str, _registry: &SchemeRegistry) -> Result<Resolution> {
        let parts = split_uri(uri)
            .ok_or_else(|| ResolverError::invalid("zeo", uri, "missing scheme separator"))?;

        let locator = match parts.authority.as_deref() {
            Some(authority) if !authority.is_empty() => parse_authority(authority, uri)?,
            _ => ServerLocator::Unix(normalize_path(&parts.path)),
        };

        let params = parse_query(parts.query.as_deref().unwrap_or(""));
        let (mut kw, unused) = MANIFEST.interpret(&params)?;

        let demostorage = kw.remove("demostorage").is_some();
        if demostorage {
            warn_demostorage_deprecated(self.scheme());
        }

        let factory = ClientStorageFactory {
            locator,
            options: kw.into_iter().collect(),
            demostorage,
        };
        Ok((Box::new(factory), unused))
    }
}

fn parse_authority(authority: &str, uri: &str) -> Result<ServerLocator> {
    // Bracketed IPv6 literal, e.g. zeo://[::1]:8100
    if let Some(rest) = authority.strip_prefix('[') {
        let (host, tail) = rest
            .split_once(']')
            .ok_or_else(|| ResolverError::invalid("zeo", uri, "unterminated IPv6 literal"))?;
        let port = match tail.strip_prefix(':') {
            Some(port) => parse_port(port, uri)?,
            None if tail.is_empty() => DEFAULT_PORT,
            None => {
                return Err(
                    ResolverError::invalid("zeo", uri, "garbage after IPv6 literal").into(),
                );
            }
        };
        return Ok(ServerLocator::Tcp {
            host: host.to_string(),
            port,
        });
    }

    match authority.rsplit_once(':') {
        Some((host, port)) => Ok(ServerLocator::Tcp {
            host: host.to_string(),
            port: parse_port(port, uri)?,
        }),
        None => Ok(ServerLocator::Tcp {
            host: authority.to_string(),
            port: DEFAULT_PORT,
        }),
    }
}

fn parse_port(port: &str, uri: &str) -> Result<u16> {
    port.parse()
        .map_err(|_| ResolverError::invalid("zeo", uri, format!("invalid port '{port}'")).into())
}

/// Deferred constructor for a networked client storage handle, optionally
/// wrapped in a transient demo overlay.
#[derive(Debug, Clone)]
pub struct ClientStorageFactory {
    locator: ServerLocator,
    options: BTreeMap<String, Kwarg>,
    demostorage: bool,
}

impl StorageFactory for ClientStorageFactory {
    fn build(&self) -> Result<Box<dyn Storage>> {
        let mut storage: Box<dyn Storage> = Box::new(ClientStorage::new(
            self.locator.clone(),
            self.options.clone(),
        ));
        if self.demostorage {
            storage = Box::new(DemoStorage::ephemeral(storage));
        }
        Ok(storage)
    }
}
