//! Serde schema for the declarative store-config resource.
//!
//! Only the subset of fields this crate consumes is modeled: named
//! storage sections, and database declarations carrying typed connection
//! settings around a storage section.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::error::Result;
use crate::resolver::client::DEFAULT_PORT;
use crate::resolver::kwargs::{ParamValue, RawParams};
use crate::storage::{
    ClientStorage, DemoStorage, FileStorage, MemoryStorage, ServerLocator, Storage, StorageFactory,
};

/// Parsed store-config resource: named databases and storages, in file
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    #[serde(default)]
    pub databases: Vec<DatabaseSection>,
    #[serde(default)]
    pub storages: Vec<NamedStorage>,
}

impl StoreConfig {
    /// Entries in lookup order: databases first, then storages.
    pub fn entries(&self) -> impl Iterator<Item = ConfigEntry<'_>> {
        self.databases
            .iter()
            .map(ConfigEntry::Database)
            .chain(self.storages.iter().map(ConfigEntry::Storage))
    }
}

/// One entry of the resource: a full database declaration or a bare
/// named storage.
#[derive(Debug, Clone, Copy)]
pub enum ConfigEntry<'a> {
    Database(&'a DatabaseSection),
    Storage(&'a NamedStorage),
}

impl<'a> ConfigEntry<'a> {
    /// Entry name, borrowed from the underlying section rather than the
    /// entry value itself.
    pub fn name(&self) -> &'a str {
        match self {
            ConfigEntry::Database(database) => &database.name,
            ConfigEntry::Storage(named) => &named.name,
        }
    }
}

/// A bare named storage entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedStorage {
    pub name: String,
    pub storage: StorageSection,
}

/// A full database declaration with typed connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseSection {
    pub name: String,
    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(default)]
    pub pool_size: Option<i64>,
    #[serde(default)]
    pub pool_timeout: Option<i64>,
    #[serde(default)]
    pub cache_size: Option<i64>,
    #[serde(default)]
    pub cache_size_bytes: Option<i64>,
    #[serde(default)]
    pub historical_pool_size: Option<i64>,
    #[serde(default)]
    pub historical_cache_size: Option<i64>,
    #[serde(default)]
    pub historical_cache_size_bytes: Option<i64>,
    #[serde(default)]
    pub historical_timeout: Option<i64>,
    #[serde(default)]
    pub large_record_size: Option<i64>,
    pub storage: StorageSection,
}

impl DatabaseSection {
    /// Surface the declaration's typed connection settings as raw
    /// parameters. Unset fields are skipped; integers pass through as
    /// native values rather than text.
    pub fn connection_params(&self) -> RawParams {
        let fields = [
            ("connection_pool_size", self.pool_size),
            ("connection_pool_timeout", self.pool_timeout),
            ("connection_cache_size", self.cache_size),
            ("connection_cache_size_bytes", self.cache_size_bytes),
            ("connection_historical_pool_size", self.historical_pool_size),
            (
                "connection_historical_cache_size",
                self.historical_cache_size,
            ),
            (
                "connection_historical_cache_size_bytes",
                self.historical_cache_size_bytes,
            ),
            ("connection_historical_timeout", self.historical_timeout),
            ("connection_large_record_size", self.large_record_size),
        ];

        let mut params = RawParams::new();
        for (key, value) in fields {
            if let Some(value) = value {
                params.insert(key.to_string(), ParamValue::Int(value));
            }
        }
        if let Some(name) = &self.database_name {
            params.insert("database_name".to_string(), ParamValue::Text(name.clone()));
        }
        params
    }
}

/// A declarative storage section, one variant per backend kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageSection {
    Memory {
        #[serde(default)]
        name: Option<String>,
    },
    File {
        path: PathBuf,
        #[serde(default)]
        create: Option<bool>,
        #[serde(default)]
        read_only: Option<bool>,
        #[serde(default)]
        quota: Option<i64>,
    },
    Zeo {
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<u16>,
        #[serde(default)]
        path: Option<PathBuf>,
    },
    Demo {
        base: Box<StorageSection>,
        changes: Box<StorageSection>,
    },
}

impl StorageSection {
    /// The section's open capability: construct a handle for the storage
    /// it declares.
    pub fn open(&self) -> Result<Box<dyn Storage>> {
        match self {
            StorageSection::Memory { name } => Ok(Box::new(MemoryStorage::new(
                name.clone().unwrap_or_default(),
            ))),
            StorageSection::File {
                path,
                create,
                read_only,
                quota,
            } => Ok(Box::new(FileStorage::new(
                path.clone(),
                create.unwrap_or(false),
                read_only.unwrap_or(false),
                *quota,
            ))),
            StorageSection::Zeo { host, port, path } => {
                let locator = match (host, path) {
                    (Some(host), _) => ServerLocator::Tcp {
                        host: host.clone(),
                        port: port.unwrap_or(DEFAULT_PORT),
                    },
                    (None, Some(path)) => ServerLocator::Unix(path.clone()),
                    (None, None) => {
                        return Err(ConfigError::InvalidSection {
                            reason: "zeo storage needs a host or a socket path".to_string(),
                        }
                        .into());
                    }
                };
                Ok(Box::new(ClientStorage::new(locator, Default::default())))
            }
            StorageSection::Demo { base, changes } => {
                Ok(Box::new(DemoStorage::new(base.open()?, changes.open()?)))
            }
        }
    }

    /// Wrap the section's open capability as a deferred factory.
    pub fn factory(&self) -> Box<dyn StorageFactory> {
        Box::new(ConfigStorageFactory {
            section: self.clone(),
        })
    }
}

/// Factory delegating to a config entry's own open capability; this layer
/// constructs nothing itself.
#[derive(Debug, Clone)]
pub struct ConfigStorageFactory {
    section: StorageSection,
}

impl StorageFactory for ConfigStorageFactory {
    fn build(&self) -> Result<Box<dyn Storage>> {
        self.section.open()
    }
}
