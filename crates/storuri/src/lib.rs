//! # Storuri
//!
//! Constructs storage backend factories and connection settings from URIs.
//!
//! [`resolve_uri`] maps a connection string such as
//! `file:///var/db/data.fs?connection_cache_size=5000` to a deferred,
//! repeatable storage factory plus a validated connection configuration.
//! Dispatch is keyed by the URI scheme through a process-wide
//! [`SchemeRegistry`]; additional scheme bindings can be contributed
//! through [`SchemeRegistryBuilder`] before the registry is frozen.

pub mod config;
pub mod connection;
pub mod datatypes;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod storage;

// Re-export key public types for easier use by callers and plugins
pub use connection::DatabaseConfig;
pub use error::{Error, Result};
pub use registry::{SchemeRegistry, SchemeRegistryBuilder, resolve_uri};
pub use resolver::{Kwarg, KwargManifest, ParamValue, RawParams, Resolver};
pub use storage::{Storage, StorageFactory};
