//! # Storuri Storage Handles
//!
//! Value-object handles for the storage backends this crate resolves to.
//! The storage engines themselves are external collaborators; a handle
//! records the construction arguments a factory resolved and identifies
//! the backend kind. Callers own the handles a factory yields and dispose
//! of them explicitly with [`Storage::close`].

pub mod handles;


use std::any::Any;
use std::fmt::Debug;

use crate::error::Result;

pub use handles::{
    BlobStorage, ClientStorage, DemoStorage, FileStorage, MemoryStorage, ServerLocator,
};

/// A live storage backend handle.
pub trait Storage: Debug + Send {
    /// Short identifier for the backend kind ("memory", "file", ...).
    fn kind(&self) -> &'static str;

    /// Downcasting support for callers that need the concrete handle.
    fn as_any(&self) -> &dyn Any;

    /// Release the handle. Handles are plain value objects here, so the
    /// default is a no-op; engine integrations override it.
    fn close(&mut self) {}
}

/// A deferred, repeatable constructor for a storage handle.
///
/// A factory holds the fully resolved construction arguments as explicit
/// state rather than closure captures. It may be invoked any number of
/// times, from any thread; each invocation yields an independent handle.
pub trait StorageFactory: Debug + Send + Sync {
    /// Construct a live storage handle.
    fn build(&self) -> Result<Box<dyn Storage>>;
}
