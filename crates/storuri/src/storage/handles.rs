//! Concrete handle types, one per backend kind plus the two wrapper
//! layers (blob directory and demo overlay).

use std::any::Any;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::resolver::Kwarg;
use crate::storage::Storage;

/// In-memory storage handle, identified by name. The name may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    name: String,
}

impl MemoryStorage {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Storage for MemoryStorage {
    fn kind(&self) -> &'static str {
        "memory"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// File-backed storage handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
    create: bool,
    read_only: bool,
    quota: Option<i64>,
}

impl FileStorage {
    pub fn new(path: PathBuf, create: bool, read_only: bool, quota: Option<i64>) -> Self {
        Self {
            path,
            create,
            read_only,
            quota,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn create(&self) -> bool {
        self.create
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Storage quota in bytes, if one was configured.
    pub fn quota(&self) -> Option<i64> {
        self.quota
    }
}

impl Storage for FileStorage {
    fn kind(&self) -> &'static str {
        "file"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Blob-directory wrapper around a base storage.
#[derive(Debug)]
pub struct BlobStorage {
    dir: PathBuf,
    layout: String,
    base: Box<dyn Storage>,
}

impl BlobStorage {
    pub fn new(dir: PathBuf, layout: impl Into<String>, base: Box<dyn Storage>) -> Self {
        Self {
            dir,
            layout: layout.into(),
            base,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn base(&self) -> &dyn Storage {
        self.base.as_ref()
    }
}

impl Storage for BlobStorage {
    fn kind(&self) -> &'static str {
        "blob"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Server locator for the networked client backend: a TCP host/port pair
/// or a Unix domain socket path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerLocator {
    Tcp { host: String, port: u16 },
    Unix(PathBuf),
}

/// Networked client storage handle.
#[derive(Debug, Clone)]
pub struct ClientStorage {
    locator: ServerLocator,
    options: BTreeMap<String, Kwarg>,
}

impl ClientStorage {
    pub fn new(locator: ServerLocator, options: BTreeMap<String, Kwarg>) -> Self {
        Self { locator, options }
    }

    pub fn locator(&self) -> &ServerLocator {
        &self.locator
    }

    /// All resolved client options (debug flags, credentials, timing).
    pub fn options(&self) -> &BTreeMap<String, Kwarg> {
        &self.options
    }

    pub fn option(&self, name: &str) -> Option<&Kwarg> {
        self.options.get(name)
    }
}

impl Storage for ClientStorage {
    fn kind(&self) -> &'static str {
        "client"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Overlay storage: writes land in the `changes` layer while reads fall
/// through to `base` when absent from the overlay.
#[derive(Debug)]
pub struct DemoStorage {
    base: Box<dyn Storage>,
    changes: Box<dyn Storage>,
}

impl DemoStorage {
    pub fn new(base: Box<dyn Storage>, changes: Box<dyn Storage>) -> Self {
        Self { base, changes }
    }

    /// Wrap `base` with a transient in-memory changes layer. Used by the
    /// legacy inline `demostorage` flag.
    pub fn ephemeral(base: Box<dyn Storage>) -> Self {
        Self::new(base, Box::new(MemoryStorage::default()))
    }

    pub fn base(&self) -> &dyn Storage {
        self.base.as_ref()
    }

    pub fn changes(&self) -> &dyn Storage {
        self.changes.as_ref()
    }
}

impl Storage for DemoStorage {
    fn kind(&self) -> &'static str {
        "demo"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
