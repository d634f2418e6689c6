//! File-backed storage resolver (`file:///path?query`).
//!
//! The locator is split manually on the first `?` rather than through a
//! generic URI parser: local paths may contain colons and backslashes
//! that generic parsing would mishandle.

use std::path::PathBuf;

use crate::error::Result;
use crate::registry::SchemeRegistry;
use crate::resolver::error::ResolverError;
use crate::resolver::kwargs::KwargManifest;
use crate::resolver::uri::{normalize_path, parse_query};
use crate::resolver::{Resolution, Resolver, warn_demostorage_deprecated};
use crate::storage::{BlobStorage, DemoStorage, FileStorage, Storage, StorageFactory};

const MANIFEST: KwargManifest = KwargManifest {
    int_args: &["create", "read_only", "demostorage"],
    string_args: &["blobstorage_dir", "blobstorage_layout"],
    bytesize_args: &["quota"],
    float_args: &[],
    tuple_args: &[],
};

/// Blob directory layout used when none is requested.
const DEFAULT_BLOB_LAYOUT: &str = "automatic";

/// Resolves `file://` URIs to file storage factories, optionally wrapped
/// in a blob-directory layer and/or a transient demo overlay.
#[derive(Debug, Default)]
pub struct FileStorageResolver;

impl Resolver for FileStorageResolver {
    fn scheme(&self) -> &'static str {
        "file"
    }

    fn resolve(&self, uri: &str, _registry: &SchemeRegistry) -> Result<Resolution> {
        let rest = uri
            .strip_prefix("file://")
            .ok_or_else(|| ResolverError::invalid("file", uri, "expected file://<path>"))?;
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, query),
            None => (rest, ""),
        };

        let params = parse_query(query);
        let (mut kw, unused) = MANIFEST.interpret(&params)?;

        // Presence of the legacy flag requests the overlay regardless of
        // its value, as existing callers rely on.
        let demostorage = kw.remove("demostorage").is_some();
        if demostorage {
            warn_demostorage_deprecated(self.scheme());
        }

        let blob_dir = kw
            .remove("blobstorage_dir")
            .and_then(|value| value.into_str())
            .map(PathBuf::from);
        let blob_layout = kw
            .remove("blobstorage_layout")
            .and_then(|value| value.into_str())
            .unwrap_or_else(|| DEFAULT_BLOB_LAYOUT.to_string());

        let factory = FileStorageFactory {
            path: normalize_path(path),
            create: kw
                .remove("create")
                .and_then(|value| value.as_bool())
                .unwrap_or(false),
            read_only: kw
                .remove("read_only")
                .and_then(|value| value.as_bool())
                .unwrap_or(false),
            quota: kw.remove("quota").and_then(|value| value.as_int()),
            blob_dir,
            blob_layout,
            demostorage,
        };
        Ok((Box::new(factory), unused))
    }
}

/// Deferred constructor for a file storage handle.
///
/// Depending on the resolved options the built handle is plain,
/// blob-wrapped, demo-wrapped, or both, with the demo overlay wrapping
/// the blob layer which wraps the file storage.
#[derive(Debug, Clone)]
pub struct FileStorageFactory {
    path: PathBuf,
    create: bool,
    read_only: bool,
    quota: Option<i64>,
    blob_dir: Option<PathBuf>,
    blob_layout: String,
    demostorage: bool,
}

impl StorageFactory for FileStorageFactory {
    fn build(&self) -> Result<Box<dyn Storage>> {
        let mut storage: Box<dyn Storage> = Box::new(FileStorage::new(
            self.path.clone(),
            self.create,
            self.read_only,
            self.quota,
        ));
        if let Some(dir) = &self.blob_dir {
            storage = Box::new(BlobStorage::new(
                dir.clone(),
                self.blob_layout.clone(),
                storage,
            ));
        }
        if self.demostorage {
            storage = Box::new(DemoStorage::ephemeral(storage));
        }
        Ok(storage)
    }
}
