//! Disk tier.
//!
//! Maps `(collection, asset)` to `<root>/<collection>/<asset>.<ext>`. Paths are
//! derived purely from the key; the store holds no other mutable path state.
//! Writes land in a temporary file in the same directory and are renamed into
//! place, so a failed write never leaves a truncated asset behind.

use std::collections::BTreeSet;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;

use spritedex_core::{CacheKey, SpriteError, SpriteResult};

/// Suffix of in-progress temporary files.
const PARTIAL_SUFFIX: &str = ".part";

/// Filesystem store for asset bytes.
///
/// Cloning is cheap; clones address the same root.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
    extension: String,
}

impl DiskStore {
    /// Create a store rooted at the sprites directory.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// The sprites root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one collection's assets.
    pub fn collection_dir(&self, slug: &str) -> PathBuf {
        self.root.join(slug)
    }

    /// Final path of one asset.
    pub fn asset_path(&self, key: &CacheKey) -> PathBuf {
        self.collection_dir(&key.collection)
            .join(key.file_name(&self.extension))
    }

    /// Create the collection directory if needed. Safe to race.
    pub async fn ensure_collection_dir(&self, slug: &str) -> SpriteResult<PathBuf> {
        validate_component(slug)?;
        let dir = self.collection_dir(slug);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| SpriteError::from_io_error("create_dir", &dir, &e))?;
        Ok(dir)
    }

    /// Atomically write an asset, creating its collection directory first.
    pub async fn write(&self, key: &CacheKey, bytes: &Bytes) -> SpriteResult<()> {
        validate_component(&key.asset)?;
        let dir = self.ensure_collection_dir(&key.collection).await?;
        let path = self.asset_path(key);
        let prefix = format!(".{}.", key.file_name(&self.extension));
        let bytes = bytes.clone();

        let target = path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &prefix, &target, &bytes))
            .await
            .map_err(|e| SpriteError::storage("write", &path, e.to_string()))?
    }

    /// Read an asset. `Ok(None)` when it is not on disk.
    pub async fn read(&self, key: &CacheKey) -> SpriteResult<Option<Bytes>> {
        validate_key(key)?;
        let path = self.asset_path(key);
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SpriteError::from_io_error("read", &path, &e)),
        }
    }

    /// Whether an asset file is present.
    pub async fn exists(&self, key: &CacheKey) -> bool {
        if validate_key(key).is_err() {
            return false;
        }
        tokio::fs::metadata(self.asset_path(key))
            .await
            .is_ok_and(|meta| meta.is_file())
    }

    /// Remove a collection's directory and everything in it.
    ///
    /// A missing directory is not an error.
    pub async fn delete_collection(&self, slug: &str) -> SpriteResult<()> {
        validate_component(slug)?;
        let dir = self.collection_dir(slug);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SpriteError::from_io_error("remove_dir", &dir, &e)),
        }
    }

    /// Names of all collection directories under the root.
    ///
    /// A missing root yields an empty set. Plain files are skipped; every
    /// directory counts, dot-prefixed ones included, since any slug that
    /// passes validation can own one.
    pub async fn list_collection_directories(&self) -> SpriteResult<BTreeSet<String>> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(SpriteError::from_io_error("read_dir", &self.root, &e)),
        };

        let mut names = BTreeSet::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SpriteError::from_io_error("read_dir", &self.root, &e))?
        {
            let is_dir = entry
                .file_type()
                .await
                .map_err(|e| SpriteError::from_io_error("file_type", entry.path(), &e))?
                .is_dir();
            if !is_dir {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.insert(name.to_string());
            }
        }
        Ok(names)
    }
}

/// Temp file + rename. The temp file is removed on every error path.
fn write_atomic(dir: &Path, prefix: &str, target: &Path, bytes: &[u8]) -> SpriteResult<()> {
    let mut temp = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(PARTIAL_SUFFIX)
        .tempfile_in(dir)
        .map_err(|e| SpriteError::from_io_error("create_temp", dir, &e))?;

    temp.write_all(bytes)
        .and_then(|()| temp.flush())
        .map_err(|e| SpriteError::from_io_error("write", temp.path(), &e))?;

    temp.persist(target)
        .map_err(|e| SpriteError::from_io_error("rename", target, &e.error))?;
    Ok(())
}

fn validate_key(key: &CacheKey) -> SpriteResult<()> {
    validate_component(&key.collection)?;
    validate_component(&key.asset)
}

/// Slugs and asset ids become single path components.
fn validate_component(component: &str) -> SpriteResult<()> {
    let invalid = component.is_empty()
        || component == "."
        || component == ".."
        || component.contains(['/', '\\', '\0']);
    if invalid {
        return Err(SpriteError::storage(
            "validate",
            component,
            "not a valid single path component",
        ));
    }
    Ok(())
}
