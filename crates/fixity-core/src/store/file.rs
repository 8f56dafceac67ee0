//! File-backed store: one content file in one mirror directory.

use super::{stream, BackingStore, StoreId, StoreReadError};
use crate::checksum::ChecksumDescriptor;
use crate::result::FixityResult;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Backing store for a single file on local disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    id: StoreId,
    path: PathBuf,
}

impl FileStore {
    pub fn new(id: impl Into<StoreId>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    /// Store identified by its own path, the common single-mirror case.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = StoreId::new(path.display().to_string());
        Self { id, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BackingStore for FileStore {
    fn id(&self) -> &StoreId {
        &self.id
    }

    fn check_fixity(
        &self,
        expected: &ChecksumDescriptor,
        expected_size: u64,
    ) -> Result<FixityResult, StoreReadError> {
        let f = File::open(&self.path).map_err(|e| StoreReadError::new(self.id.clone(), e))?;
        stream::check_reader(&self.id, f, expected, expected_size)
    }
}
