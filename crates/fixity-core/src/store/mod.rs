//! Backing-store contract and per-store fixity streaming.
//!
//! Each [`BackingStore`] is bound to exactly one physical copy of a piece of
//! content (one mirror). Verification streams the stored bytes once, start to
//! end, with a constant-memory digest accumulator; it never aggregates across
//! stores itself.

mod file;
mod stream;

pub use file::FileStore;
pub use stream::check_reader;

use crate::checksum::ChecksumDescriptor;
use crate::result::FixityResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for one physical store (mirror/copy location).
/// Used for attribution in results and errors, never for content equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoreId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StoreId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The stored bytestream could not be fully consumed (unreachable store, I/O
/// error, truncated read, store-specific fault).
///
/// Distinct from a mismatch: it means verification could not be performed,
/// not that it failed. Fixity cannot be partially verified, so no
/// [`FixityResult`] exists for a store that raised this.
#[derive(Debug, thiserror::Error)]
#[error("store {store}: {source}")]
pub struct StoreReadError {
    store: StoreId,
    source: std::io::Error,
}

impl StoreReadError {
    pub fn new(store: StoreId, source: std::io::Error) -> Self {
        Self { store, source }
    }

    /// The store the failed read is attributed to.
    pub fn store(&self) -> &StoreId {
        &self.store
    }
}

/// One physical copy of a piece of content in one backing store.
pub trait BackingStore {
    /// Identity of this store, for attribution in results and errors.
    fn id(&self) -> &StoreId;

    /// Stream the stored bytes exactly once and compare against the expected
    /// checksum and size. A readable-but-mismatched copy is an `Ok` result
    /// with the mismatching axes flagged; an unreadable copy is an error.
    fn check_fixity(
        &self,
        expected: &ChecksumDescriptor,
        expected_size: u64,
    ) -> Result<FixityResult, StoreReadError>;
}

// Mirror sets are often heterogeneous; let callers check boxed trait objects.
impl<S: BackingStore + ?Sized> BackingStore for Box<S> {
    fn id(&self) -> &StoreId {
        (**self).id()
    }

    fn check_fixity(
        &self,
        expected: &ChecksumDescriptor,
        expected_size: u64,
    ) -> Result<FixityResult, StoreReadError> {
        (**self).check_fixity(expected, expected_size)
    }
}
