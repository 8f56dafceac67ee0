//! The transmittable fixity check descriptor.
//!
//! A [`FixityChecker`] closes over the checksum and size recorded for a
//! bytestream, so the one check can be applied to every mirror of that
//! content. It is plain serializable data with no open handles, which is what
//! lets it cross thread or node boundaries and be applied concurrently
//! without synchronization.

use crate::checksum::{ChecksumDescriptor, DigestAlgorithm};
use crate::result::FixityResult;
use crate::store::{BackingStore, StoreReadError};
use serde::{Deserialize, Serialize};

/// Immutable descriptor of one fixity check: the expected checksum and the
/// expected byte count. Created per verification request from current
/// metadata and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixityChecker {
    expected_checksum: ChecksumDescriptor,
    expected_size: u64,
}

impl FixityChecker {
    pub fn new(expected_checksum: ChecksumDescriptor, expected_size: u64) -> Self {
        Self {
            expected_checksum,
            expected_size,
        }
    }

    /// Apply this check to one physical copy.
    ///
    /// Pure dispatch: the store streams its own content. A failure to read
    /// the store surfaces unchanged as [`StoreReadError`] rather than being
    /// folded into a result — an unreadable copy is not evidence of
    /// corruption.
    pub fn apply<S: BackingStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<FixityResult, StoreReadError> {
        tracing::debug!(store = %store.id(), "applying fixity check");
        store.check_fixity(&self.expected_checksum, self.expected_size)
    }

    /// Algorithm implied by the expected checksum, so a caller can
    /// pre-validate availability before dispatch. Unknown algorithms are
    /// rejected when the identifier is parsed, so resolution here cannot
    /// fail.
    pub fn digest_algorithm(&self) -> DigestAlgorithm {
        self.expected_checksum.algorithm()
    }

    /// Expected checksum, for audit logging by the caller.
    pub fn expected_checksum(&self) -> &ChecksumDescriptor {
        &self.expected_checksum
    }

    /// Expected byte count, for audit logging by the caller.
    pub fn expected_size(&self) -> u64 {
        self.expected_size
    }
}
