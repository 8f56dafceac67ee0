//! Per-store fixity outcome.

use crate::checksum::ChecksumDescriptor;
use crate::store::StoreId;
use serde::{Serialize, Serializer};

/// Outcome of checking one physical copy against an expected checksum and
/// size.
///
/// The two axes are independent: a copy may match on size but not content, or
/// the other way around. Both flags are always explicitly set; a result is
/// immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixityResult {
    store: StoreId,
    checksum_matched: bool,
    size_matched: bool,
    #[serde(serialize_with = "hex_digest")]
    observed_digest: Vec<u8>,
    observed_size: u64,
}

impl FixityResult {
    /// Build a result by comparing the observed digest and byte count to the
    /// expectation. Both flags are derived here so neither can be left
    /// unset.
    pub fn compare(
        store: StoreId,
        expected: &ChecksumDescriptor,
        expected_size: u64,
        observed_digest: Vec<u8>,
        observed_size: u64,
    ) -> Self {
        Self {
            checksum_matched: expected.value() == &observed_digest[..],
            size_matched: expected_size == observed_size,
            store,
            observed_digest,
            observed_size,
        }
    }

    /// The store this result is attributed to.
    pub fn store(&self) -> &StoreId {
        &self.store
    }

    pub fn checksum_matched(&self) -> bool {
        self.checksum_matched
    }

    pub fn size_matched(&self) -> bool {
        self.size_matched
    }

    /// Both axes matched.
    pub fn is_success(&self) -> bool {
        self.checksum_matched && self.size_matched
    }

    /// Digest actually computed over the stored bytes.
    pub fn observed_digest(&self) -> &[u8] {
        &self.observed_digest
    }

    /// Observed digest as lowercase hex, for reporting.
    pub fn observed_hex(&self) -> String {
        hex::encode(&self.observed_digest)
    }

    /// Byte count actually read from the store.
    pub fn observed_size(&self) -> u64 {
        self.observed_size
    }
}

fn hex_digest<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
