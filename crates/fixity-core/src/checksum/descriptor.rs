//! Expected-checksum descriptor parsed from a compact identifier.

use super::DigestAlgorithm;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Why a checksum identifier could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecksumParseError {
    /// The algorithm token does not map to a known digest implementation.
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// The identifier or its digest portion is not validly encoded.
    #[error("malformed checksum identifier: {0}")]
    MalformedChecksum(String),
}

/// An expected checksum: digest algorithm plus raw digest bytes.
///
/// Parsed once from an identifier such as `sha256:<hex>` and immutable
/// afterwards. Older repository metadata records the same information as a
/// `urn:sha1:<hex>` URI; the `urn:` prefix is accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChecksumDescriptor {
    algorithm: DigestAlgorithm,
    value: Vec<u8>,
}

impl ChecksumDescriptor {
    /// Build a descriptor from already-decoded digest bytes. The byte length
    /// must match the algorithm's output length.
    pub fn new(algorithm: DigestAlgorithm, value: Vec<u8>) -> Result<Self, ChecksumParseError> {
        if value.len() != algorithm.output_len() {
            return Err(ChecksumParseError::MalformedChecksum(format!(
                "digest is {} bytes, {} produces {}",
                value.len(),
                algorithm,
                algorithm.output_len()
            )));
        }
        Ok(Self { algorithm, value })
    }

    /// Parse a `<algorithm>:<hex-digest>` identifier.
    pub fn parse(identifier: &str) -> Result<Self, ChecksumParseError> {
        let rest = identifier.strip_prefix("urn:").unwrap_or(identifier);
        let Some((token, hex_digest)) = rest.split_once(':') else {
            return Err(ChecksumParseError::MalformedChecksum(format!(
                "expected <algorithm>:<hex-digest>, got {identifier:?}"
            )));
        };
        let algorithm = DigestAlgorithm::from_token(token)
            .ok_or_else(|| ChecksumParseError::UnsupportedAlgorithm(token.to_string()))?;
        let value = hex::decode(hex_digest)
            .map_err(|e| ChecksumParseError::MalformedChecksum(format!("bad hex digest: {e}")))?;
        Self::new(algorithm, value)
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Raw digest bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Digest as lowercase hex.
    pub fn hex(&self) -> String {
        hex::encode(&self.value)
    }
}

impl fmt::Display for ChecksumDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.hex())
    }
}

impl FromStr for ChecksumDescriptor {
    type Err = ChecksumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serialized as the identifier string so checkers and manifests stay
// human-readable in JSON/TOML.
impl Serialize for ChecksumDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChecksumDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
