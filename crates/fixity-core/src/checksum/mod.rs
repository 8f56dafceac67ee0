//! Checksum identifiers and digest computation.
//!
//! A checksum identifier is the compact `<algorithm>:<hex-digest>` string the
//! repository records as authoritative metadata for a bytestream. This module
//! parses identifiers into [`ChecksumDescriptor`]s and computes digests of
//! local files for recording new content.

mod algorithm;
mod descriptor;

pub use algorithm::DigestAlgorithm;
pub use descriptor::{ChecksumDescriptor, ChecksumParseError};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute the digest of a file and return it as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large files.
pub fn digest_path(algorithm: DigestAlgorithm, path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = algorithm.hasher();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn digest_path_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let digest = digest_path(DigestAlgorithm::Sha256, f.path()).unwrap();
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_path_known_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello\n").unwrap();
        f.flush().unwrap();
        let digest = digest_path(DigestAlgorithm::Sha256, f.path()).unwrap();
        assert_eq!(
            digest,
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
    }

    #[test]
    fn digest_path_sha1_vector() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello").unwrap();
        f.flush().unwrap();
        let digest = digest_path(DigestAlgorithm::Sha1, f.path()).unwrap();
        assert_eq!(digest, "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
    }

    #[test]
    fn digest_path_missing_file() {
        let err = digest_path(DigestAlgorithm::Sha256, Path::new("/nonexistent/f")).unwrap_err();
        assert!(err.to_string().contains("open"));
    }
}
