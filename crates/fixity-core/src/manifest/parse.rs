//! Manifest JSON structures and loading.

use crate::checker::FixityChecker;
use crate::checksum::ChecksumDescriptor;
use crate::store::FileStore;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One audit manifest: a logical content id, its recorded checksum and size,
/// and every mirror path holding a copy.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditManifest {
    /// Stable identity of the content, independent of any physical copy.
    pub content_id: String,
    /// Recorded checksum identifier, e.g. `sha256:<hex>`.
    pub checksum: ChecksumDescriptor,
    /// Recorded size in bytes.
    pub size: u64,
    /// Physical copies to verify.
    pub copies: Vec<CopyEntry>,
}

impl AuditManifest {
    /// Checker closing over this manifest's recorded checksum and size.
    pub fn checker(&self) -> FixityChecker {
        FixityChecker::new(self.checksum.clone(), self.size)
    }
}

/// One physical copy location.
#[derive(Debug, Clone, Deserialize)]
pub struct CopyEntry {
    /// Optional store label; defaults to the path itself.
    #[serde(default)]
    pub store: Option<String>,
    /// Path of the stored file.
    pub path: PathBuf,
}

impl CopyEntry {
    /// File store handle for this copy.
    pub fn to_store(&self) -> FileStore {
        match &self.store {
            Some(id) => FileStore::new(id.as_str(), self.path.clone()),
            None => FileStore::from_path(self.path.clone()),
        }
    }
}

/// Load and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<AuditManifest> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let manifest: AuditManifest =
        serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::DigestAlgorithm;
    use crate::store::BackingStore;
    use std::io::Write;

    const MANIFEST: &str = r#"{
        "content_id": "obj-1",
        "checksum": "sha1:aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d",
        "size": 5,
        "copies": [
            { "store": "mirror-a", "path": "/mnt/a/obj-1" },
            { "path": "/mnt/b/obj-1" }
        ]
    }"#;

    #[test]
    fn parse_manifest_with_and_without_labels() {
        let m: AuditManifest = serde_json::from_str(MANIFEST).unwrap();
        assert_eq!(m.content_id, "obj-1");
        assert_eq!(m.checksum.algorithm(), DigestAlgorithm::Sha1);
        assert_eq!(m.size, 5);
        assert_eq!(m.copies.len(), 2);

        let labeled = m.copies[0].to_store();
        assert_eq!(labeled.id().as_str(), "mirror-a");
        let unlabeled = m.copies[1].to_store();
        assert_eq!(unlabeled.id().as_str(), "/mnt/b/obj-1");
    }

    #[test]
    fn checker_closes_over_recorded_metadata() {
        let m: AuditManifest = serde_json::from_str(MANIFEST).unwrap();
        let checker = m.checker();
        assert_eq!(checker.expected_size(), 5);
        assert_eq!(checker.digest_algorithm(), DigestAlgorithm::Sha1);
    }

    #[test]
    fn unknown_algorithm_fails_parsing() {
        let bad = MANIFEST.replace("sha1:", "crc9000:");
        let res: Result<AuditManifest, _> = serde_json::from_str(&bad);
        assert!(res.unwrap_err().to_string().contains("unsupported"));
    }

    #[test]
    fn load_manifest_from_disk() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(MANIFEST.as_bytes()).unwrap();
        f.flush().unwrap();
        let m = load_manifest(f.path()).unwrap();
        assert_eq!(m.content_id, "obj-1");
    }

    #[test]
    fn load_manifest_missing_file() {
        let err = load_manifest(Path::new("/nonexistent/manifest.json")).unwrap_err();
        assert!(err.to_string().contains("read"));
    }
}
