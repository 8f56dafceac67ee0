//! `fixity check` – verify one stored file.

use anyhow::Result;
use fixity_core::checker::FixityChecker;
use fixity_core::checksum::ChecksumDescriptor;
use fixity_core::store::FileStore;
use std::path::Path;

/// Verify `path` against the expected checksum identifier and size.
/// Returns Ok(false) when the copy is readable but does not match.
pub fn run_check(path: &Path, checksum: &str, size: u64) -> Result<bool> {
    let expected = ChecksumDescriptor::parse(checksum)?;
    let checker = FixityChecker::new(expected, size);
    let result = checker.apply(&FileStore::from_path(path))?;

    if result.is_success() {
        println!("OK    {}", path.display());
    } else {
        println!(
            "FAIL  {}  checksum={} size={} (observed {}, {} bytes)",
            path.display(),
            if result.checksum_matched() { "ok" } else { "mismatch" },
            if result.size_matched() { "ok" } else { "mismatch" },
            result.observed_hex(),
            result.observed_size(),
        );
    }
    Ok(result.is_success())
}
