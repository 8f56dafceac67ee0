//! `fixity digest` – compute a digest of a file.

use anyhow::Result;
use fixity_core::checksum::{self, DigestAlgorithm};
use fixity_core::config::FixityConfig;
use std::path::Path;

/// Compute and print the digest of the given file as a checksum identifier,
/// ready to paste into a manifest.
pub fn run_digest(path: &Path, algorithm: Option<&str>, cfg: &FixityConfig) -> Result<()> {
    let algorithm = match algorithm {
        Some(token) => DigestAlgorithm::from_token(token)
            .ok_or_else(|| anyhow::anyhow!("unsupported digest algorithm: {token}"))?,
        None => cfg.default_algorithm.unwrap_or(DigestAlgorithm::Sha256),
    };
    let digest = checksum::digest_path(algorithm, path)?;
    println!("{}:{}  {}", algorithm, digest, path.display());
    Ok(())
}
