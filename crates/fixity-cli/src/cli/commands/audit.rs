//! `fixity audit` – verify every mirror copy listed in a manifest.

use anyhow::Result;
use fixity_core::aggregate::FixityAggregator;
use fixity_core::config::FixityConfig;
use fixity_core::manifest;
use std::path::Path;

/// Check all copies in the manifest, up to `jobs` concurrently.
/// Returns the number of copies that did not verify clean.
pub async fn run_audit(path: &Path, cfg: &FixityConfig, jobs: Option<usize>) -> Result<u32> {
    let m = manifest::load_manifest(path)?;
    let checker = m.checker();
    let stores: Vec<_> = m.copies.iter().map(|c| c.to_store()).collect();
    let aggregator = FixityAggregator::new(m.content_id.as_str());

    let max_concurrent = jobs.unwrap_or(cfg.max_concurrent_checks);
    let outcomes = aggregator
        .check_all_parallel(&checker, stores, max_concurrent)
        .await?;

    let mut unhealthy = 0u32;
    for outcome in &outcomes {
        match outcome {
            Ok(r) if r.is_success() => println!("OK    {}", r.store()),
            Ok(r) => {
                unhealthy += 1;
                println!(
                    "FAIL  {}  checksum={} size={} (observed {}, {} bytes)",
                    r.store(),
                    if r.checksum_matched() { "ok" } else { "mismatch" },
                    if r.size_matched() { "ok" } else { "mismatch" },
                    r.observed_hex(),
                    r.observed_size(),
                );
            }
            Err(e) => {
                unhealthy += 1;
                println!("ERROR {}", e);
            }
        }
    }
    println!(
        "{}: {} copies checked, {} unhealthy",
        m.content_id,
        outcomes.len(),
        unhealthy
    );
    Ok(unhealthy)
}
