//! Multi-store aggregation: one checker applied across every mirror.
//!
//! A corrupt or unreachable mirror never stops the remaining checks. The
//! caller needs the complete per-mirror picture to drive targeted repair, so
//! every input store produces exactly one outcome entry.

mod parallel;

use crate::checker::FixityChecker;
use crate::result::FixityResult;
use crate::store::{BackingStore, StoreReadError};
use anyhow::Result;

/// Outcome for one store: a full two-axis comparison, or the read failure
/// that prevented one.
pub type StoreOutcome = std::result::Result<FixityResult, StoreReadError>;

/// Applies one [`FixityChecker`] across every store holding a copy of the
/// same logical content.
///
/// Scoped to one verification run: the logical content id given at
/// construction tags all log output for the run, so concurrent audits of
/// different objects stay distinguishable.
#[derive(Debug, Clone)]
pub struct FixityAggregator {
    content_id: String,
}

impl FixityAggregator {
    /// Aggregator for one logical piece of content. The id is used for
    /// logging and reporting only.
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
        }
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    /// Check every store in turn. Exactly one outcome per input store, in
    /// input order. Mismatches and read failures are collected, never
    /// short-circuited.
    pub fn check_all<S: BackingStore>(
        &self,
        checker: &FixityChecker,
        stores: &[S],
    ) -> Vec<StoreOutcome> {
        let mut outcomes = Vec::with_capacity(stores.len());
        for store in stores {
            let outcome = checker.apply(store);
            self.log_outcome(&outcome);
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Like [`check_all`](Self::check_all), but with up to `max_concurrent`
    /// store checks in flight at once. Outcomes arrive in completion order;
    /// each is keyed by store identity.
    pub async fn check_all_parallel<S>(
        &self,
        checker: &FixityChecker,
        stores: Vec<S>,
        max_concurrent: usize,
    ) -> Result<Vec<StoreOutcome>>
    where
        S: BackingStore + Send + 'static,
    {
        parallel::check_all_parallel(self, checker, stores, max_concurrent).await
    }

    fn log_outcome(&self, outcome: &StoreOutcome) {
        match outcome {
            Ok(r) if r.is_success() => {
                tracing::debug!(content = %self.content_id, store = %r.store(), "fixity ok");
            }
            Ok(r) => {
                tracing::warn!(
                    content = %self.content_id,
                    store = %r.store(),
                    checksum_matched = r.checksum_matched(),
                    size_matched = r.size_matched(),
                    observed_size = r.observed_size(),
                    "fixity mismatch"
                );
            }
            Err(e) => {
                tracing::error!(content = %self.content_id, "unreadable store: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::ChecksumDescriptor;
    use crate::store::FileStore;
    use std::fs;

    const HELLO_SHA1: &str = "sha1:aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";

    fn hello_checker() -> FixityChecker {
        FixityChecker::new(ChecksumDescriptor::parse(HELLO_SHA1).unwrap(), 5)
    }

    fn three_mirrors(dir: &std::path::Path) -> Vec<FileStore> {
        fs::write(dir.join("a.bin"), b"hello").unwrap();
        fs::write(dir.join("b.bin"), b"hello").unwrap();
        fs::write(dir.join("c.bin"), b"hellq").unwrap();
        vec![
            FileStore::new("mirror-a", dir.join("a.bin")),
            FileStore::new("mirror-b", dir.join("b.bin")),
            FileStore::new("mirror-c", dir.join("c.bin")),
        ]
    }

    #[test]
    fn one_outcome_per_store_no_short_circuit() {
        let dir = tempfile::tempdir().unwrap();
        let stores = three_mirrors(dir.path());
        let outcomes = FixityAggregator::new("obj-1").check_all(&hello_checker(), &stores);

        assert_eq!(outcomes.len(), 3);
        let healthy = outcomes
            .iter()
            .filter(|o| o.as_ref().is_ok_and(|r| r.is_success()))
            .count();
        assert_eq!(healthy, 2);
        // The corrupt copy is attributed, not dropped.
        let bad = outcomes[2].as_ref().unwrap();
        assert_eq!(bad.store().as_str(), "mirror-c");
        assert!(!bad.checksum_matched());
        assert!(bad.size_matched());
    }

    #[test]
    fn sequential_outcomes_preserve_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let stores = three_mirrors(dir.path());
        let outcomes = FixityAggregator::new("obj-1").check_all(&hello_checker(), &stores);
        let ids: Vec<_> = outcomes
            .iter()
            .map(|o| o.as_ref().unwrap().store().as_str().to_string())
            .collect();
        assert_eq!(ids, ["mirror-a", "mirror-b", "mirror-c"]);
    }

    #[test]
    fn unreadable_store_is_an_error_entry_among_results() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.bin"), b"hello").unwrap();
        fs::write(dir.path().join("b.bin"), b"hello").unwrap();
        let stores = vec![
            FileStore::new("mirror-a", dir.path().join("a.bin")),
            FileStore::new("mirror-gone", dir.path().join("gone.bin")),
            FileStore::new("mirror-b", dir.path().join("b.bin")),
        ];
        let outcomes = FixityAggregator::new("obj-1").check_all(&hello_checker(), &stores);

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].as_ref().unwrap().is_success());
        assert!(outcomes[2].as_ref().unwrap().is_success());
        let err = outcomes[1].as_ref().unwrap_err();
        assert_eq!(err.store().as_str(), "mirror-gone");
    }
}
