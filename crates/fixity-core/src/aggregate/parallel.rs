//! Run per-store checks concurrently with a bounded number in flight.
//!
//! Keeps up to `max_concurrent` store checks running at once; when one
//! finishes, the next queued store is started until the queue is empty.
//! Checks of different stores share no mutable state, so the checker is
//! simply cloned into each task.

use anyhow::Result;
use tokio::task::JoinSet;

use super::{FixityAggregator, StoreOutcome};
use crate::checker::FixityChecker;
use crate::store::BackingStore;

pub(super) async fn check_all_parallel<S>(
    aggregator: &FixityAggregator,
    checker: &FixityChecker,
    stores: Vec<S>,
    max_concurrent: usize,
) -> Result<Vec<StoreOutcome>>
where
    S: BackingStore + Send + 'static,
{
    let max_concurrent = max_concurrent.max(1);
    let mut queue = stores.into_iter();
    let mut join_set = JoinSet::new();
    let mut outcomes = Vec::new();

    loop {
        while join_set.len() < max_concurrent {
            let Some(store) = queue.next() else {
                break;
            };
            let checker = checker.clone();
            // Each check is a blocking streaming read; keep it off the async workers.
            join_set.spawn_blocking(move || checker.apply(&store));
        }

        if join_set.is_empty() {
            break;
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        let outcome = res.map_err(|e| anyhow::anyhow!("fixity task join: {}", e))?;
        aggregator.log_outcome(&outcome);
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
