//! Sync progress estimation
//!
//! Work is counted as 1.0 per transaction up to the last checkpoint and
//! [`SIGCHECK_VERIFICATION_FACTOR`] per transaction after it. Transactions that haven't been seen
//! yet are projected from the time elapsed since the newest known block, at the network's
//! estimated daily rate.

use common::ChainIndexNode;

use crate::metadata::{CheckpointMetadata, SECONDS_PER_DAY, SIGCHECK_VERIFICATION_FACTOR};

/// Guesses how far along verification is at `node`, as a fraction in `[0, 1]`
///
/// Returns 0.0 if there is no node, or if neither work done nor work remaining can be estimated
/// (an empty chain, checked at the checkpoint's own timestamp, on a network with no projected
/// transactions).
pub fn guess_verification_progress<N>(meta: &CheckpointMetadata, node: Option<&N>, now: i64) -> f64
where
    N: ChainIndexNode + ?Sized,
{
    let node = match node {
        Some(node) => node,
        None => return 0.0,
    };

    let chain_tx_count = node.chain_tx_count();
    let (work_done, work_remaining) = if chain_tx_count <= meta.last_checkpoint_tx_count {
        let cheap_done = chain_tx_count as f64;
        let cheap_remaining = (meta.last_checkpoint_tx_count - chain_tx_count) as f64;
        let expensive_remaining = projected_transactions(meta, meta.last_checkpoint_time, now);
        (
            cheap_done,
            cheap_remaining + expensive_remaining * SIGCHECK_VERIFICATION_FACTOR,
        )
    } else {
        let cheap_done = meta.last_checkpoint_tx_count as f64;
        let expensive_done = (chain_tx_count - meta.last_checkpoint_tx_count) as f64;
        let expensive_remaining = projected_transactions(meta, node.block_time(), now);
        (
            cheap_done + expensive_done * SIGCHECK_VERIFICATION_FACTOR,
            expensive_remaining * SIGCHECK_VERIFICATION_FACTOR,
        )
    };

    let total_work = work_done + work_remaining;
    if total_work <= 0.0 {
        return 0.0;
    }
    work_done / total_work
}

/// Transactions expected between `since` and `now`; a clock behind `since` projects none
fn projected_transactions(meta: &CheckpointMetadata, since: i64, now: i64) -> f64 {
    let elapsed = now.saturating_sub(since).max(0) as f64;
    elapsed / SECONDS_PER_DAY * meta.estimated_tx_per_day
}
