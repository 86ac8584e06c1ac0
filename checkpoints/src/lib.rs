#![deny(missing_docs)]

//! # Checkpoints
//! Hard-coded `(height, block hash)` checkpoints anchoring the chain's history, and sync progress
//! estimation based on them
//!
//! A block that contradicts a checkpoint must be rejected outright. Blocks at or before the last
//! checkpoint present in the chain index may skip signature checks.

use log::{debug, trace, warn};

use common::{ChainIndexNode, HashIndex, Network};
use crypto::Hash256;

mod clock;
mod error;
mod metadata;
pub mod progress;
mod settings;
mod table;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use metadata::{CheckpointMetadata, SIGCHECK_VERIFICATION_FACTOR};
pub use settings::{CheckpointSettings, RuntimeSettings};
pub use table::CheckpointTable;

/// Read-only access to the active network's checkpoints
///
/// The registry holds no state of its own beyond its settings handle. The enable switch and the
/// network selection are read on every call.
#[derive(Debug)]
pub struct CheckpointRegistry<S>
where
    S: CheckpointSettings,
{
    settings: S,
}

impl<S> CheckpointRegistry<S>
where
    S: CheckpointSettings,
{
    /// Creates a registry reading its switches from `settings`
    pub fn new(settings: S) -> Self {
        CheckpointRegistry { settings }
    }

    /// Gets the settings handle
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// The active network
    pub fn network(&self) -> Network {
        self.settings.network()
    }

    /// Gets the checkpoint metadata of the active network
    pub fn active_metadata(&self) -> &'static CheckpointMetadata {
        CheckpointMetadata::for_network(self.settings.network())
    }

    /// Checks a block against the active checkpoints
    ///
    /// # Returns
    /// `false` only if `height` is checkpointed with a different hash. Heights without a
    /// checkpoint, and every block while checkpoints are disabled, pass.
    pub fn check_block(&self, height: u64, hash: &Hash256) -> bool {
        if !self.settings.checkpoints_enabled() {
            return true;
        }

        match self.active_metadata().table.hash(height) {
            None => true,
            Some(expected) if expected == hash => {
                debug!("Checkpoint passed for height {} {}", height, hash);
                true
            }
            Some(expected) => {
                warn!(
                    "Checkpoint failed for height {}. Expected hash: {}, fetched hash: {}",
                    height, expected, hash
                );
                false
            }
        }
    }

    /// Estimates the chain's total height as the height of the last checkpoint
    ///
    /// Only meant for display; 0 while checkpoints are disabled.
    pub fn total_blocks_estimate(&self) -> u64 {
        if !self.settings.checkpoints_enabled() {
            return 0;
        }
        self.active_metadata().table.max_height()
    }

    /// Whether `height` is at or below the last active checkpoint
    pub fn in_checkpoint_zone(&self, height: u64) -> bool {
        self.settings.checkpoints_enabled() && self.active_metadata().table.in_checkpoint_zone(height)
    }

    /// Finds the highest checkpointed block present in `index`
    ///
    /// # Returns
    /// The chain index node of that block, or `None` if checkpoints are disabled or no checkpointed
    /// block has been indexed yet
    pub fn last_checkpoint_present<'a, I>(&self, index: &'a I) -> Option<&'a I::Node>
    where
        I: HashIndex + ?Sized,
    {
        if !self.settings.checkpoints_enabled() {
            return None;
        }

        self.active_metadata()
            .table
            .iter()
            .rev()
            .find_map(|(height, hash)| {
                let node = index.node_by_hash(hash);
                trace!("Checkpoint {} at height {} indexed: {}", hash, height, node.is_some());
                node
            })
    }

    /// Guesses how far along verification is at `node`, as a fraction in `[0, 1]`
    ///
    /// See [`progress::guess_verification_progress`].
    pub fn guess_verification_progress<N>(&self, node: Option<&N>, now: i64) -> f64
    where
        N: ChainIndexNode + ?Sized,
    {
        progress::guess_verification_progress(self.active_metadata(), node, now)
    }

    /// Like [`guess_verification_progress`](Self::guess_verification_progress), taking the time
    /// from `clock`
    pub fn guess_verification_progress_at<N, C>(&self, node: Option<&N>, clock: &C) -> f64
    where
        N: ChainIndexNode + ?Sized,
        C: Clock + ?Sized,
    {
        self.guess_verification_progress(node, clock.now())
    }
}

impl Default for CheckpointRegistry<RuntimeSettings> {
    fn default() -> Self {
        CheckpointRegistry::new(RuntimeSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::convert::TryFrom;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Node {
        height: u64,
        chain_tx_count: u64,
        block_time: i64,
    }

    impl ChainIndexNode for Node {
        fn chain_tx_count(&self) -> u64 {
            self.chain_tx_count
        }
        fn block_time(&self) -> i64 {
            self.block_time
        }
    }

    fn hash(hex: &str) -> Hash256 {
        Hash256::try_from(hex).unwrap()
    }

    fn mainnet_hash(height: u64) -> Hash256 {
        CheckpointMetadata::for_network(Network::Mainnet).table.hash(height).unwrap().clone()
    }

    fn index_with(heights: &[u64]) -> HashMap<Hash256, Node> {
        heights
            .iter()
            .map(|&height| {
                let node = Node { height, chain_tx_count: height * 2, block_time: 0 };
                (mainnet_hash(height), node)
            })
            .collect()
    }

    fn registry() -> CheckpointRegistry<RuntimeSettings> {
        CheckpointRegistry::default()
    }

    #[test]
    fn accepts_checkpointed_hashes() {
        let registry = registry();
        for (height, expected) in registry.active_metadata().table.iter() {
            assert!(registry.check_block(height, expected));
        }
        assert!(registry.check_block(
            19021,
            &hash("050190c7720c393171514350353ec7ac070bf721e79f053e521e0ea64b223d91")
        ));
    }

    #[test]
    fn rejects_mismatched_hashes() {
        let registry = registry();
        for (height, _) in registry.active_metadata().table.iter() {
            assert!(!registry.check_block(height, &Hash256::null_hash()));
            assert!(!registry.check_block(height, &mainnet_hash(if height == 0 { 13000 } else { 0 })));
        }
    }

    #[test]
    fn ignores_unknown_heights() {
        let registry = registry();
        for height in &[1, 12999, 13001, 26013, u64::max_value()] {
            assert!(registry.check_block(*height, &Hash256::null_hash()));
            assert!(registry.check_block(*height, &mainnet_hash(13000)));
        }
    }

    #[test]
    fn estimates_total_blocks() {
        assert_eq!(registry().total_blocks_estimate(), 26012);
    }

    #[test]
    fn disabled_bypasses_everything() {
        let registry = CheckpointRegistry::new(RuntimeSettings::new(Network::Mainnet, false));
        assert!(registry.check_block(0, &Hash256::null_hash()));
        assert!(registry.check_block(13000, &Hash256::null_hash()));
        assert_eq!(registry.total_blocks_estimate(), 0);
        assert!(!registry.in_checkpoint_zone(0));
        assert!(registry.last_checkpoint_present(&index_with(&[0, 13000, 19021, 26012])).is_none());
    }

    #[test]
    fn finds_highest_present_checkpoint() {
        let registry = registry();
        let index = index_with(&[0, 13000, 19021]);
        let node = registry.last_checkpoint_present(&index).unwrap();
        assert_eq!(node.height, 19021);
        assert_eq!(node.chain_tx_count, 38042);

        let index = index_with(&[0]);
        assert_eq!(registry.last_checkpoint_present(&index).map(|node| node.height), Some(0));
    }

    #[test]
    fn no_checkpoint_present() {
        let registry = registry();
        let mut index = HashMap::new();
        index.insert(Hash256::null_hash(), Node { height: 5, chain_tx_count: 5, block_time: 0 });
        assert!(registry.last_checkpoint_present(&index).is_none());
        assert!(registry.last_checkpoint_present(&HashMap::<Hash256, Node>::new()).is_none());
    }

    #[test]
    fn checkpoint_zone() {
        let registry = registry();
        assert!(registry.in_checkpoint_zone(26012));
        assert!(!registry.in_checkpoint_zone(26013));
    }

    #[test]
    fn switching_network_switches_everything() {
        let settings = Arc::new(RuntimeSettings::default());
        let registry = CheckpointRegistry::new(settings.clone());
        let wrong = Hash256::null_hash();

        assert_eq!(registry.network(), Network::Mainnet);
        assert_eq!(registry.active_metadata().last_checkpoint_tx_count, 999_999);
        assert_eq!(registry.total_blocks_estimate(), 26012);
        assert!(!registry.check_block(13000, &wrong));

        settings.set_network(Network::Testnet);
        assert_eq!(registry.network(), Network::Testnet);
        assert_eq!(registry.active_metadata().last_checkpoint_tx_count, 0);
        assert_eq!(registry.active_metadata().last_checkpoint_time, 1_411_788_333);
        assert_eq!(registry.total_blocks_estimate(), 0);
        assert!(registry.check_block(13000, &wrong));
        assert!(!registry.check_block(0, &wrong));
        assert!(!registry.in_checkpoint_zone(1));

        settings.set_network(Network::Mainnet);
        assert_eq!(registry.total_blocks_estimate(), 26012);
        assert!(!registry.check_block(13000, &wrong));
    }

    #[test]
    fn enable_switch_is_read_every_call() {
        let settings = Arc::new(RuntimeSettings::default());
        let registry = CheckpointRegistry::new(settings.clone());
        let wrong = Hash256::null_hash();

        assert!(!registry.check_block(0, &wrong));
        settings.set_checkpoints_enabled(false);
        assert!(registry.check_block(0, &wrong));
        assert_eq!(registry.total_blocks_estimate(), 0);
        settings.set_checkpoints_enabled(true);
        assert!(!registry.check_block(0, &wrong));
    }

    #[test]
    fn shared_between_threads() {
        let registry = Arc::new(registry());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || {
                    (0..100).all(|_| registry.check_block(13000, &mainnet_hash(13000)) && registry.total_blocks_estimate() == 26012)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn progress_uses_active_network() {
        let settings = Arc::new(RuntimeSettings::default());
        let registry = CheckpointRegistry::new(settings.clone());
        let meta = registry.active_metadata();
        let tip = Node { height: 26012, chain_tx_count: meta.last_checkpoint_tx_count, block_time: meta.last_checkpoint_time };

        assert_eq!(registry.guess_verification_progress::<Node>(None, meta.last_checkpoint_time), 0.0);
        assert_eq!(registry.guess_verification_progress(Some(&tip), meta.last_checkpoint_time), 1.0);

        let clock = FixedClock(meta.last_checkpoint_time + 86_400);
        let mainnet_progress = registry.guess_verification_progress_at(Some(&tip), &clock);
        let expected = 999_999.0 / (999_999.0 + 99_999.0 * SIGCHECK_VERIFICATION_FACTOR);
        assert!((mainnet_progress - expected).abs() < 1e-12);

        // On testnet the same tip is entirely past the (genesis-only) checkpoint
        settings.set_network(Network::Testnet);
        let testnet_progress = registry.guess_verification_progress_at(Some(&tip), &clock);
        assert!(testnet_progress > mainnet_progress);
    }
}
