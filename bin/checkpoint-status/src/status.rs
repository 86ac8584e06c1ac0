use serde::Serialize;

use checkpoints::{CheckpointRegistry, CheckpointSettings};
use common::{ChainIndexNode, Network};
use crypto::Hash256;

/// Chain tip described on the command line
#[derive(Debug)]
pub struct Tip {
    pub chain_tx_count: u64,
    pub block_time: i64,
}

impl ChainIndexNode for Tip {
    fn chain_tx_count(&self) -> u64 {
        self.chain_tx_count
    }
    fn block_time(&self) -> i64 {
        self.block_time
    }
}

#[derive(Debug, Serialize)]
pub struct CheckpointEntry {
    pub height: u64,
    pub hash: Hash256,
}

/// Snapshot of the registry as seen by the running configuration
#[derive(Debug, Serialize)]
pub struct Status {
    pub network: Network,
    pub checkpoints_enabled: bool,
    pub total_blocks_estimate: u64,
    pub checkpoints: Vec<CheckpointEntry>,
    pub last_checkpoint_time: i64,
    pub last_checkpoint_tx_count: u64,
    pub estimated_tx_per_day: f64,
    pub verification_progress: Option<f64>,
}

impl Status {
    pub fn collect<S: CheckpointSettings>(registry: &CheckpointRegistry<S>, tip: Option<&Tip>, now: i64) -> Self {
        let meta = registry.active_metadata();
        Status {
            network: registry.network(),
            checkpoints_enabled: registry.settings().checkpoints_enabled(),
            total_blocks_estimate: registry.total_blocks_estimate(),
            checkpoints: meta
                .table
                .iter()
                .map(|(height, hash)| CheckpointEntry { height, hash: hash.clone() })
                .collect(),
            last_checkpoint_time: meta.last_checkpoint_time,
            last_checkpoint_tx_count: meta.last_checkpoint_tx_count,
            estimated_tx_per_day: meta.estimated_tx_per_day,
            verification_progress: tip.map(|tip| registry.guess_verification_progress(Some(tip), now)),
        }
    }
}
