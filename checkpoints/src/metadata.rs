use once_cell::sync::Lazy;

use common::Network;

use crate::table::CheckpointTable;

/// How many times more expensive transactions after the last checkpoint are expected to be to
/// verify than those before it, which skip signature checks
///
/// This can't be accurate for every system. Reindexing from a fast disk with a slow CPU can make it
/// as high as 20, while downloading over a slow network with a fast multicore CPU brings it close to 1.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// A network's checkpoints, plus the data needed to estimate sync progress past them
#[derive(Clone, Debug)]
pub struct CheckpointMetadata {
    /// The network's checkpoint table
    pub table: CheckpointTable,
    /// UNIX timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Total number of transactions between genesis and the last checkpoint (inclusive)
    pub last_checkpoint_tx_count: u64,
    /// Estimated number of transactions per day after the last checkpoint
    pub estimated_tx_per_day: f64,
}

// What makes a good checkpoint block?
// + Is surrounded by blocks with reasonable timestamps
// + Contains no strange transactions
const MAINNET_CHECKPOINTS: &[(u64, &str)] = &[
    (0,     "000000fcf39055b547e94e610f1008b8046f942bbb730e8b6dfa6232931902db"),
    (13000, "09f2b9ccb8024bb4eaf3d230945333d2b9418bbb0602d6de8d0f81cc5035136f"),
    (19021, "050190c7720c393171514350353ec7ac070bf721e79f053e521e0ea64b223d91"),
    (26012, "0384667174cf11623d727993781681f7d47e94a99d85c410d425c2522ba2d928"),
];

const TESTNET_CHECKPOINTS: &[(u64, &str)] = &[
    (0,     "000000fcf39055b547e94e610f1008b8046f942bbb730e8b6dfa6232931902db"),
];

static MAINNET: Lazy<CheckpointMetadata> = Lazy::new(|| CheckpointMetadata {
    table: CheckpointTable::from_hex_list(MAINNET_CHECKPOINTS)
        .expect("Hard-coded mainnet checkpoint table is valid"),
    last_checkpoint_time: 1_417_165_342,
    last_checkpoint_tx_count: 999_999,
    estimated_tx_per_day: 99_999.0,
});

static TESTNET: Lazy<CheckpointMetadata> = Lazy::new(|| CheckpointMetadata {
    table: CheckpointTable::from_hex_list(TESTNET_CHECKPOINTS)
        .expect("Hard-coded testnet checkpoint table is valid"),
    last_checkpoint_time: 1_411_788_333,
    last_checkpoint_tx_count: 0,
    estimated_tx_per_day: 60_000.0,
});

impl CheckpointMetadata {
    /// Gets the hard-coded checkpoint metadata for `network`
    pub fn for_network(network: Network) -> &'static CheckpointMetadata {
        match network {
            Network::Mainnet => &MAINNET,
            Network::Testnet => &TESTNET,
        }
    }
}
