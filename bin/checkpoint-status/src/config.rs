use structopt::StructOpt;

use bin_common::Config as BinCommonConfig;
use common::Config as CommonConfig;

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case", name = "checkpoint-status")]
pub struct Config {
    #[structopt(flatten)]
    pub bin_common_config: BinCommonConfig,

    #[structopt(flatten)]
    pub common_config: CommonConfig,

    /// Cumulative transaction count of the chain tip to estimate progress for
    #[structopt(long)]
    pub chain_tx_count: Option<u64>,

    /// Timestamp of the chain tip (required with --chain-tx-count)
    #[structopt(long)]
    pub block_time: Option<i64>,

    /// Timestamp to estimate progress at, instead of the system clock
    #[structopt(long)]
    pub now: Option<i64>,
}
