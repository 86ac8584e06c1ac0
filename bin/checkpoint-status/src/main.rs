use log::{error, info};
use structopt::StructOpt;

use checkpoints::{CheckpointRegistry, Clock, SystemClock};

mod config;
mod status;

use config::Config;
use status::{Status, Tip};

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error("--block-time is required with --chain-tx-count")]
    MissingBlockTime,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() {
    // Command Line Arguments
    let config = Config::from_args();

    // Logging
    if let Err(err) = bin_common::logger::init(&config.bin_common_config, "checkpoint-status") {
        eprintln!("Failed to initialise logger: {}", err);
        std::process::exit(1);
    }

    // Main
    if let Err(err) = run(&config) {
        error!("Unable to report checkpoint status! {}", err);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Error> {
    let registry = CheckpointRegistry::new(&config.common_config);
    info!("Using {} checkpoints", registry.network());

    let tip = match (config.chain_tx_count, config.block_time) {
        (Some(chain_tx_count), Some(block_time)) => Some(Tip { chain_tx_count, block_time }),
        (Some(_), None) => return Err(Error::MissingBlockTime),
        (None, _) => None,
    };
    let now = config.now.unwrap_or_else(|| SystemClock.now());

    let status = Status::collect(&registry, tip.as_ref(), now);
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
