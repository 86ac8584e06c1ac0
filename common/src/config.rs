use structopt::StructOpt;

use crate::Network;

/// Chain-level configuration shared by every component that needs to know which network it is on
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// Run against the test network instead of the production network
    #[structopt(long)]
    pub testnet: bool,

    /// Disable checkpoint enforcement and checkpoint-based estimates
    #[structopt(long)]
    pub no_checkpoints: bool,
}

impl Config {
    /// The network selected by `--testnet`
    pub fn network(&self) -> Network {
        Network::from_testnet_flag(self.testnet)
    }

    /// Checkpoints are enabled unless `--no-checkpoints` is passed
    pub fn checkpoints_enabled(&self) -> bool {
        !self.no_checkpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mainnet_with_checkpoints() {
        let config = Config::from_iter(&["node"]);
        assert_eq!(config.network(), Network::Mainnet);
        assert!(config.checkpoints_enabled());
    }

    #[test]
    fn parses_flags() {
        let config = Config::from_iter(&["node", "--testnet", "--no-checkpoints"]);
        assert_eq!(config.network(), Network::Testnet);
        assert!(!config.checkpoints_enabled());
    }
}
