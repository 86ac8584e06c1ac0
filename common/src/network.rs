use std::fmt::{
    Display,
    Formatter
};

use serde::{Deserialize, Serialize};

/// The network a node participates in
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production network
    Mainnet,
    /// The test network
    Testnet,
}

impl Network {
    /// Selects the network from a `--testnet` style flag
    pub fn from_testnet_flag(testnet: bool) -> Self {
        if testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Whether this is the test network
    pub fn is_testnet(self) -> bool {
        self == Network::Testnet
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Mainnet
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
