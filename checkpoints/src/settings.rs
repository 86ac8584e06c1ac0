use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use common::{Config, Network};

/// Runtime switches consulted by the checkpoint registry
///
/// Both values are read on every registry call and never cached.
pub trait CheckpointSettings {
    /// Whether checkpoints are enforced and used for estimates
    fn checkpoints_enabled(&self) -> bool;

    /// The network whose checkpoints are active
    fn network(&self) -> Network;
}

impl<T: CheckpointSettings + ?Sized> CheckpointSettings for &T {
    fn checkpoints_enabled(&self) -> bool {
        (**self).checkpoints_enabled()
    }
    fn network(&self) -> Network {
        (**self).network()
    }
}

impl<T: CheckpointSettings + ?Sized> CheckpointSettings for Arc<T> {
    fn checkpoints_enabled(&self) -> bool {
        (**self).checkpoints_enabled()
    }
    fn network(&self) -> Network {
        (**self).network()
    }
}

impl CheckpointSettings for Config {
    fn checkpoints_enabled(&self) -> bool {
        Config::checkpoints_enabled(self)
    }
    fn network(&self) -> Network {
        Config::network(self)
    }
}

/// Settings that may be changed while the registry is in use
///
/// Shared between threads through an `Arc`; readers always observe the latest stored values.
#[derive(Debug)]
pub struct RuntimeSettings {
    checkpoints_enabled: AtomicBool,
    testnet: AtomicBool,
}

impl RuntimeSettings {
    /// Creates settings for `network`
    pub fn new(network: Network, checkpoints_enabled: bool) -> Self {
        RuntimeSettings {
            checkpoints_enabled: AtomicBool::new(checkpoints_enabled),
            testnet: AtomicBool::new(network.is_testnet()),
        }
    }

    /// Creates settings from the command line configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.network(), config.checkpoints_enabled())
    }

    /// Turns checkpoints on or off
    pub fn set_checkpoints_enabled(&self, enabled: bool) {
        self.checkpoints_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Switches the active network
    pub fn set_network(&self, network: Network) {
        self.testnet.store(network.is_testnet(), Ordering::SeqCst);
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self::new(Network::Mainnet, true)
    }
}

impl CheckpointSettings for RuntimeSettings {
    fn checkpoints_enabled(&self) -> bool {
        self.checkpoints_enabled.load(Ordering::SeqCst)
    }
    fn network(&self) -> Network {
        Network::from_testnet_flag(self.testnet.load(Ordering::SeqCst))
    }
}
