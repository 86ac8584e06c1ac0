#![deny(missing_docs)]

//! Types and interfaces shared between the node's chain-facing crates

extern crate structopt;

mod config;
mod network;
mod traits;

pub use config::Config;
pub use network::Network;
pub use traits::{ChainIndexNode, HashIndex, HeightIndex};
