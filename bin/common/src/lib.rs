#![deny(missing_docs)]

//! Offers common functionality to binary crates (logging configuration and data directories)

mod config;
/// Locating the node's data directory
pub mod data_dir;
/// Functions for setting up the logging system
pub mod logger;

pub use config::Config;
