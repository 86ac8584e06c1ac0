//! Cryptographic primitives shared by the node's crates

pub mod hash;

pub use hash::{Hash256, Hash256Data};
