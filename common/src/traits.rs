use std::collections::HashMap;
use std::convert::TryFrom;

use crypto::Hash256;

/// A block's entry in the chain index, as seen by consumers that only need its summary data
pub trait ChainIndexNode {
    /// Total number of transactions in the chain from genesis up to and including this block
    fn chain_tx_count(&self) -> u64;

    /// The block's timestamp (UNIX seconds)
    fn block_time(&self) -> i64;
}

impl<T: ChainIndexNode + ?Sized> ChainIndexNode for &T {
    fn chain_tx_count(&self) -> u64 {
        (**self).chain_tx_count()
    }
    fn block_time(&self) -> i64 {
        (**self).block_time()
    }
}

/// Lookup of chain index nodes by block hash
///
/// Implementors own whatever locking the underlying index needs; lookups only require a shared
/// reference
pub trait HashIndex {
    /// The node type stored in the index
    type Node: ChainIndexNode;

    /// Gets the node for the block with the given hash, if it is indexed
    fn node_by_hash(&self, hash: &Hash256) -> Option<&Self::Node>;
}

/// Lookup of chain index nodes by main chain height
pub trait HeightIndex {
    /// The node type stored in the index
    type Node: ChainIndexNode;

    /// Gets the main chain node at the given height, if the chain is that long
    fn node_by_height(&self, height: u64) -> Option<&Self::Node>;
}

impl<N: ChainIndexNode> HashIndex for HashMap<Hash256, N> {
    type Node = N;

    fn node_by_hash(&self, hash: &Hash256) -> Option<&N> {
        self.get(hash)
    }
}

impl<N: ChainIndexNode> HeightIndex for Vec<N> {
    type Node = N;

    fn node_by_height(&self, height: u64) -> Option<&N> {
        let height = usize::try_from(height).ok()?;
        self.get(height)
    }
}
