use std::collections::btree_map::{BTreeMap, Entry};
use std::convert::TryFrom;

use crypto::Hash256;

use crate::error::{Error, Result};

/// An ordered set of `(height, block hash)` checkpoints for one network
///
/// Heights are unique and the genesis height is always present, so a table is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckpointTable(BTreeMap<u64, Hash256>);

impl CheckpointTable {
    /// Builds a table from a list of checkpoints
    ///
    /// Entries may be listed in any order. Repeating a checkpoint with the same hash is allowed.
    ///
    /// # Errors
    /// If the list is empty, has no genesis entry, or lists two different hashes for one height
    pub fn from_list<I>(list: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, Hash256)>,
    {
        let mut checkpoints = BTreeMap::new();
        for (height, hash) in list {
            match checkpoints.entry(height) {
                Entry::Vacant(entry) => {
                    entry.insert(hash);
                }
                Entry::Occupied(entry) => {
                    if *entry.get() != hash {
                        return Err(Error::ConflictingCheckpoint {
                            height,
                            existing: entry.get().clone(),
                            conflicting: hash,
                        });
                    }
                }
            }
        }

        if checkpoints.is_empty() {
            return Err(Error::Empty);
        }
        if !checkpoints.contains_key(&0) {
            return Err(Error::MissingGenesis);
        }
        Ok(CheckpointTable(checkpoints))
    }

    /// Builds a table from hex hash literals
    pub fn from_hex_list(list: &[(u64, &str)]) -> Result<Self> {
        let parsed = list
            .iter()
            .map(|&(height, hash)| {
                Hash256::try_from(hash)
                    .map(|hash| (height, hash))
                    .map_err(|source| Error::InvalidHash { height, source })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_list(parsed)
    }

    /// Gets the checkpointed hash at `height`, if that height is checkpointed
    pub fn hash(&self, height: u64) -> Option<&Hash256> {
        self.0.get(&height)
    }

    /// Height of the last checkpoint
    pub fn max_height(&self) -> u64 {
        self.0.keys().next_back().copied().unwrap_or(0)
    }

    /// Whether `height` is at or below the last checkpoint
    pub fn in_checkpoint_zone(&self, height: u64) -> bool {
        height <= self.max_height()
    }

    /// Number of checkpoints
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a table built by `from_list`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the checkpoints in ascending height order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u64, &Hash256)> {
        self.0.iter().map(|(height, hash)| (*height, hash))
    }
}
