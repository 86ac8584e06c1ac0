use crypto::Hash256;

/// Type alias for checkpoint operations that may result in an error
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for building checkpoint tables
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a checkpoint table is built from an empty list
    #[error("Checkpoint table has no entries")]
    Empty,

    /// Returned when a checkpoint table does not anchor the genesis block
    #[error("Checkpoint table has no genesis (height 0) entry")]
    MissingGenesis,

    /// Returned when the same height is listed with two different hashes
    #[error("Conflicting checkpoints at height {height}: {existing} and {conflicting}")]
    ConflictingCheckpoint {
        /// Height listed twice
        height: u64,
        /// Hash that was listed first
        existing: Hash256,
        /// Hash that contradicts it
        conflicting: Hash256,
    },

    /// Returned when a checkpoint hash literal is not a valid 256-bit hex string
    #[error("Invalid checkpoint hash at height {height}")]
    InvalidHash {
        /// Height of the offending entry
        height: u64,
        /// Underlying decode error
        #[source]
        source: hex::FromHexError,
    },
}
