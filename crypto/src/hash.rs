use std::convert::{
    From,
    TryFrom
};
use std::fmt::{
    Display,
    Formatter
};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type Hash256Data = generic_array::GenericArray<u8, generic_array::typenum::U32>;

/// A 256-bit hash, used as the ID of blocks
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Hash256(Hash256Data);

impl Hash256 {
    pub fn null_hash() -> Self {
        Hash256::from(Hash256Data::from([0; 32]))
    }
    pub fn data(&self) -> &Hash256Data {
        &self.0
    }
}

impl Display for Hash256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0.as_slice()))
    }
}

impl From<Hash256Data> for Hash256 {
    fn from(data: Hash256Data) -> Self {
        Hash256(data)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(data: [u8; 32]) -> Self {
        Hash256(Hash256Data::from(data))
    }
}

/// Parses a hash from its hex representation, with or without a leading `0x`
impl TryFrom<&str> for Hash256 {
    type Error = hex::FromHexError;
    fn try_from(data: &str) -> Result<Self, Self::Error> {
        let data = data.trim_start_matches("0x");
        if data.len() != 64 {
            return Err(hex::FromHexError::InvalidStringLength)
        }
        Ok(Hash256(Hash256Data::clone_from_slice(&hex::decode(data)?)))
    }
}

impl FromStr for Hash256 {
    type Err = hex::FromHexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash256::try_from(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash256::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
