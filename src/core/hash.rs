use crate::error::{NodeError, Result};
use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol hash length in bytes
pub const HASH_LENGTH: usize = 32;

/// Fixed-length digest used as transaction and block identifier.
///
/// The all-zero value doubles as "not yet computed" wherever a hash is cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash([u8; HASH_LENGTH]);

impl Hash {
    pub const ZERO: Hash = Hash([0u8; HASH_LENGTH]);

    pub const fn new(bytes: [u8; HASH_LENGTH]) -> Hash {
        Hash(bytes)
    }

    /// Builds a hash from exactly `HASH_LENGTH` bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Hash> {
        let array: [u8; HASH_LENGTH] =
            bytes.try_into().map_err(|_| NodeError::InvalidLength {
                expected: HASH_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Hash(array))
    }

    pub fn is_zero(&self) -> bool {
        *self == Hash::ZERO
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HEXLOWER.encode(&self.0))
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
