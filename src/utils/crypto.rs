use ring::digest::{Context, SHA256, SHA384, SHA512};
use ripemd::Ripemd160;
use sha3::{Digest, Keccak256, Sha3_256};

use crate::core::{Hash, HASH_LENGTH};
use crate::error::{NodeError, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithm used when no hash algorithm is configured
pub const DEFAULT_HASH_ALGORITHM: &str = "SHA256";

/// Hash implementations selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Keccak256,
    Ripemd160,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Ripemd160,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Keccak256 => "KECCAK256",
            HashAlgorithm::Ripemd160 => "RIPEMD160",
        }
    }

    /// Raw digest, before truncation to the protocol hash length
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => ring_digest(&SHA256, data),
            HashAlgorithm::Sha384 => ring_digest(&SHA384, data),
            HashAlgorithm::Sha512 => ring_digest(&SHA512, data),
            HashAlgorithm::Sha3_256 => Sha3_256::digest(data).to_vec(),
            HashAlgorithm::Keccak256 => Keccak256::digest(data).to_vec(),
            HashAlgorithm::Ripemd160 => ripemd160_digest(data),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NodeError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn ring_digest(algorithm: &'static ring::digest::Algorithm, data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(algorithm);
    context.update(data);
    context.finish().as_ref().to_vec()
}

fn ripemd160_digest(data: &[u8]) -> Vec<u8> {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Hash algorithm setting handed to the hasher at construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    pub algorithm: Option<String>,
}

impl HashConfig {
    pub fn new(algorithm: impl Into<String>) -> HashConfig {
        HashConfig {
            algorithm: Some(algorithm.into()),
        }
    }
}

/// Name of the algorithm to use: the configured one, or SHA256 when unset
pub fn select_algorithm(config: &HashConfig) -> &str {
    match config.algorithm.as_deref() {
        Some(name) => name,
        None => {
            debug!("No hash algorithm configured, using {DEFAULT_HASH_ALGORITHM}");
            DEFAULT_HASH_ALGORITHM
        }
    }
}

/// Digests content with the selected algorithm, truncated to `HASH_LENGTH`.
///
/// Holds no mutable state and may be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentHasher {
    algorithm: HashAlgorithm,
}

impl Default for ContentHasher {
    fn default() -> Self {
        ContentHasher::with_algorithm(HashAlgorithm::Sha256)
    }
}

impl ContentHasher {
    pub fn new(config: &HashConfig) -> Result<ContentHasher> {
        let algorithm = select_algorithm(config).parse::<HashAlgorithm>()?;
        Ok(ContentHasher::with_algorithm(algorithm))
    }

    pub fn with_algorithm(algorithm: HashAlgorithm) -> ContentHasher {
        ContentHasher { algorithm }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hashes `data`. Empty input is rejected rather than hashed, and an
    /// algorithm whose output is shorter than `HASH_LENGTH` is an error.
    pub fn digest(&self, data: &[u8]) -> Result<Hash> {
        if data.is_empty() {
            error!("Hash input is empty, please confirm");
            return Err(NodeError::EmptyInput);
        }

        let raw = self.algorithm.digest(data);
        if raw.len() < HASH_LENGTH {
            return Err(NodeError::ShortDigest {
                algorithm: self.algorithm.name().to_string(),
                length: raw.len(),
            });
        }
        Hash::from_slice(&raw[..HASH_LENGTH])
    }
}
