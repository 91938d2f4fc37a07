use crate::core::identity::block_identifier;
use crate::core::{Address, Hash, Transaction};
use crate::error::Result;
use crate::utils::ContentHasher;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub chain_id: String,
    pub prev_block_hash: Hash,
    pub state_root: Hash,
    pub tx_root: Hash,
    pub receipts_root: Hash,
    pub height: u64,
    pub timestamp: u64,
    pub coin_base: Address,
    pub mix_digest: Hash,
    pub sig_data: Vec<Vec<u8>>,
}

impl Header {
    /// Canonical encoding used for identity derivation
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// A block together with its memoized header identifier.
///
/// `header_hash` is authoritative once non-zero; a zero value means the
/// identifier has not been computed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: Header,
    pub transactions: Vec<Transaction>,
    pub header_hash: Hash,
}

impl Block {
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Block {
        Block {
            header,
            transactions,
            header_hash: Hash::ZERO,
        }
    }

    pub fn get_height(&self) -> u64 {
        self.header.height
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    /// The block identifier, using the cached header hash when present
    pub fn hash(&self, hasher: &ContentHasher) -> Result<Hash> {
        block_identifier(hasher, self)
    }

    /// Computes the identifier if needed and stores it in `header_hash`
    pub fn seal(&mut self, hasher: &ContentHasher) -> Result<Hash> {
        let hash = block_identifier(hasher, self)?;
        self.header_hash = hash;
        Ok(hash)
    }
}
