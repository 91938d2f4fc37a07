//! Identifier derivation for transactions and blocks
//!
//! Identifiers are digests of the canonical JSON encoding. They depend on the
//! hasher's algorithm, so identical content hashed under two different
//! algorithm settings yields two different identifiers.

use crate::core::{Block, Hash, Transaction};
use crate::error::Result;
use crate::utils::ContentHasher;
use log::debug;

/// Digest of the transaction's canonical encoding
pub fn transaction_identifier(hasher: &ContentHasher, tx: &Transaction) -> Result<Hash> {
    hasher.digest(&tx.encode()?)
}

/// Digest of the block header, or the cached header hash when it is non-zero.
///
/// A cached value is returned as is, even if header fields were changed after
/// it was stored. A genuinely all-zero digest cannot be told apart from "not
/// computed" and is recomputed every time.
pub fn block_identifier(hasher: &ContentHasher, block: &Block) -> Result<Hash> {
    if !block.header_hash.is_zero() {
        return Ok(block.header_hash);
    }
    debug!("Computing header hash for block at height {}", block.header.height);
    hasher.digest(&block.header.encode()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Address, Header, HASH_LENGTH};
    use crate::utils::HashAlgorithm;
    use num_bigint::BigUint;

    fn sample_tx() -> Transaction {
        Transaction::new(
            1,
            Address::new([9u8; 20]),
            BigUint::from(500u32),
            21_000,
            BigUint::from(2u32),
            b"hello",
            Address::new([8u8; 20]),
        )
    }

    fn sample_header() -> Header {
        Header {
            chain_id: "ledger".to_string(),
            prev_block_hash: Hash::new([4u8; HASH_LENGTH]),
            height: 10,
            timestamp: 1_700_000_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_identical_transactions_share_identifier() {
        let hasher = ContentHasher::default();
        let a = sample_tx();
        let b = sample_tx();
        assert_eq!(
            transaction_identifier(&hasher, &a).unwrap(),
            transaction_identifier(&hasher, &b).unwrap()
        );
    }

    #[test]
    fn test_each_field_changes_transaction_identifier() {
        let hasher = ContentHasher::default();
        let base = transaction_identifier(&hasher, &sample_tx()).unwrap();

        let mutations: Vec<fn(&mut Transaction)> = vec![
            |tx: &mut Transaction| tx.data_mut().account_nonce += 1,
            |tx: &mut Transaction| tx.data_mut().price += 1u32,
            |tx: &mut Transaction| tx.data_mut().gas_limit += 1,
            |tx: &mut Transaction| tx.data_mut().recipient = None,
            |tx: &mut Transaction| tx.data_mut().from = Some(Address::new([7u8; 20])),
            |tx: &mut Transaction| tx.data_mut().amount += 1u32,
            |tx: &mut Transaction| tx.data_mut().payload.push(0),
            |tx: &mut Transaction| tx.data_mut().v = BigUint::from(27u32),
            |tx: &mut Transaction| tx.data_mut().r = BigUint::from(1u32),
            |tx: &mut Transaction| tx.data_mut().s = BigUint::from(1u32),
        ];
        for mutate in mutations {
            let mut tx = sample_tx();
            mutate(&mut tx);
            assert_ne!(transaction_identifier(&hasher, &tx).unwrap(), base);
        }
    }

    #[test]
    fn test_block_identifier_hashes_header() {
        let hasher = ContentHasher::default();
        let block = Block::new(sample_header(), vec![sample_tx()]);
        let expected = hasher.digest(&block.header.encode().unwrap()).unwrap();
        assert_eq!(block_identifier(&hasher, &block).unwrap(), expected);
    }

    #[test]
    fn test_block_identifier_ignores_transactions() {
        let hasher = ContentHasher::default();
        let empty = Block::new(sample_header(), vec![]);
        let full = Block::new(sample_header(), vec![sample_tx()]);
        assert_eq!(
            block_identifier(&hasher, &empty).unwrap(),
            block_identifier(&hasher, &full).unwrap()
        );
    }

    #[test]
    fn test_cached_header_hash_survives_header_mutation() {
        let hasher = ContentHasher::default();
        let cached = Hash::new([0x5a; HASH_LENGTH]);
        let mut block = Block::new(sample_header(), vec![]);
        block.header_hash = cached;

        block.header.height += 100;
        block.header.chain_id = "forked".to_string();

        assert_eq!(block_identifier(&hasher, &block).unwrap(), cached);
    }

    #[test]
    fn test_zero_cache_triggers_recompute() {
        let hasher = ContentHasher::default();
        let mut block = Block::new(sample_header(), vec![]);
        let before = block_identifier(&hasher, &block).unwrap();
        block.header.height += 1;
        let after = block_identifier(&hasher, &block).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_identifier_depends_on_algorithm() {
        let sha2 = ContentHasher::with_algorithm(HashAlgorithm::Sha256);
        let keccak = ContentHasher::with_algorithm(HashAlgorithm::Keccak256);
        let tx = sample_tx();
        assert_ne!(
            transaction_identifier(&sha2, &tx).unwrap(),
            transaction_identifier(&keccak, &tx).unwrap()
        );
    }
}
