// This file holds the transaction shape the rest of my node hands around
// I only keep what the identity layer needs: the signed data, encoded as JSON
// in declaration order whenever I derive a transaction id

use crate::core::{Address, Hash};
use crate::core::identity::transaction_identifier;
use crate::error::Result;
use crate::utils::{copy_bytes, ContentHasher};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Signed payload of a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxData {
    pub account_nonce: u64,
    pub price: BigUint,
    pub gas_limit: u64,
    pub recipient: Option<Address>, // None for contract creation
    pub from: Option<Address>,
    pub amount: BigUint,
    pub payload: Vec<u8>,
    // Signature values
    pub v: BigUint,
    pub r: BigUint,
    pub s: BigUint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    data: TxData,
}

impl Transaction {
    /// Builds an unsigned transaction. A non-empty payload is copied into
    /// the transaction; signature values start at zero.
    pub fn new(
        nonce: u64,
        to: Address,
        amount: BigUint,
        gas_limit: u64,
        gas_price: BigUint,
        data: &[u8],
        from: Address,
    ) -> Transaction {
        // I only copy a payload that is actually there - an empty one is perfectly
        // valid and shouldn't trip the empty-input warning in copy_bytes
        let payload = if data.is_empty() {
            Vec::new()
        } else {
            copy_bytes(data).unwrap_or_default()
        };
        Transaction {
            data: TxData {
                account_nonce: nonce,
                price: gas_price,
                gas_limit,
                recipient: Some(to),
                from: Some(from),
                amount,
                payload,
                v: BigUint::default(),
                r: BigUint::default(),
                s: BigUint::default(),
            },
        }
    }

    pub fn data(&self) -> &TxData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut TxData {
        &mut self.data
    }

    // The id is a digest of exactly these bytes, so field order must never change
    /// Canonical encoding used for identity derivation
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn hash(&self, hasher: &ContentHasher) -> Result<Hash> {
        transaction_identifier(hasher, self)
    }
}
