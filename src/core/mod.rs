//! Core ledger entities
//!
//! This module contains the digest and address types, transactions and
//! blocks, and the derivation of their content-addressed identifiers.

pub mod address;
pub mod block;
pub mod hash;
pub mod identity;
pub mod node;
pub mod transaction;

pub use address::{Address, NodeAddress, ADDRESS_LENGTH};
pub use block::{Block, Header};
pub use hash::{Hash, HASH_LENGTH};
pub use identity::{block_identifier, transaction_identifier};
pub use node::{MsgType, NodeType, BLANK_STRING, FBFT_ROUND_INTERVAL, INVALID_INT, SINGLE_NODE_NAME};
pub use transaction::{Transaction, TxData};
