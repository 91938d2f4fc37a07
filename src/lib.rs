//! # Ledger Config - configuration and identity layer of a ledger node
//!
//! This crate turns the node's JSON settings file into typed configuration for
//! each subsystem, and derives the content-addressed identifiers used for
//! transactions and blocks.
//!
//! ## How the code is organized
//! - `config/`: settings file loading, dotted-path lookup, subsystem builders
//! - `core/`: digest and address types, transactions, blocks, identifiers
//! - `utils/`: hash algorithm registry and the content hasher
//! - `error/`: the crate-wide error type
//! - `cli/`: command-line interface for inspecting a deployment
//!
//! ## Typical use
//! 1. `Settings::new(root)` points at `<root>/config/config.json`
//! 2. `NodeConfig::assemble(&settings)` loads the file once and builds every
//!    subsystem config, failing on the first missing or mistyped value
//! 3. `ContentHasher::new(&config.hash)` picks the hash algorithm (SHA256
//!    unless configured) for `transaction_identifier` and `block_identifier`

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{
    BlockChainConfig, ConsensusConfig, Lookup, NodeConfig, ParticipateConfig, RoleConfig,
    Settings, TxPoolConfig,
};
pub use core::{
    block_identifier, transaction_identifier, Address, Block, Hash, Header, MsgType,
    NodeAddress, NodeType, Transaction, TxData, HASH_LENGTH,
};
pub use error::{NodeError, Result};
pub use utils::{copy_bytes, select_algorithm, ContentHasher, HashAlgorithm, HashConfig};
