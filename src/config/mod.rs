//! Configuration management
//!
//! This module loads the node's JSON settings file, resolves dotted paths
//! through it, and builds the typed configuration handed to each subsystem.

pub mod lookup;
pub mod node_config;
pub mod settings;

pub use lookup::{kind_of, Lookup};
pub use node_config::{
    BlockChainConfig, ConsensusConfig, NodeConfig, ParticipateConfig, RoleConfig, TxPoolConfig,
};
pub use settings::{Settings, CONFIG_DIR, CONFIG_NAME};
