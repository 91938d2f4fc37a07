// This is where I turn the raw settings file into the typed config each of my
// subsystems expects (tx pool, participants, role, consensus, block chain)
// Every builder fails fast on a missing or mistyped value - I never want a node
// starting up with a silently defaulted policy. Only the node id and the hash
// algorithm are allowed to be absent

use crate::config::Settings;
use crate::core::NodeAddress;
use crate::error::{NodeError, Result};
use crate::utils::HashConfig;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const NODE_ID: &str = "node.id";
pub const TXPOOL_SLOTS: &str = "txpool.globalSlots";
pub const CONSENSUS_POLICY: &str = "consensus.policy";
pub const PARTICIPATES_POLICY: &str = "participates.policy";
pub const ROLE_POLICY: &str = "role.policy";
pub const BLOCK_CHAIN_PLUGIN: &str = "blockchain.plugin";
pub const BLOCK_CHAIN_STATE_PATH: &str = "blockchain.statePath";
pub const BLOCK_CHAIN_DATA_PATH: &str = "blockchain.dataPath";
pub const HASH_ALGORITHM: &str = "hash.algorithm";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPoolConfig {
    pub global_slots: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipateConfig {
    pub policy_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfig {
    pub policy_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusConfig {
    pub policy_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockChainConfig {
    pub plugin_name: String,
    pub state_data_path: String,
    pub block_data_path: String,
}

/// Everything the node needs from its settings file, built in one go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// `None` when `node.id` is not assigned yet
    pub account: Option<NodeAddress>,
    pub tx_pool: TxPoolConfig,
    pub participates: ParticipateConfig,
    pub role: RoleConfig,
    pub consensus: ConsensusConfig,
    pub block_chain: BlockChainConfig,
    pub hash: HashConfig,
}

impl NodeConfig {
    /// Loads `config/config.json` under `root` and assembles the node config
    pub fn load(root: impl AsRef<Path>) -> Result<NodeConfig> {
        let settings = Settings::new(root)?;
        NodeConfig::assemble(&settings)
    }

    /// Runs every subsystem builder in order. The first fatal error abandons
    /// assembly; a missing node id is logged and left as `None`.
    pub fn assemble(settings: &Settings) -> Result<NodeConfig> {
        NodeConfig::assemble_with_hash(settings, None)
    }

    /// Like [`NodeConfig::assemble`], but an explicit `hash` setting replaces
    /// `hash.algorithm` from the file, which is then not read at all.
    pub fn assemble_with_hash(settings: &Settings, hash: Option<HashConfig>) -> Result<NodeConfig> {
        // The node id may be assigned later in startup, so I only log its absence
        let account = match settings.node_id() {
            Ok(id) => Some(id),
            Err(e) if e.is_recoverable() => {
                warn!("Assembling node config without a node id");
                None
            }
            Err(e) => return Err(e),
        };

        // An override from the command line wins, so a bad value in the file
        // can't block it
        let hash = match hash {
            Some(hash) => hash,
            None => settings.hash_config()?,
        };

        // I build the subsystems in a fixed order; the first error stops everything
        let config = NodeConfig {
            account,
            tx_pool: settings.tx_pool_config()?,
            participates: settings.participate_config()?,
            role: settings.role_config()?,
            consensus: settings.consensus_config()?,
            block_chain: settings.block_chain_config()?,
            hash,
        };

        info!(
            "Node config assembled: slots={}, consensus={}, blockchain plugin={}",
            config.tx_pool.global_slots,
            config.consensus.policy_name,
            config.block_chain.plugin_name
        );
        Ok(config)
    }
}

impl Settings {
    /// The configured node address. Absence is reported, not fatal, since
    /// the address may be assigned later during startup.
    pub fn node_id(&self) -> Result<NodeAddress> {
        match self.get_str(NODE_ID)?.found() {
            Some(id) => Ok(NodeAddress::new(id)),
            None => {
                error!("Node id not assigned in config");
                Err(NodeError::NodeIdMissing)
            }
        }
    }

    pub fn tx_pool_config(&self) -> Result<TxPoolConfig> {
        let global_slots = fatal(
            self.get_u64(TXPOOL_SLOTS)?
                .require(TXPOOL_SLOTS, "unsigned integer"),
        )?;
        Ok(TxPoolConfig { global_slots })
    }

    pub fn participate_config(&self) -> Result<ParticipateConfig> {
        Ok(ParticipateConfig {
            policy_name: self.policy_name(PARTICIPATES_POLICY)?,
        })
    }

    pub fn role_config(&self) -> Result<RoleConfig> {
        Ok(RoleConfig {
            policy_name: self.policy_name(ROLE_POLICY)?,
        })
    }

    pub fn consensus_config(&self) -> Result<ConsensusConfig> {
        Ok(ConsensusConfig {
            policy_name: self.policy_name(CONSENSUS_POLICY)?,
        })
    }

    pub fn block_chain_config(&self) -> Result<BlockChainConfig> {
        Ok(BlockChainConfig {
            plugin_name: self.policy_name(BLOCK_CHAIN_PLUGIN)?,
            state_data_path: self.required_str(BLOCK_CHAIN_STATE_PATH)?,
            block_data_path: self.required_str(BLOCK_CHAIN_DATA_PATH)?,
        })
    }

    /// The optional hash algorithm setting
    pub fn hash_config(&self) -> Result<HashConfig> {
        let algorithm = fatal(self.get_str(HASH_ALGORITHM)?.optional(HASH_ALGORITHM, "string"))?;
        Ok(HashConfig { algorithm })
    }

    fn required_str(&self, key: &str) -> Result<String> {
        fatal(self.get_str(key)?.require(key, "string"))
    }

    fn policy_name(&self, key: &str) -> Result<String> {
        let name = self.required_str(key)?;
        if name.trim().is_empty() {
            return fatal(Err(NodeError::InvalidSetting {
                key: key.to_string(),
                expected: "non-empty string",
                found: "empty string".to_string(),
            }));
        }
        Ok(name)
    }
}

fn fatal<T>(result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        error!("Configuration error: {e}");
    }
    result
}
