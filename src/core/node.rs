use serde::{Deserialize, Serialize};

pub const INVALID_INT: i32 = 255;
pub const BLANK_STRING: &str = "";
/// Round interval of the FBFT consensus, in milliseconds
pub const FBFT_ROUND_INTERVAL: u64 = 500;
/// Node name used when running a single-node network
pub const SINGLE_NODE_NAME: &str = "singleNode";

/// Role of a node in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Unknown = 0,
    Consensus = 1,
    Full = 2,
    /// Light node with reduced functionality
    Light = 3,
}

impl NodeType {
    /// Upper bound (exclusive) of valid node type values
    pub const MAX: u8 = 4;

    pub fn from_u8(value: u8) -> Option<NodeType> {
        match value {
            0 => Some(NodeType::Unknown),
            1 => Some(NodeType::Consensus),
            2 => Some(NodeType::Full),
            3 => Some(NodeType::Light),
            _ => None,
        }
    }
}

/// Notifications passed between node services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MsgType {
    Null = 0,
    BlockCommitSuccess,
    BlockCommitFailed,
    BlockVerifyFailed,
    NodeServiceStopped,
    RoundRunFailed,
    ToConsensusFailed,
    ChangeMaster,
}
