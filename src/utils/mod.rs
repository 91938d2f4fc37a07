//! Utility functions and helpers
//!
//! This module contains the hash algorithm registry, the content hasher
//! and small byte helpers used throughout the node.

pub mod bytes;
pub mod crypto;

pub use bytes::copy_bytes;
pub use crypto::{
    select_algorithm, ContentHasher, HashAlgorithm, HashConfig, DEFAULT_HASH_ALGORITHM,
};
