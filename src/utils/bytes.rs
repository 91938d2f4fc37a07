use log::error;

/// Copies `bytes` into a fresh buffer. Empty input is treated as a caller
/// mistake: it is logged and nothing is returned.
pub fn copy_bytes(bytes: &[u8]) -> Option<Vec<u8>> {
    if bytes.is_empty() {
        error!("Source bytes are empty, please confirm");
        return None;
    }
    Some(bytes.to_vec())
}
