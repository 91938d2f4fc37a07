//! Node configuration integration tests
//!
//! Writes settings files into temporary deployment roots and checks what the
//! store, the path resolver and the assembler make of them.

use ledger_config::{
    ContentHasher, HashAlgorithm, HashConfig, NodeAddress, NodeConfig, NodeError, Settings,
};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::thread;
use tempfile::{tempdir, TempDir};

fn full_settings() -> Value {
    json!({
        "node": { "id": "node-0x01" },
        "txpool": { "globalSlots": "4096" },
        "consensus": { "policy": "fbft" },
        "participates": { "policy": "solo" },
        "role": { "policy": "solo" },
        "blockchain": {
            "plugin": "memorydb",
            "statePath": "/var/ledger/state",
            "dataPath": "/var/ledger/block"
        }
    })
}

fn write_root(settings: &str) -> TempDir {
    let root = tempdir().unwrap();
    let dir = root.path().join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), settings).unwrap();
    root
}

fn root_with(settings: &Value) -> TempDir {
    write_root(&settings.to_string())
}

fn settings_file(root: &Path) -> std::path::PathBuf {
    root.join("config").join("config.json")
}

#[test]
fn test_assemble_complete_settings() {
    let root = root_with(&full_settings());
    let config = NodeConfig::load(root.path()).unwrap();

    assert_eq!(config.account, Some(NodeAddress::new("node-0x01")));
    assert_eq!(config.tx_pool.global_slots, 4096);
    assert_eq!(config.participates.policy_name, "solo");
    assert_eq!(config.role.policy_name, "solo");
    assert_eq!(config.consensus.policy_name, "fbft");
    assert_eq!(config.block_chain.plugin_name, "memorydb");
    assert_eq!(config.block_chain.state_data_path, "/var/ledger/state");
    assert_eq!(config.block_chain.block_data_path, "/var/ledger/block");
    assert_eq!(config.hash.algorithm, None);
}

#[test]
fn test_missing_slots_abandons_assembly() {
    let mut settings = full_settings();
    settings["txpool"].as_object_mut().unwrap().remove("globalSlots");
    let root = root_with(&settings);

    let result = NodeConfig::load(root.path());
    assert_eq!(
        result,
        Err(NodeError::MissingSetting("txpool.globalSlots".to_string()))
    );
}

#[test]
fn test_slots_accept_number_and_reject_garbage() {
    let mut settings = full_settings();
    settings["txpool"]["globalSlots"] = json!(128);
    let root = root_with(&settings);
    assert_eq!(NodeConfig::load(root.path()).unwrap().tx_pool.global_slots, 128);

    settings["txpool"]["globalSlots"] = json!("many");
    let root = root_with(&settings);
    assert!(matches!(
        NodeConfig::load(root.path()),
        Err(NodeError::InvalidSetting { ref key, .. }) if key == "txpool.globalSlots"
    ));

    settings["txpool"]["globalSlots"] = json!(-1);
    let root = root_with(&settings);
    assert!(NodeConfig::load(root.path()).is_err());
}

#[test]
fn test_slots_string_must_be_plain_digits() {
    let mut settings = full_settings();
    for slots in [" 42 ", "+42", "42 ", "-0"] {
        settings["txpool"]["globalSlots"] = json!(slots);
        let root = root_with(&settings);
        assert!(
            matches!(
                NodeConfig::load(root.path()),
                Err(NodeError::InvalidSetting { ref key, .. }) if key == "txpool.globalSlots"
            ),
            "{slots:?} should be rejected"
        );
    }

    settings["txpool"]["globalSlots"] = json!("42");
    let root = root_with(&settings);
    assert_eq!(NodeConfig::load(root.path()).unwrap().tx_pool.global_slots, 42);
}

#[test]
fn test_mistyped_policy_is_fatal() {
    let mut settings = full_settings();
    settings["role"]["policy"] = json!(3);
    let root = root_with(&settings);

    match NodeConfig::load(root.path()) {
        Err(NodeError::InvalidSetting { key, expected, found }) => {
            assert_eq!(key, "role.policy");
            assert_eq!(expected, "string");
            assert_eq!(found, "number");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_empty_policy_is_fatal() {
    let mut settings = full_settings();
    settings["consensus"]["policy"] = json!("");
    let root = root_with(&settings);
    assert!(matches!(
        NodeConfig::load(root.path()),
        Err(NodeError::InvalidSetting { ref key, .. }) if key == "consensus.policy"
    ));
}

#[test]
fn test_missing_blockchain_path_is_fatal() {
    let mut settings = full_settings();
    settings["blockchain"].as_object_mut().unwrap().remove("dataPath");
    let root = root_with(&settings);
    assert_eq!(
        NodeConfig::load(root.path()),
        Err(NodeError::MissingSetting("blockchain.dataPath".to_string()))
    );
}

#[test]
fn test_missing_node_id_is_reported_not_fatal() {
    let mut settings = full_settings();
    settings.as_object_mut().unwrap().remove("node");
    let root = root_with(&settings);

    let store = Settings::new(root.path()).unwrap();
    assert_eq!(store.node_id(), Err(NodeError::NodeIdMissing));

    let config = NodeConfig::assemble(&store).unwrap();
    assert_eq!(config.account, None);
    assert_eq!(config.tx_pool.global_slots, 4096);
}

#[test]
fn test_missing_file_is_io_error() {
    let root = tempdir().unwrap();
    match NodeConfig::load(root.path()) {
        Err(NodeError::Io { path, .. }) => assert_eq!(path, settings_file(root.path())),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_malformed_file_is_rejected() {
    let root = write_root("{ \"node\": ");
    assert!(matches!(
        NodeConfig::load(root.path()),
        Err(NodeError::MalformedSettings { .. })
    ));

    let root = write_root("[1, 2, 3]");
    assert!(matches!(
        Settings::new(root.path()).unwrap().get("node"),
        Err(NodeError::MalformedSettings { .. })
    ));
}

#[test]
fn test_settings_file_is_read_once() {
    let root = root_with(&full_settings());
    let store = Settings::new(root.path()).unwrap();
    assert_eq!(store.load_count(), 0);

    assert_eq!(store.get("node.id").unwrap(), Some(json!("node-0x01")));
    assert_eq!(store.load_count(), 1);

    // Later lookups are served from memory even once the file is gone
    fs::remove_file(settings_file(root.path())).unwrap();
    assert_eq!(store.get("role.policy").unwrap(), Some(json!("solo")));
    assert!(store.get("txpool").unwrap().is_some());
    assert_eq!(store.load_count(), 1);

    NodeConfig::assemble(&store).unwrap();
    assert_eq!(store.load_count(), 1);
}

#[test]
fn test_failed_load_is_not_retried() {
    let root = tempdir().unwrap();
    let store = Settings::new(root.path()).unwrap();

    assert!(matches!(store.get("node.id"), Err(NodeError::Io { .. })));
    assert_eq!(store.load_count(), 1);

    // The file showing up afterwards doesn't change the outcome
    let dir = root.path().join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), full_settings().to_string()).unwrap();

    assert!(matches!(store.get("node.id"), Err(NodeError::Io { .. })));
    assert!(NodeConfig::assemble(&store).is_err());
    assert_eq!(store.load_count(), 1);
    assert!(!store.is_loaded());
}

#[test]
fn test_concurrent_first_use_loads_once() {
    let root = root_with(&full_settings());
    let store = Settings::new(root.path()).unwrap();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                assert_eq!(
                    store.get("blockchain.plugin").unwrap(),
                    Some(json!("memorydb"))
                );
            });
        }
    });
    assert_eq!(store.load_count(), 1);
}

#[test]
fn test_path_resolution_on_disk() {
    let root = root_with(&full_settings());
    let store = Settings::new(root.path()).unwrap();

    assert_eq!(
        store.get("blockchain.statePath").unwrap(),
        Some(json!("/var/ledger/state"))
    );
    assert_eq!(store.get("absent").unwrap(), None);
    assert_eq!(store.get("absent.key").unwrap(), None);
    // "node.id" is a string, so the walk stops there and returns it
    assert_eq!(store.get("node.id.suffix").unwrap(), Some(json!("node-0x01")));
}

#[test]
fn test_from_file_reads_explicit_path() {
    let root = root_with(&full_settings());
    let store = Settings::from_file(settings_file(root.path())).unwrap();
    assert_eq!(store.get("consensus.policy").unwrap(), Some(json!("fbft")));
}

#[test]
fn test_hash_algorithm_setting_selects_hasher() {
    let mut settings = full_settings();
    settings["hash"] = json!({ "algorithm": "SHA3-256" });
    let root = root_with(&settings);

    let config = NodeConfig::load(root.path()).unwrap();
    assert_eq!(config.hash.algorithm.as_deref(), Some("SHA3-256"));
    let hasher = ContentHasher::new(&config.hash).unwrap();
    assert_eq!(hasher.algorithm(), HashAlgorithm::Sha3_256);
}

#[test]
fn test_absent_hash_algorithm_defaults_to_sha256() {
    let root = root_with(&full_settings());
    let config = NodeConfig::load(root.path()).unwrap();
    let hasher = ContentHasher::new(&config.hash).unwrap();
    assert_eq!(hasher.algorithm(), HashAlgorithm::Sha256);
}

#[test]
fn test_mistyped_hash_algorithm_is_fatal() {
    let mut settings = full_settings();
    settings["hash"] = json!({ "algorithm": 256 });
    let root = root_with(&settings);
    assert!(matches!(
        NodeConfig::load(root.path()),
        Err(NodeError::InvalidSetting { ref key, .. }) if key == "hash.algorithm"
    ));
}

#[test]
fn test_explicit_hash_setting_overrides_mistyped_file_value() {
    let mut settings = full_settings();
    settings["hash"] = json!({ "algorithm": 256 });
    let root = root_with(&settings);
    let store = Settings::new(root.path()).unwrap();

    let config = NodeConfig::assemble_with_hash(&store, Some(HashConfig::new("SHA512"))).unwrap();
    assert_eq!(config.hash.algorithm.as_deref(), Some("SHA512"));
    assert_eq!(
        ContentHasher::new(&config.hash).unwrap().algorithm(),
        HashAlgorithm::Sha512
    );

    // Without an override the file's value is still read and rejected
    assert!(NodeConfig::assemble_with_hash(&store, None).is_err());
}
