// This is my entry point for inspecting a node's configuration
// Every configuration error in the library comes back up to here as a value -
// this is the only place where I decide to stop the process
use clap::Parser;
use data_encoding::HEXLOWER_PERMISSIVE;
use ledger_config::{
    Command, ContentHasher, HashAlgorithm, HashConfig, NodeConfig, NodeError, Opt, Settings,
};
use log::{error, LevelFilter};
use std::process;

fn main() {
    // I parse the command line first so I know whether the user asked for debug output
    let opt = Opt::parse();

    // I initialize logging so I can see what the settings loader is doing
    // Info is the default, --verbose bumps it to Debug, and RUST_LOG still wins over both
    let level = if opt.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    // I run the command and turn any configuration error into exit code 1
    if let Err(e) = run_command(&opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// An explicit --config file beats the deployment root
fn open_settings(opt: &Opt) -> Result<Settings, NodeError> {
    match &opt.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(&opt.root),
    }
}

// This is where I handle each CLI command
fn run_command(opt: &Opt) -> Result<(), Box<dyn std::error::Error>> {
    // If the user gave --hash-alg, that is the hash setting and the file's value is never read
    let hash_override = opt.hash_alg.clone().map(HashConfig::new);

    match &opt.command {
        // When I want to see the whole node config exactly as the node would build it
        Command::Show => {
            let settings = open_settings(opt)?;
            let config = NodeConfig::assemble_with_hash(&settings, hash_override)?;
            // I reject an unusable algorithm name before reporting success
            ContentHasher::new(&config.hash)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        // When I want to check what a single dotted path resolves to
        Command::Get { path } => {
            let settings = open_settings(opt)?;
            match settings.get(path)? {
                Some(value) => println!("{value}"),
                None => println!("not found"),
            }
        }
        // When I want to hash something with the same algorithm the node would use
        Command::Hash { input, hex } => {
            let hash_config = match hash_override {
                Some(hash_config) => hash_config,
                None => open_settings(opt)?.hash_config()?,
            };
            let hasher = ContentHasher::new(&hash_config)?;
            // I accept raw hex when the input is binary, otherwise I hash the UTF-8 text
            let bytes = if *hex {
                HEXLOWER_PERMISSIVE
                    .decode(input.as_bytes())
                    .map_err(|e| format!("Invalid hex input: {e}"))?
            } else {
                input.as_bytes().to_vec()
            };
            let hash = hasher.digest(&bytes)?;
            println!("{} {hash}", hasher.algorithm());
        }
        // When I forget which algorithm names the registry knows about
        Command::Algorithms => {
            for alg in HashAlgorithm::ALL {
                println!("{alg}");
            }
        }
    }
    Ok(())
}
