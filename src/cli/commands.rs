use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ledger-config")]
pub struct Opt {
    #[arg(
        long = "root",
        global = true,
        default_value = ".",
        help = "Deployment root containing config/config.json"
    )]
    pub root: PathBuf,
    #[arg(
        long = "config",
        global = true,
        help = "Explicit settings file, overriding --root"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long = "hash-alg",
        global = true,
        help = "Hash algorithm name, overriding hash.algorithm in the settings file"
    )]
    pub hash_alg: Option<String>,
    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "show", about = "Assemble and print the node configuration")]
    Show,
    #[command(name = "get", about = "Print the raw value stored at a dotted path")]
    Get {
        #[arg(help = "Dotted settings path, e.g. blockchain.dataPath")]
        path: String,
    },
    #[command(name = "hash", about = "Digest input with the configured algorithm")]
    Hash {
        #[arg(help = "Input to digest")]
        input: String,
        #[arg(long = "hex", help = "Treat input as lowercase hex bytes")]
        hex: bool,
    },
    #[command(name = "algorithms", about = "List supported hash algorithms")]
    Algorithms,
}
