//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sifcache - Local cache for library container images
///
/// Verifies and manages the on-disk cache of images pulled
/// from the remote image library.
#[derive(Parser, Debug)]
#[command(name = "sifcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SIFCACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache root directory (empty means default)
    #[arg(long, global = true, env = "SINGULARITY_CACHEDIR", hide_env_values = true)]
    pub cache_dir: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the cache root directory
    Dir(DirArgs),

    /// Print the cache path for an image name
    Path(PathArgs),

    /// Check whether a valid copy of an image is cached
    Exists(ExistsArgs),

    /// Compute the image digest of a file
    Hash(HashArgs),

    /// Store an image file in the cache
    Import(ImportArgs),

    /// List cached library images
    List(ListArgs),

    /// Remove a single cached image
    Remove(RemoveArgs),

    /// Remove the entire cache
    Clean(CleanArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the dir command
#[derive(Parser, Debug)]
pub struct DirArgs {
    /// Print the library subtree instead of the cache root
    #[arg(short, long)]
    pub library: bool,
}

/// Arguments for the path command
#[derive(Parser, Debug)]
pub struct PathArgs {
    /// Image name (e.g., ubuntu_latest.sif)
    pub name: String,
}

/// Arguments for the exists command
#[derive(Parser, Debug)]
pub struct ExistsArgs {
    /// Expected image digest (sha256.<hex>)
    pub hash: String,

    /// Image name (e.g., ubuntu_latest.sif)
    pub name: String,
}

/// Arguments for the hash command
#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Image file to hash
    pub file: PathBuf,
}

/// Arguments for the import command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Image file to store
    pub file: PathBuf,

    /// Name to store the image under (defaults to the file name)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Image name (e.g., ubuntu_latest.sif)
    pub name: String,
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
