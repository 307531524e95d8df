pub mod check;
pub mod config;
pub mod image;
pub mod list;
pub mod repo;
pub mod targets;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bridgemap::BridgeType;
use bridgemap::model::OutputFormat;
use bridgemap::store::SettingsStore;

#[derive(Debug, Parser)]
#[command(
    name = "bridgemap",
    about = "Release catalog for bridge images: notification targets, image tags and repositories",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Settings file (default: ~/.config/bridgemap/config.toml)
    #[arg(long, env = "BRIDGEMAP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON regardless of the configured output format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every bridge in the catalog
    List,

    /// Show the ordered notification targets for a bridge
    Targets {
        /// Bridge identifier (e.g. telegram, signalv2)
        bridge: BridgeType,
    },

    /// Format the image reference for a build
    Image {
        /// Bridge identifier
        bridge: BridgeType,

        /// Image name (default: the bridge identifier)
        #[arg(long)]
        image: Option<String>,

        /// Commit the image was built from
        #[arg(long)]
        commit: String,
    },

    /// Show the repository a bridge's images are pushed to
    Repo {
        /// Bridge identifier
        bridge: BridgeType,

        /// Registry host or prefix (default: default_registry from settings)
        #[arg(long)]
        registry: Option<String>,
    },

    /// Check the whole catalog for misconfigured entries
    Check,

    /// Manage CLI settings
    #[command(subcommand)]
    Config(ConfigSubcommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show current settings
    Show,

    /// Set a settings value
    Set {
        /// Settings key (default_registry, output)
        key: String,
        /// Settings value
        value: String,
    },

    /// Get a specific settings value
    Get {
        /// Settings key
        key: String,
    },
}

pub(crate) fn open_settings(config: Option<&PathBuf>) -> Result<SettingsStore> {
    SettingsStore::open(config.map(|p| p.as_path())).context("failed to load settings")
}

pub(crate) fn output_format(store: &SettingsStore, json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        store.settings().output
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}
