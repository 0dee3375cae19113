//! Command-line argument model.

use clap::{Parser, Subcommand};

use crate::config::ConfigUpdate;

/// Print the current Bitcoin price.
#[derive(Parser, Debug)]
#[command(name = "btcget", version, about, disable_version_flag = true)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Subcommand to execute; fetches the price when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create the config with the default backend and currency.
    Init,
    /// Change individual config fields.
    Config {
        /// API backend.
        #[arg(long)]
        backend: Option<String>,
        /// API key.
        #[arg(long)]
        key: Option<String>,
        /// Conversion currency.
        #[arg(long)]
        currency: Option<String>,
    },
}

impl Command {
    /// The partial update carried by `config`, if this is that subcommand.
    #[must_use]
    pub fn config_update(&self) -> Option<ConfigUpdate> {
        match self {
            Self::Config {
                backend,
                key,
                currency,
            } => Some(ConfigUpdate {
                backend: backend.clone(),
                key: key.clone(),
                currency: currency.clone(),
            }),
            Self::Init => None,
        }
    }
}
