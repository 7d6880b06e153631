//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod list;
pub mod type_keys;

use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Page URL, path plus query string (e.g. "/phones?sort=price-asc&perPage=8&page=2")
    pub url: String,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {}

/// Arguments for the type command.
#[derive(Args)]
pub struct TypeArgs {
    /// Starting page URL
    pub url: String,

    /// Successive values of the search box. Pass "" to empty it.
    #[arg(required = true)]
    pub keystrokes: Vec<String>,

    /// Milliseconds between keystrokes
    #[arg(long, default_value = "100")]
    pub gap_ms: u64,

    /// Press the clear button after the last keystroke
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new storefront.toml in the current directory
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}
