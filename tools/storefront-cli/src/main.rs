//! Storefront CLI - browse a product catalog the way the category page does.
//!
//! Commands:
//! - `storefront list <URL>` - Render the listing page for a path and query
//! - `storefront categories` - Product counts per category
//! - `storefront type <URL> <KEYS>...` - Replay search box input through the debouncer
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CategoriesArgs, ConfigArgs, ListArgs, TypeArgs};

/// Storefront CLI - browse, filter and page through a product catalog
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Product catalog (JSON), overrides `catalog.products` from the config
    #[arg(short, long, global = true)]
    products: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the category listing for a URL such as "/phones?sort=price-asc"
    List(ListArgs),

    /// Show how many products each category has
    Categories(CategoriesArgs),

    /// Type into the search box and show what reaches the URL
    Type(TypeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.products, output)?;

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Type(args) => commands::type_keys::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
