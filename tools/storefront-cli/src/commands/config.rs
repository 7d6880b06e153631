//! Configuration management commands.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let CliConfig { catalog, listing } = &ctx.config;

    ctx.output.header("[catalog]");
    ctx.output.kv("products", &catalog.products);

    ctx.output.header("[listing]");
    ctx.output.kv("debounce_ms", &listing.debounce_ms.to_string());
    ctx.output.kv("page_window", &listing.page_window.to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join("storefront.toml");

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    tokio::fs::write(&path, generate_default_config())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ctx.output.success(&format!("Created: {}", path.display()));

    Ok(())
}

/// A problem found in the loaded config.
enum Finding {
    Error(String),
    Warning(String),
}

fn check(ctx: &Context) -> Vec<Finding> {
    let CliConfig { catalog, listing } = &ctx.config;
    let mut findings = Vec::new();

    if catalog.products.trim().is_empty() {
        findings.push(Finding::Error("catalog.products is empty".to_string()));
    } else if !ctx.resolve_path(&catalog.products).is_file() {
        findings.push(Finding::Warning(format!(
            "catalog.products: {} not found",
            catalog.products
        )));
    }

    if listing.page_window == 0 {
        findings.push(Finding::Error(
            "listing.page_window must be at least 1".to_string(),
        ));
    }

    if listing.debounce_ms == 0 {
        findings.push(Finding::Warning(
            "listing.debounce_ms is 0, every keystroke rewrites the URL".to_string(),
        ));
    }

    findings
}

fn validate_config(ctx: &Context) -> Result<()> {
    let findings = check(ctx);

    let mut errors = 0;
    for finding in &findings {
        match finding {
            Finding::Error(msg) => {
                errors += 1;
                ctx.output.error(msg);
            }
            Finding::Warning(msg) => ctx.output.warn(msg),
        }
    }

    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }

    if findings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}
