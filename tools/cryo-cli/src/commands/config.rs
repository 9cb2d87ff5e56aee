//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    ctx.output.kv("state", &ctx.state_path().display().to_string());

    let config = &ctx.config;

    ctx.output.info("[store]");
    ctx.output.kv("path", &config.store.path);

    ctx.output.info("[catalog]");
    ctx.output.kv("page_size", &config.catalog.page_size.to_string());

    ctx.output.info("[pricing]");
    ctx.output.kv(
        "free_shipping_threshold",
        &config.pricing.free_shipping_threshold.to_string(),
    );
    ctx.output.kv("flat_shipping", &config.pricing.flat_shipping.to_string());
    ctx.output.kv("tax_rate_percent", &config.pricing.tax_rate_percent.to_string());

    ctx.output.info("[simulation]");
    ctx.output.kv(
        "checkout_delay_ms",
        &config.simulation.checkout_delay_ms.to_string(),
    );
    ctx.output.kv("contact_delay_ms", &config.simulation.contact_delay_ms.to_string());

    ctx.output.info("[admin]");
    ctx.output.kv("username", &config.admin.username);
    ctx.output.kv("password", &"*".repeat(config.admin.password.len()));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let problems = ctx.config.problems();

    if problems.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for problem in &problems {
        ctx.output.error(&format!("Error: {}", problem));
    }

    bail!("Configuration has {} error(s)", problems.len());
}
