//! Cryo CLI - command-line storefront for cryogenic equipment.
//!
//! Commands:
//! - `cryo products` - Browse, search and filter the catalog
//! - `cryo cart` - Manage the shopping cart
//! - `cryo checkout` - Place an order from the cart
//! - `cryo contact` - Send a contact request
//! - `cryo admin` - Admin login, dashboard and product form
//! - `cryo config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cryo_commerce::{CommerceError, ValidationErrors};
use cryo_store::StoreError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{AdminArgs, CartArgs, CheckoutArgs, ConfigArgs, ContactArgs, ProductsArgs};

/// Cryo CLI - Browse and order cryogenic equipment
#[derive(Parser)]
#[command(name = "cryo")]
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

    /// State file path (overrides [store] path)
    #[arg(long, global = true)]
    state: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products(ProductsArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Place an order for the cart contents
    Checkout(CheckoutArgs),

    /// Send a message to the sales team
    #[command(after_help = contact_after_help())]
    Contact(ContactArgs),

    /// Admin area
    Admin(AdminArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn contact_after_help() -> String {
    format!("Categories: {}", commands::contact::category_help())
}

fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Field errors carried by a command failure, if that is what it was.
fn validation_errors(err: &anyhow::Error) -> Option<&ValidationErrors> {
    let commerce = err.downcast_ref::<CommerceError>().or_else(|| {
        match err.downcast_ref::<StoreError>() {
            Some(StoreError::Commerce(e)) => Some(e),
            _ => None,
        }
    });
    match commerce {
        Some(CommerceError::Validation(errors)) => Some(errors),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.state.as_deref(), output)?;
    ctx.output.debug(&format!("State file: {}", ctx.state_path().display()));

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Contact(args) => commands::contact::run(args, &ctx).await,
        Commands::Admin(args) => commands::admin::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        match validation_errors(&e) {
            Some(errors) => ctx.output.validation_errors(errors),
            None => ctx.output.error(&format!("{:#}", e)),
        }
        std::process::exit(1);
    }

    Ok(())
}
