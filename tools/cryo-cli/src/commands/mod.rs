//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// Search, filter and sort the catalog.
    List(ListArgs),
    /// Show one product with its specifications.
    Show {
        /// Product ID.
        id: String,
    },
    /// List featured products.
    Featured,
    /// List categories with product counts.
    Categories,
}

/// Arguments for `products list`.
#[derive(Args, Default)]
pub struct ListArgs {
    /// Match name or description (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Restrict to a category tag; repeat for several.
    #[arg(long)]
    pub category: Vec<String>,

    /// Minimum price in dollars.
    #[arg(long)]
    pub min: Option<String>,

    /// Maximum price in dollars.
    #[arg(long)]
    pub max: Option<String>,

    /// Only products that are in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Sort key: name-asc, name-desc, price-asc, price-desc, featured.
    #[arg(long, default_value = "name-asc")]
    pub sort: String,

    /// Page number, starting at 1.
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Products per page (default from config).
    #[arg(long)]
    pub per_page: Option<usize>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart lines and the price breakdown.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        id: String,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        qty: u32,
    },
    /// Remove a product's line.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set a line's quantity; zero or less removes it.
    Update {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args, Default)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    /// State or province.
    #[arg(long)]
    pub province: Option<String>,
    #[arg(long)]
    pub zip: Option<String>,
    #[arg(long)]
    pub country: Option<String>,

    /// Use a separate billing address (requires the --billing-* fields).
    #[arg(long)]
    pub separate_billing: bool,
    #[arg(long)]
    pub billing_street: Option<String>,
    #[arg(long)]
    pub billing_city: Option<String>,
    #[arg(long)]
    pub billing_state: Option<String>,
    #[arg(long)]
    pub billing_zip: Option<String>,
    #[arg(long)]
    pub billing_country: Option<String>,

    /// Accept the terms and conditions.
    #[arg(long)]
    pub accept_terms: bool,

    /// Prompt for any field that is still empty.
    #[arg(short, long)]
    pub interactive: bool,
}

/// Arguments for the contact command.
#[derive(Args, Default)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,

    /// One of: general, quote, technical, warranty, partnership, other.
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub message: Option<String>,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Sign in to the admin area.
    Login {
        #[arg(short, long)]
        username: Option<String>,
        /// Prompted for when omitted.
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out.
    Logout,
    /// Store metrics and recent orders.
    Dashboard,
    /// Product management table.
    Products,
    /// Check a product form without changing the catalog.
    ValidateProduct(ProductFormArgs),
    /// Request deletion of a product.
    Delete {
        /// Product ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Admin product form fields.
#[derive(Args, Default)]
pub struct ProductFormArgs {
    /// Start from an existing product's values.
    #[arg(long)]
    pub edit: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Category tag, e.g. dewars.
    #[arg(long)]
    pub category: Option<String>,
    /// Price in dollars.
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub stock: Option<i64>,
    #[arg(long)]
    pub featured: Option<bool>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
