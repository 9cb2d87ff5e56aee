//! CLI configuration.

use anyhow::{bail, Context, Result};
use cryo_commerce::admin::{AdminCredentials, DEMO_PASSWORD, DEMO_USERNAME};
use cryo_commerce::cart::{
    PricingPolicy, FLAT_SHIPPING_UNITS, FREE_SHIPPING_THRESHOLD_UNITS, TAX_RATE_BPS,
};
use cryo_commerce::search::DEFAULT_PAGE_SIZE;
use cryo_commerce::Money;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["cryo.toml", ".cryo.toml", "cryo.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where storefront state is kept.
    #[serde(default)]
    pub store: StoreConfig,

    /// Product listing options.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Shipping and tax.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Simulated network delays.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Admin demo credentials.
    #[serde(default)]
    pub admin: AdminConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Pricing rules built from the `[pricing]` section.
    pub fn pricing_policy(&self) -> Result<PricingPolicy> {
        let threshold = dollars("pricing.free_shipping_threshold", self.pricing.free_shipping_threshold)?;
        let flat = dollars("pricing.flat_shipping", self.pricing.flat_shipping)?;
        PricingPolicy::new(threshold, flat, self.pricing.tax_rate_percent)
            .context("Invalid [pricing] section")
    }

    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials::new(&self.admin.username, &self.admin.password)
    }

    /// Every problem with the values, as `key: message` lines.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.store.path.trim().is_empty() {
            problems.push("store.path must not be empty".to_string());
        }
        if self.catalog.page_size == 0 {
            problems.push("catalog.page_size must be at least 1".to_string());
        }
        if let Err(e) = self.pricing_policy() {
            problems.push(format!("{:#}", e));
        }
        if self.admin.username.trim().is_empty() || self.admin.password.is_empty() {
            problems.push("admin.username and admin.password must both be set".to_string());
        }

        problems
    }
}

/// Whole-dollar config values as money, rounded to the cent.
fn dollars(key: &str, value: f64) -> Result<Money> {
    if !value.is_finite() || value < 0.0 {
        bail!("{} must be a non-negative amount, got {}", key, value);
    }
    Ok(Money::usd((value * 100.0).round() as i64))
}

/// State file location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON state file. A relative path resolves against the directory
    /// holding the config file, or the working directory when there is none.
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    ".cryo/state.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Pricing amounts in dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: f64,

    #[serde(default = "default_flat_shipping")]
    pub flat_shipping: f64,

    /// Sales tax, e.g. `8` for 8%.
    #[serde(default = "default_tax_rate_percent")]
    pub tax_rate_percent: f64,
}

fn default_free_shipping_threshold() -> f64 {
    FREE_SHIPPING_THRESHOLD_UNITS as f64
}

fn default_flat_shipping() -> f64 {
    FLAT_SHIPPING_UNITS as f64
}

fn default_tax_rate_percent() -> f64 {
    f64::from(TAX_RATE_BPS) / 100.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping: default_flat_shipping(),
            tax_rate_percent: default_tax_rate_percent(),
        }
    }
}

/// Delays standing in for network round trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_checkout_delay_ms")]
    pub checkout_delay_ms: u64,

    #[serde(default = "default_contact_delay_ms")]
    pub contact_delay_ms: u64,
}

fn default_checkout_delay_ms() -> u64 {
    2000
}

fn default_contact_delay_ms() -> u64 {
    1500
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            checkout_delay_ms: default_checkout_delay_ms(),
            contact_delay_ms: default_contact_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,

    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_admin_username() -> String {
    DEMO_USERNAME.to_string()
}

fn default_admin_password() -> String {
    DEMO_PASSWORD.to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password: default_admin_password(),
        }
    }
}

/// Generate a default cryo.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# CryoCommerce storefront configuration

[store]
# Relative to this file's directory
path = "{path}"

[catalog]
page_size = {page_size}

[pricing]
free_shipping_threshold = {threshold}
flat_shipping = {flat}
tax_rate_percent = {tax}

[simulation]
checkout_delay_ms = {checkout_delay}
contact_delay_ms = {contact_delay}

[admin]
username = "{username}"
password = "{password}"
"#,
        path = default_store_path(),
        page_size = DEFAULT_PAGE_SIZE,
        threshold = FREE_SHIPPING_THRESHOLD_UNITS,
        flat = FLAT_SHIPPING_UNITS,
        tax = TAX_RATE_BPS / 100,
        checkout_delay = default_checkout_delay_ms(),
        contact_delay = default_contact_delay_ms(),
        username = DEMO_USERNAME,
        password = DEMO_PASSWORD,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.problems().is_empty());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: CliConfig = toml::from_str("[catalog]\npage_size = 4\n").unwrap();
        assert_eq!(config.catalog.page_size, 4);
        assert_eq!(config.store.path, ".cryo/state.json");
        assert_eq!(config.simulation.checkout_delay_ms, 2000);
        assert_eq!(config.admin.username, "admin");
    }

    #[test]
    fn test_default_pricing_policy() {
        let policy = CliConfig::default().pricing_policy().unwrap();
        assert_eq!(policy, PricingPolicy::default());
    }

    #[test]
    fn test_fractional_pricing() {
        let config: CliConfig = toml::from_str(
            "[pricing]\nfree_shipping_threshold = 99.5\nflat_shipping = 24.99\ntax_rate_percent = 7.25\n",
        )
        .unwrap();
        let policy = config.pricing_policy().unwrap();
        assert_eq!(policy.free_shipping_threshold, Money::usd(9_950));
        assert_eq!(policy.flat_shipping, Money::usd(2_499));
        assert_eq!(policy.tax_rate_bps, 725);
    }

    #[test]
    fn test_problems_reported() {
        let mut config = CliConfig::default();
        config.catalog.page_size = 0;
        config.pricing.tax_rate_percent = 150.0;
        config.pricing.flat_shipping = -1.0;
        let problems = config.problems();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("page_size"));
        assert!(problems[1].contains("flat_shipping"));
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cryo.json");

        let mut config = CliConfig::default();
        config.simulation.contact_delay_ms = 0;
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }
}
