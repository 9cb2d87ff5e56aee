//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cryo_commerce::cart::PricingPolicy;
use cryo_commerce::catalog::Catalog;
use cryo_store::{AdminStore, CartStore, CheckoutStore, FileStore};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file the settings came from, if any.
    pub config_path: Option<PathBuf>,
    /// The product catalog.
    pub catalog: Catalog,
    pub(crate) state_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, state_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        // Explicit path first, then the nearest config file up the tree
        let config_path = match config_path {
            Some(path) => Some(cwd.join(path)),
            None => Self::find_config(&cwd),
        };
        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
            catalog: Catalog::builtin(),
            state_override: state_path.map(str::to_string),
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The state file: `--state` against the working directory if given,
    /// else `[store] path` against the config file's directory.
    pub fn state_path(&self) -> PathBuf {
        match &self.state_override {
            Some(path) => self.resolve_path(path),
            None => self.config_dir().join(&self.config.store.path),
        }
    }

    /// Directory relative config values resolve against.
    fn config_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }

    /// A backend handle on the state file.
    pub fn store(&self) -> FileStore {
        FileStore::open(self.state_path())
    }

    pub fn cart_store(&self) -> Result<CartStore<FileStore>> {
        CartStore::load(self.store()).context("Failed to load cart")
    }

    pub fn checkout_store(&self) -> Result<CheckoutStore<FileStore>> {
        CheckoutStore::load(self.store()).context("Failed to load checkout details")
    }

    pub fn admin_store(&self) -> Result<AdminStore<FileStore>> {
        AdminStore::load(self.store()).context("Failed to load admin session")
    }

    pub fn pricing(&self) -> Result<PricingPolicy> {
        self.config.pricing_policy()
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
