//! Optional greeting configuration stored in `greeting.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use create::Options;
use serde::Deserialize;
use tracing::debug;

use crate::greeting::{GreetingBuilder, with_noun};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "greeting.toml";

/// Greeting configuration (TOML).
///
/// Every field is optional; an absent field leaves the builder default in
/// place. Values are not validated here: a bad value fails the build, the
/// same as if it had been passed as a flag.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingConfig {
    /// Noun to greet.
    pub noun: Option<String>,
}

impl GreetingConfig {
    /// Builder options equivalent to this config, in field order.
    pub fn options(&self) -> Options<GreetingBuilder> {
        self.noun.clone().map(with_noun).into_iter().collect()
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GreetingConfig::default()`.
pub fn load_config(path: &Path) -> Result<GreetingConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(GreetingConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GreetingConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
