//! Runtime server configuration.
//!
//! Layered from an optional TOML file and `PEOPLE_*` environment variables,
//! the latter winning. Nested keys use a double underscore, e.g.
//! `PEOPLE_ENRICH__TIMEOUT_MS=3000`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Environment, Source};
use people_enrich::EnrichConfig;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "PEOPLE";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  pub enrich:     EnrichConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "0.0.0.0".into(),
      port:       8080,
      store_path: PathBuf::from("people.db"),
      enrich:     EnrichConfig::default(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists) and the process environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    Self::from_sources(
      config::File::from(path).required(false),
      environment(),
    )
  }

  fn from_sources<F>(file: F, env: Environment) -> anyhow::Result<Self>
  where
    F: Source + Send + Sync + 'static,
  {
    config::Config::builder()
      .add_source(file)
      .add_source(env)
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn environment() -> Environment {
  Environment::with_prefix(ENV_PREFIX)
    .prefix_separator("_")
    .separator("__")
    .try_parsing(true)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
