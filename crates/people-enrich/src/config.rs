use std::time::Duration;

use serde::Deserialize;

/// Endpoints and timeout for the three prediction services.
///
/// Every field has a default, so an empty `[enrich]` table (or none at all)
/// talks to the public services with a 5 second timeout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
  pub agify_url:       String,
  pub genderize_url:   String,
  pub nationalize_url: String,
  /// Per-request timeout in milliseconds. Covers connect, send and body read.
  /// Zero means the default.
  pub timeout_ms:      u64,
}

const DEFAULT_TIMEOUT_MS: u64 = 5_000;

impl EnrichConfig {
  pub fn timeout(&self) -> Duration {
    match self.timeout_ms {
      0 => Duration::from_millis(DEFAULT_TIMEOUT_MS),
      ms => Duration::from_millis(ms),
    }
  }
}

impl Default for EnrichConfig {
  fn default() -> Self {
    Self {
      agify_url:       "https://api.agify.io/".into(),
      genderize_url:   "https://api.genderize.io/".into(),
      nationalize_url: "https://api.nationalize.io/".into(),
      timeout_ms:      DEFAULT_TIMEOUT_MS,
    }
  }
}
