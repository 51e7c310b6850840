//! [`HttpEnricher`]: the reqwest implementation of [`Enricher`].

use people_core::enrich::Enricher;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
  EnrichConfig, Error, Result,
  response::{AgeResponse, GenderResponse, NationalityResponse},
};

/// Async HTTP client for the three prediction services.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based. Each lookup
/// is a single attempt bounded by [`EnrichConfig::timeout`]; there are no
/// retries.
#[derive(Clone)]
pub struct HttpEnricher {
  client: Client,
  config: EnrichConfig,
}

impl HttpEnricher {
  pub fn new(config: EnrichConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout())
      .build()
      .map_err(Error::Client)?;
    Ok(Self { client, config })
  }

  async fn fetch<T: DeserializeOwned>(&self, url: &str, name: &str) -> reqwest::Result<T> {
    self
      .client
      .get(url)
      .query(&[("name", name)])
      .send()
      .await?
      .error_for_status()?
      .json()
      .await
  }

  /// Fetch and decode one prediction. Any failure is logged and turned into
  /// `None`.
  async fn lookup<T: DeserializeOwned>(
    &self,
    service: &'static str,
    url: &str,
    name: &str,
  ) -> Option<T> {
    match self.fetch(url, name).await {
      Ok(body) => Some(body),
      Err(e) => {
        warn!(service, name, error = %e, "lookup failed, leaving field empty");
        None
      }
    }
  }
}

// ─── Enricher impl ───────────────────────────────────────────────────────────

impl Enricher for HttpEnricher {
  async fn lookup_age<'a>(&'a self, name: &'a str) -> u32 {
    let age = self
      .lookup::<AgeResponse>("agify", &self.config.agify_url, name)
      .await
      .and_then(|r| r.age)
      .unwrap_or_default();
    debug!(name, age, "age lookup");
    age
  }

  async fn lookup_gender<'a>(&'a self, name: &'a str) -> String {
    let gender = self
      .lookup::<GenderResponse>("genderize", &self.config.genderize_url, name)
      .await
      .and_then(|r| r.gender)
      .unwrap_or_default();
    debug!(name, %gender, "gender lookup");
    gender
  }

  async fn lookup_nationality<'a>(&'a self, name: &'a str) -> String {
    let Some(top) = self
      .lookup::<NationalityResponse>("nationalize", &self.config.nationalize_url, name)
      .await
      .and_then(NationalityResponse::top)
    else {
      return String::new();
    };
    debug!(name, country = %top.country_id, probability = top.probability, "nationality lookup");
    top.country_id
  }
}
