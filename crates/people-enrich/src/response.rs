//! Response bodies of the prediction services.
//!
//! The services answer `null` for names they have no data on, so every
//! prediction is optional. Extra fields (`count`, `name`) are ignored.

use serde::Deserialize;

/// `GET https://api.agify.io/?name=…`
#[derive(Debug, Deserialize)]
pub struct AgeResponse {
  pub age: Option<u32>,
}

/// `GET https://api.genderize.io/?name=…`
#[derive(Debug, Deserialize)]
pub struct GenderResponse {
  pub gender: Option<String>,
}

/// `GET https://api.nationalize.io/?name=…`
///
/// `country` is ranked by the service, most probable first.
#[derive(Debug, Deserialize)]
pub struct NationalityResponse {
  #[serde(default)]
  pub country: Vec<CountryGuess>,
}

#[derive(Debug, Deserialize)]
pub struct CountryGuess {
  pub country_id:  String,
  #[serde(default)]
  pub probability: f64,
}

impl NationalityResponse {
  /// The service's top guess, taken as listed. No re-ranking by probability.
  pub fn top(self) -> Option<CountryGuess> { self.country.into_iter().next() }
}
