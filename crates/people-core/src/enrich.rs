//! The `Enricher` trait: name-based predictions from external services.
//!
//! Every lookup is best-effort: implementations absorb their own failures
//! (network errors, timeouts, bad status codes, malformed bodies) and return
//! the zero value instead, so the signatures carry no error type.

use std::future::Future;

/// Predicts attributes of a person from their first name.
pub trait Enricher: Send + Sync {
  /// Predicted age, or `0` if unknown.
  fn lookup_age<'a>(&'a self, name: &'a str) -> impl Future<Output = u32> + Send + 'a;

  /// Predicted gender (e.g. `"male"`, `"female"`), or `""` if unknown.
  fn lookup_gender<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = String> + Send + 'a;

  /// Most likely nationality as a two-letter country code, or `""`.
  fn lookup_nationality<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = String> + Send + 'a;
}

/// The combined result of the three lookups for one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
  pub age:         u32,
  pub gender:      String,
  pub nationality: String,
}
