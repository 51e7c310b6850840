//! The `PersonStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `people-store-sqlite`).
//! [`PersonService`](crate::service::PersonService) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::person::{NewPerson, Person};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Filters for [`PersonStore::list`].
///
/// Each filter is a case-insensitive substring match. When both are set a
/// person must match both.
#[derive(Debug, Clone, Default)]
pub struct PersonFilter {
  pub name:    Option<String>,
  pub surname: Option<String>,
}

/// A 1-based page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  pub page:  u32,
  pub limit: u32,
}

impl Page {
  pub const DEFAULT_LIMIT: u32 = 10;

  /// Build a page, falling back to page 1 / limit 10 for missing or zero
  /// values.
  pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
    Self {
      page:  page.filter(|p| *p > 0).unwrap_or(1),
      limit: limit.filter(|l| *l > 0).unwrap_or(Self::DEFAULT_LIMIT),
    }
  }

  pub fn offset(&self) -> u64 { u64::from(self.page - 1) * u64::from(self.limit) }
}

impl Default for Page {
  fn default() -> Self { Self::new(None, None) }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a person store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new person and return it with its assigned id.
  fn create(
    &self,
    person: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// List people matching `filter`, ordered by id ascending.
  ///
  /// An empty result is not an error, including when the page lies past the
  /// last row.
  fn list<'a>(
    &'a self,
    filter: &'a PersonFilter,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;

  /// Overwrite every field of an existing person. Returns `None` if no person
  /// with `person.id` exists.
  fn update(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Hard-delete a person. Deleting an unknown id succeeds.
  fn delete(&self, id: i64) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
