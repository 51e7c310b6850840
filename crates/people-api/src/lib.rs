//! JSON REST API for the people enricher.
//!
//! Exposes an axum [`Router`] backed by a [`PersonService`]. TLS, tracing
//! layers and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = people_api::api_router(service).layer(TraceLayer::new_for_http());
//! ```

pub mod error;
pub mod people;

use axum::{Router, routing::get};
use people_core::{enrich::Enricher, service::PersonService, store::PersonStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, E>(service: PersonService<S, E>) -> Router<()>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  Router::new()
    .route("/people", get(people::list::<S, E>).post(people::create::<S, E>))
    .route(
      "/people/{id}",
      get(people::get_one::<S, E>)
        .put(people::update::<S, E>)
        .delete(people::delete::<S, E>),
    )
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────
