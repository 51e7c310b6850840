//! HTTP enrichment client for the people enricher.
//!
//! [`HttpEnricher`] implements [`people_core::enrich::Enricher`] against the
//! agify, genderize and nationalize prediction services.

mod client;
mod config;
mod response;

pub mod error;

pub use client::HttpEnricher;
pub use config::EnrichConfig;
pub use error::{Error, Result};
