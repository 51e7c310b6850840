//! Core types and trait definitions for the people enricher.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::PersonStore`], prediction clients
//! implement [`enrich::Enricher`], and [`service::PersonService`] ties the two
//! together.

pub mod enrich;
pub mod error;
pub mod person;
pub mod service;
pub mod store;

pub use error::{Error, Result};
